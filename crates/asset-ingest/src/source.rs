//! Raw file access with size and encoding checks.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Maximum input file size (100 MB).
pub const MAX_INPUT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::read(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Read a UTF-8 text file, dropping a leading byte-order mark.
///
/// UTF-16 files (detected by BOM) and invalid UTF-8 are rejected.
pub fn read_text(path: &Path) -> Result<String> {
    check_file_size_with_limit(path, MAX_INPUT_FILE_SIZE)?;
    let bytes = std::fs::read(path).map_err(|e| IngestError::read(path, e))?;

    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }

    let text = String::from_utf8(bytes).map_err(|_| IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding: "non-UTF-8",
    })?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn strips_utf8_bom() {
        let file = temp_file("\u{feff}assetTagging\nA\n".as_bytes());
        assert_eq!(read_text(file.path()).unwrap(), "assetTagging\nA\n");
    }

    #[test]
    fn rejects_utf16() {
        let file = temp_file(&[0xFF, 0xFE, b'a', 0]);
        assert!(matches!(
            read_text(file.path()),
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let file = temp_file(&[b'a', 0xC3, 0x28]);
        assert!(matches!(
            read_text(file.path()),
            Err(IngestError::UnsupportedEncoding { .. })
        ));
    }

    #[test]
    fn enforces_size_limit() {
        let file = temp_file(b"0123456789");
        assert!(check_file_size_with_limit(file.path(), 10).is_ok());
        assert!(matches!(
            check_file_size_with_limit(file.path(), 9),
            Err(IngestError::FileTooLarge { size: 10, .. })
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let result = read_text(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
