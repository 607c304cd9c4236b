use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid set identifier '{0}': expected <financial year>-<set id>")]
    InvalidSetKey(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
