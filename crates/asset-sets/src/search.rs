use asset_model::Asset;

/// Assets whose tag, class, sub-class, description or location contains
/// `query`, ignoring case. A blank query matches everything.
pub fn search_assets<'a>(assets: &'a [Asset], query: &str) -> Vec<&'a Asset> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return assets.iter().collect();
    }
    assets
        .iter()
        .filter(|asset| asset.search_text().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_any_text_field() {
        let assets = vec![
            Asset::new("SSBAS/Mo/2025-26/T01").with_location("Physics Lab"),
            Asset::new("FURN-014").with_description("Steel cupboard"),
            Asset::new("LAB-220").with_class("Lab Equipment"),
        ];

        let hits: Vec<_> = search_assets(&assets, "LAB")
            .into_iter()
            .map(|asset| asset.asset_tagging.as_str())
            .collect();
        assert_eq!(hits, vec!["SSBAS/Mo/2025-26/T01", "LAB-220"]);

        assert_eq!(search_assets(&assets, "cupboard").len(), 1);
        assert!(search_assets(&assets, "projector").is_empty());
    }

    #[test]
    fn blank_query_returns_all() {
        let assets = vec![Asset::new("A"), Asset::new("B")];
        assert_eq!(search_assets(&assets, "  ").len(), 2);
    }
}
