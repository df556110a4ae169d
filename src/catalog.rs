//! Bundled Catalog
//!
//! The listing dataset ships inside the binary.

use serde::Deserialize;

use crate::models::Property;

const CATALOG_JSON: &str = include_str!("../assets/properties.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct CatalogFile {
    properties: Vec<serde_json::Value>,
}

/// Decode the bundled catalog
pub fn load_catalog() -> Result<Vec<Property>, CatalogError> {
    parse_catalog(CATALOG_JSON)
}

/// Decode a catalog document, skipping records that fail validation
pub fn parse_catalog(raw: &str) -> Result<Vec<Property>, CatalogError> {
    let file: CatalogFile = serde_json::from_str(raw)?;
    let total = file.properties.len();
    let properties: Vec<Property> = file
        .properties
        .iter()
        .filter_map(|record| match Property::from_record(record) {
            Ok(property) => Some(property),
            Err(e) => {
                log::warn!("[CATALOG] Skipping listing: {}", e);
                None
            }
        })
        .collect();
    log::info!("[CATALOG] Loaded {} of {} listings", properties.len(), total);
    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter, SearchForm};
    use crate::models::PropertyType;

    #[test]
    fn test_bundled_catalog() {
        let catalog = load_catalog().unwrap();
        assert_eq!(catalog.len(), 7);
        assert!(catalog.iter().all(|p| p.validate().is_ok()));
        assert!(catalog.iter().all(|p| !p.images.is_empty()));
    }

    #[test]
    fn test_bundled_catalog_search() {
        let catalog = load_catalog().unwrap();
        let form = SearchForm {
            property_type: "House".to_string(),
            bedrooms: "3".to_string(),
            min_price: "200000".to_string(),
            max_price: "500000".to_string(),
            ..SearchForm::default()
        };
        let result = filter(&catalog, &form.criteria());
        let ids: Vec<_> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["prop1", "prop6"]);
        assert!(result
            .iter()
            .all(|p| p.property_type == PropertyType::House && p.bedrooms == 3));
    }

    #[test]
    fn test_invalid_listing_skipped() {
        let raw = r#"{"properties": [
            {"id": "a", "type": "Flat", "bedrooms": 1, "price": 1, "location": "X", "description": "Y"},
            {"id": "b", "type": "Flat", "bedrooms": 1, "location": "X", "description": "Y"}
        ]}"#;
        let catalog = parse_catalog(raw).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, "a");
    }

    #[test]
    fn test_malformed_catalog() {
        assert!(parse_catalog("[]").is_err());
    }
}
