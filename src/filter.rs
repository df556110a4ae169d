//! Search Filtering
//!
//! Turns the raw search form into typed [`Criteria`] and filters the catalog.
//! Every predicate is independent; a property is kept when all of them hold.

use std::str::FromStr;

use chrono::Month;

use crate::models::{Property, PropertyType};
use crate::security::strip_markup;

/// Bedroom selector value meaning "this many or more"
pub const OPEN_ENDED_BEDROOMS: u32 = 5;

/// Form value meaning "no restriction"
pub const ANY: &str = "any";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    Any,
    Only(PropertyType),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BedroomFilter {
    #[default]
    Any,
    Exactly(u32),
    AtLeast(u32),
}

/// Typed search criteria; `Default` matches everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub property_type: TypeFilter,
    pub bedrooms: BedroomFilter,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    /// Lower-cased query with markup characters removed
    location: Option<String>,
    /// Full month name, e.g. "March"
    pub added_month: Option<String>,
}

impl Criteria {
    /// Set the location query from raw user text
    pub fn with_location(mut self, raw: &str) -> Self {
        let query = strip_markup(raw).trim().to_lowercase();
        self.location = (!query.is_empty()).then_some(query);
        self
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn matches_type(&self, property: &Property) -> bool {
        match self.property_type {
            TypeFilter::Any => true,
            TypeFilter::Only(wanted) => property.property_type == wanted,
        }
    }

    pub fn matches_bedrooms(&self, property: &Property) -> bool {
        match self.bedrooms {
            BedroomFilter::Any => true,
            BedroomFilter::Exactly(n) => property.bedrooms == n,
            BedroomFilter::AtLeast(n) => property.bedrooms >= n,
        }
    }

    pub fn matches_price(&self, property: &Property) -> bool {
        self.min_price.map_or(true, |min| property.price >= min)
            && self.max_price.map_or(true, |max| property.price <= max)
    }

    /// Case-insensitive substring of location or postcode
    pub fn matches_location(&self, property: &Property) -> bool {
        let Some(query) = &self.location else {
            return true;
        };
        [&property.location, &property.postcode]
            .iter()
            .any(|field| field.to_lowercase().contains(query.as_str()))
    }

    pub fn matches_month(&self, property: &Property) -> bool {
        self.added_month
            .as_deref()
            .map_or(true, |month| property.added.month == month)
    }

    pub fn matches(&self, property: &Property) -> bool {
        self.matches_type(property)
            && self.matches_bedrooms(property)
            && self.matches_price(property)
            && self.matches_location(property)
            && self.matches_month(property)
    }
}

/// Keep the properties satisfying every criterion, in catalog order
pub fn filter(properties: &[Property], criteria: &Criteria) -> Vec<Property> {
    properties
        .iter()
        .filter(|property| criteria.matches(property))
        .cloned()
        .collect()
}

/// Raw search form values, as the inputs hold them
#[derive(Debug, Clone, PartialEq)]
pub struct SearchForm {
    pub property_type: String,
    pub bedrooms: String,
    pub min_price: String,
    pub max_price: String,
    pub location: String,
    pub added_month: String,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            property_type: ANY.to_string(),
            bedrooms: ANY.to_string(),
            min_price: String::new(),
            max_price: String::new(),
            location: String::new(),
            added_month: ANY.to_string(),
        }
    }
}

impl SearchForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build criteria. Values that do not parse disable their filter.
    pub fn criteria(&self) -> Criteria {
        Criteria {
            property_type: parse_type(&self.property_type),
            bedrooms: parse_bedrooms(&self.bedrooms),
            min_price: parse_price("min price", &self.min_price),
            max_price: parse_price("max price", &self.max_price),
            location: None,
            added_month: parse_month(&self.added_month),
        }
        .with_location(&self.location)
    }
}

fn is_unset(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(ANY)
}

fn parse_type(value: &str) -> TypeFilter {
    if is_unset(value) {
        return TypeFilter::Any;
    }
    match PropertyType::from_str(value) {
        Ok(wanted) => TypeFilter::Only(wanted),
        Err(e) => {
            log::warn!("[SEARCH] Ignoring type filter: {}", e);
            TypeFilter::Any
        }
    }
}

fn parse_bedrooms(value: &str) -> BedroomFilter {
    if is_unset(value) {
        return BedroomFilter::Any;
    }
    match value.trim().parse::<u32>() {
        Ok(n) if n == OPEN_ENDED_BEDROOMS => BedroomFilter::AtLeast(n),
        Ok(n) => BedroomFilter::Exactly(n),
        Err(e) => {
            log::warn!("[SEARCH] Ignoring bedroom filter {:?}: {}", value, e);
            BedroomFilter::Any
        }
    }
}

fn parse_price(label: &str, value: &str) -> Option<u64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<u64>() {
        Ok(price) => Some(price),
        Err(e) => {
            log::warn!("[SEARCH] Ignoring {} {:?}: {}", label, value, e);
            None
        }
    }
}

fn parse_month(value: &str) -> Option<String> {
    if is_unset(value) {
        return None;
    }
    match value.trim().parse::<Month>() {
        Ok(month) => Some(month.name().to_string()),
        Err(_) => {
            log::warn!("[SEARCH] Ignoring unknown month {:?}", value);
            None
        }
    }
}

/// Month names for the "added in" selector, January first
pub fn month_names() -> Vec<&'static str> {
    (1..=12u8)
        .filter_map(|n| Month::try_from(n).ok())
        .map(|month| month.name())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::property;
    use crate::models::PropertyType::{Flat, House};

    fn dataset() -> Vec<Property> {
        let mut props = vec![
            property("p1", House, 3, 250000),
            property("p2", House, 3, 650000),
            property("p3", Flat, 3, 300000),
            property("p4", House, 2, 300000),
            property("p5", House, 3, 500000),
            property("p6", House, 6, 900000),
            property("p7", Flat, 1, 180000),
        ];
        props[2].location = "Bow Road, London".to_string();
        props[2].postcode = "E3".to_string();
        props[5].location = "Richmond".to_string();
        props[5].postcode = "TW9".to_string();
        props[5].added.month = "March".to_string();
        props[6].location = "St John's Wood".to_string();
        props[6].postcode = "NW8".to_string();
        props
    }

    fn ids(props: &[Property]) -> Vec<&str> {
        props.iter().map(|p| p.id.as_str()).collect()
    }

    fn form(f: impl FnOnce(&mut SearchForm)) -> Criteria {
        let mut form = SearchForm::default();
        f(&mut form);
        form.criteria()
    }

    #[test]
    fn test_default_criteria_is_identity() {
        let props = dataset();
        assert_eq!(filter(&props, &Criteria::default()), props);
        assert_eq!(filter(&props, &SearchForm::default().criteria()), props);
        assert!(filter(&[], &Criteria::default()).is_empty());
    }

    #[test]
    fn test_house_three_beds_price_band() {
        let criteria = form(|f| {
            f.property_type = "House".to_string();
            f.bedrooms = "3".to_string();
            f.min_price = "200000".to_string();
            f.max_price = "500000".to_string();
        });
        let result = filter(&dataset(), &criteria);
        assert_eq!(ids(&result), ["p1", "p5"]);
        for p in &result {
            assert_eq!(p.property_type, House);
            assert_eq!(p.bedrooms, 3);
            assert!((200000..=500000).contains(&p.price));
        }
    }

    #[test]
    fn test_results_satisfy_every_predicate() {
        let forms = [
            form(|f| f.property_type = "Flat".to_string()),
            form(|f| f.bedrooms = "5".to_string()),
            form(|f| f.min_price = "300000".to_string()),
            form(|f| {
                f.location = "london".to_string();
                f.max_price = "400000".to_string();
            }),
            form(|f| f.added_month = "January".to_string()),
        ];
        let props = dataset();
        for criteria in &forms {
            let result = filter(&props, criteria);
            for p in &result {
                assert!(criteria.matches_type(p));
                assert!(criteria.matches_bedrooms(p));
                assert!(criteria.matches_price(p));
                assert!(criteria.matches_location(p));
                assert!(criteria.matches_month(p));
            }
            let rejected = props.iter().filter(|p| !result.contains(p));
            for p in rejected {
                assert!(!criteria.matches(p));
            }
        }
    }

    #[test]
    fn test_open_ended_bedrooms() {
        assert_eq!(form(|f| f.bedrooms = "5".to_string()).bedrooms, BedroomFilter::AtLeast(5));
        assert_eq!(ids(&filter(&dataset(), &form(|f| f.bedrooms = "5".to_string()))), ["p6"]);
        assert_eq!(ids(&filter(&dataset(), &form(|f| f.bedrooms = "1".to_string()))), ["p7"]);
    }

    #[test]
    fn test_location_matches_location_or_postcode() {
        let by_postcode = form(|f| f.location = "e3".to_string());
        assert_eq!(ids(&filter(&dataset(), &by_postcode)), ["p3"]);

        let by_name = form(|f| f.location = "  RICHMOND ".to_string());
        assert_eq!(ids(&filter(&dataset(), &by_name)), ["p6"]);
    }

    #[test]
    fn test_location_with_apostrophe() {
        let criteria = form(|f| f.location = "John's".to_string());
        assert_eq!(ids(&filter(&dataset(), &criteria)), ["p7"]);
        assert_eq!(criteria.location(), Some("john's"));
    }

    #[test]
    fn test_location_matches_raw_text_only() {
        let props = dataset();
        for query in ["x27", "#", "27;s", "&amp", "&#x2f;"] {
            let criteria = Criteria::default().with_location(query);
            let result = filter(&props, &criteria);
            assert!(result.is_empty(), "{query:?} matched {:?}", ids(&result));
        }
    }

    #[test]
    fn test_location_markup_stripped() {
        let criteria = form(|f| f.location = "<b>Richmond</b>".to_string());
        assert_eq!(criteria.location(), Some("brichmond/b"));
        assert!(filter(&dataset(), &criteria).is_empty());

        let criteria = Criteria::default().with_location("<>");
        assert_eq!(criteria.location(), None);
    }

    #[test]
    fn test_added_month() {
        let march = form(|f| f.added_month = "march".to_string());
        assert_eq!(march.added_month.as_deref(), Some("March"));
        assert_eq!(ids(&filter(&dataset(), &march)), ["p6"]);
    }

    #[test]
    fn test_malformed_values_disable_filter() {
        let criteria = form(|f| {
            f.property_type = "Castle".to_string();
            f.bedrooms = "lots".to_string();
            f.min_price = "200k".to_string();
            f.max_price = "-1".to_string();
            f.added_month = "Smarch".to_string();
        });
        assert_eq!(criteria, Criteria::default());
        assert_eq!(filter(&dataset(), &criteria).len(), 7);
    }

    #[test]
    fn test_inverted_price_band_is_empty() {
        let criteria = Criteria {
            min_price: Some(600000),
            max_price: Some(100000),
            ..Criteria::default()
        };
        assert!(filter(&dataset(), &criteria).is_empty());
    }

    #[test]
    fn test_form_reset() {
        let mut f = SearchForm::default();
        f.location = "Bow".to_string();
        f.bedrooms = "2".to_string();
        f.reset();
        assert_eq!(f, SearchForm::default());
    }

    #[test]
    fn test_month_names() {
        let names = month_names();
        assert_eq!(names.len(), 12);
        assert_eq!(names[0], "January");
        assert_eq!(names[11], "December");
    }
}
