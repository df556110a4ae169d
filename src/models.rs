//! Frontend Models
//!
//! Property listing records as stored in the bundled catalog and in the
//! favorites slot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::security::{validate_record, ValidationError};

/// Kind of dwelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Flat,
}

impl PropertyType {
    pub const ALL: [PropertyType; 2] = [PropertyType::House, PropertyType::Flat];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Flat => "Flat",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "House" => Ok(PropertyType::House),
            "Flat" => Ok(PropertyType::Flat),
            other => Err(format!("unknown property type: {}", other)),
        }
    }
}

/// Date a listing went live, as published (month by name)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedDate {
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub year: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Property listing (matches the catalog JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub price: u64,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub tenure: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub floor_plan: String,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub added: AddedDate,
}

impl Property {
    /// Decode an untyped record, checking the required fields first
    pub fn from_record(record: &serde_json::Value) -> Result<Self, ValidationError> {
        validate_record(record)?;
        serde_json::from_value(record.clone()).map_err(|e| ValidationError::Decode(e.to_string()))
    }

    /// Required text fields must be non-blank
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("id", &self.id),
            ("location", &self.location),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::BlankField(field));
            }
        }
        Ok(())
    }

    /// First image, if the listing has any
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// "3 Bedroom House"
    pub fn headline(&self) -> String {
        format!("{} Bedroom {}", self.bedrooms, self.property_type)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn property(id: &str, property_type: PropertyType, bedrooms: u32, price: u64) -> Property {
        Property {
            id: id.to_string(),
            property_type,
            bedrooms,
            price,
            location: format!("{} Street, London", id),
            description: format!("Listing {}", id),
            postcode: "E14".to_string(),
            tenure: "Freehold".to_string(),
            images: vec![format!("images/{}.jpg", id)],
            floor_plan: String::new(),
            coordinates: Coordinates { lat: 51.5, lng: -0.02 },
            added: AddedDate { day: 1, month: "January".to_string(), year: 2024 },
        }
    }
}
