//! Floor Plan Summary
//!
//! Indicative room sizes and layout derived from type and bedroom count.

use crate::models::{Property, PropertyType};

/// Derived floor plan figures for a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorPlanSummary {
    pub living_room: &'static str,
    pub kitchen: &'static str,
    pub bathroom: &'static str,
    /// One entry per bedroom, master first
    pub bedrooms: Vec<&'static str>,
    pub total_area_m2: u32,
    pub levels: &'static str,
}

impl FloorPlanSummary {
    pub fn for_property(property: &Property) -> Self {
        Self::new(property.property_type, property.bedrooms)
    }

    pub fn new(property_type: PropertyType, bedrooms: u32) -> Self {
        let house = property_type == PropertyType::House;
        let pick = |house_size, flat_size| if house { house_size } else { flat_size };

        let bedroom_sizes = (0..bedrooms)
            .map(|i| match i {
                0 => pick("4.5m × 3.8m", "4.0m × 3.5m"),
                1 => pick("3.8m × 3.2m", "3.5m × 3.0m"),
                _ => pick("3.5m × 3.0m", "3.2m × 2.8m"),
            })
            .collect();

        let total_area_m2 = if house { 90 + bedrooms * 15 } else { 65 + bedrooms * 10 };

        let levels = match property_type {
            PropertyType::House if bedrooms >= 4 => "Ground, First & Second Floor",
            PropertyType::House => "Ground & First Floor",
            PropertyType::Flat => "First Floor",
        };

        Self {
            living_room: pick("5.2m × 4.1m", "4.8m × 3.6m"),
            kitchen: pick("4.5m × 3.2m", "3.2m × 2.8m"),
            bathroom: pick("2.8m × 2.2m", "2.5m × 2.0m"),
            bedrooms: bedroom_sizes,
            total_area_m2,
            levels,
        }
    }

    pub fn total_area(&self) -> String {
        format!("{}m²", self.total_area_m2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_summary() {
        let plan = FloorPlanSummary::new(PropertyType::House, 3);
        assert_eq!(plan.total_area(), "135m²");
        assert_eq!(plan.levels, "Ground & First Floor");
        assert_eq!(plan.bedrooms, ["4.5m × 3.8m", "3.8m × 3.2m", "3.5m × 3.0m"]);
        assert_eq!(plan.living_room, "5.2m × 4.1m");
    }

    #[test]
    fn test_large_house_has_three_levels() {
        let plan = FloorPlanSummary::new(PropertyType::House, 4);
        assert_eq!(plan.levels, "Ground, First & Second Floor");
        assert_eq!(plan.bedrooms.len(), 4);
    }

    #[test]
    fn test_flat_summary() {
        let plan = FloorPlanSummary::new(PropertyType::Flat, 2);
        assert_eq!(plan.total_area_m2, 85);
        assert_eq!(plan.levels, "First Floor");
        assert_eq!(plan.kitchen, "3.2m × 2.8m");
        assert_eq!(plan.bedrooms, ["4.0m × 3.5m", "3.5m × 3.0m"]);
    }

    #[test]
    fn test_studio_has_no_bedrooms() {
        let plan = FloorPlanSummary::new(PropertyType::Flat, 0);
        assert!(plan.bedrooms.is_empty());
        assert_eq!(plan.total_area_m2, 65);
    }
}
