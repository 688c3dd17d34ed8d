//! Search criteria extracted from a user's request.
//!
//! Every field is optional; [`FilterCriteria::missing_required`] reports the ones a
//! search cannot run without.

use serde::{Deserialize, Serialize};

/// Sale or rental intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purpose {
    Sale,
    Rent,
}

impl Purpose {
    /// Normalizes user or model vocabulary (`buy`, `sale`, `For Sale`, `rent`, `For Rent`, ...).
    /// Empty or unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "buy" | "sale" | "for sale" | "purchase" => Some(Purpose::Sale),
            "rent" | "for rent" | "rental" => Some(Purpose::Rent),
            _ => None,
        }
    }

    /// Value stored in `units.purpose`.
    pub fn store_value(&self) -> &'static str {
        match self {
            Purpose::Sale => "For Sale",
            Purpose::Rent => "For Rent",
        }
    }
}

/// Structured search constraints. Bedroom count, property type and both price bounds are
/// required for a search to execute; everything else narrows it further.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub purpose: Option<Purpose>,
    pub bedroom_count: Option<i64>,
    pub property_type: Option<String>,
    pub area: Option<String>,
    pub building: Option<String>,
    pub view: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bath_count: Option<i64>,
    pub sqft_min: Option<f64>,
    pub sqft_max: Option<f64>,
    pub furnishing: Option<String>,
    pub completion: Option<String>,
    pub vacant: Option<String>,
    /// ISO date (`YYYY-MM-DD`); units must be handed over before it.
    pub handover_date: Option<String>,
}

impl FilterCriteria {
    /// Criteria with the four required fields set.
    pub fn new(
        property_type: impl Into<String>,
        bedroom_count: i64,
        min_price: f64,
        max_price: f64,
    ) -> Self {
        Self {
            property_type: Some(property_type.into()),
            bedroom_count: Some(bedroom_count),
            min_price: Some(min_price),
            max_price: Some(max_price),
            ..Default::default()
        }
    }

    /// Names of required fields that are absent, in a stable order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.property_type.as_deref().map_or(true, |t| t.trim().is_empty()) {
            missing.push("type");
        }
        if self.bedroom_count.is_none() {
            missing.push("bedroom_count");
        }
        if self.min_price.is_none() {
            missing.push("min_price");
        }
        if self.max_price.is_none() {
            missing.push("max_price");
        }
        missing
    }

    pub fn is_searchable(&self) -> bool {
        self.missing_required().is_empty()
    }

    pub fn with_purpose(mut self, purpose: Purpose) -> Self {
        self.purpose = Some(purpose);
        self
    }

    pub fn with_max_price(mut self, max_price: Option<f64>) -> Self {
        self.max_price = max_price;
        self
    }

    /// True when the purpose normalizes to a sale intent.
    pub fn is_sale(&self) -> bool {
        self.purpose == Some(Purpose::Sale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purpose_parse_vocabulary() {
        assert_eq!(Purpose::parse("buy"), Some(Purpose::Sale));
        assert_eq!(Purpose::parse("For Sale"), Some(Purpose::Sale));
        assert_eq!(Purpose::parse(" for sale "), Some(Purpose::Sale));
        assert_eq!(Purpose::parse("rent"), Some(Purpose::Rent));
        assert_eq!(Purpose::parse("For Rent"), Some(Purpose::Rent));
        assert_eq!(Purpose::parse(""), None);
        assert_eq!(Purpose::parse("lease-to-own"), None);
    }

    #[test]
    fn test_store_values() {
        assert_eq!(Purpose::Sale.store_value(), "For Sale");
        assert_eq!(Purpose::Rent.store_value(), "For Rent");
    }

    #[test]
    fn test_missing_required() {
        assert!(FilterCriteria::new("Apartment", 2, 1.0, 2.0).is_searchable());

        let empty = FilterCriteria::default();
        assert_eq!(
            empty.missing_required(),
            vec!["type", "bedroom_count", "min_price", "max_price"]
        );

        let blank_type = FilterCriteria {
            property_type: Some("  ".to_string()),
            ..FilterCriteria::new("x", 1, 1.0, 2.0)
        };
        assert_eq!(blank_type.missing_required(), vec!["type"]);

        let no_max = FilterCriteria::new("Villa", 4, 1.0, 2.0).with_max_price(None);
        assert_eq!(no_max.missing_required(), vec!["max_price"]);
    }

    #[test]
    fn test_is_sale() {
        let c = FilterCriteria::new("Villa", 4, 1.0, 2.0);
        assert!(!c.is_sale());
        assert!(c.clone().with_purpose(Purpose::Sale).is_sale());
        assert!(!c.with_purpose(Purpose::Rent).is_sale());
    }
}
