//! The `database_search` function offered to the model and the payload it sends back.

use openai_client::FunctionSpec;
use property_store::{FilterCriteria, Purpose};
use serde::Deserialize;
use serde_json::json;

pub const SEARCH_FUNCTION_NAME: &str = "database_search";

pub const PROPERTY_TYPES: [&str; 5] = ["Apartment", "Penthouse", "Residental", "Townhouse", "Villa"];
pub const PURPOSES: [&str; 3] = ["", "For Sale", "For Rent"];
pub const COMPLETIONS: [&str; 3] = ["", "Off-Plan", "Ready"];
pub const FURNISHINGS: [&str; 3] = ["", "Furnished", "Unfurnished"];
pub const STUDIO: [&str; 3] = ["", "Studio", "None"];
pub const VACANCIES: [&str; 4] = ["", "Vacant", "Rented", "Tenanted"];

/// Function definition for `database_search`. Strict mode: every property is required,
/// so the model fills unused strings with `""` and unused numbers with `0`.
pub fn search_function() -> FunctionSpec {
    let parameters = json!({
        "type": "object",
        "properties": {
            "min_price": { "type": "number", "description": "Minimum price of the property" },
            "max_price": { "type": "number", "description": "Maximum price of the property" },
            "type": {
                "type": "string",
                "enum": PROPERTY_TYPES,
                "description": "Type of property searched for"
            },
            "purpose": {
                "type": "string",
                "enum": PURPOSES,
                "description": "Whether the property is for sale or for rent"
            },
            "completion": {
                "type": "string",
                "enum": COMPLETIONS,
                "description": "Whether the property is ready or off-plan"
            },
            "handover_date": {
                "type": "string",
                "description": "Latest acceptable handover date, YYYY-MM-DD"
            },
            "furnishing": {
                "type": "string",
                "enum": FURNISHINGS,
                "description": "Whether the property is furnished"
            },
            "studio": {
                "type": "string",
                "enum": STUDIO,
                "description": "Whether the property is a studio"
            },
            "sqft": { "type": "number", "description": "Minimum floor area in square feet" },
            "bath_count": { "type": "number", "description": "Number of bathrooms" },
            "bedroom_count": { "type": "number", "description": "Number of bedrooms" },
            "view": {
                "type": "string",
                "description": "Landmark the property should have a view of"
            },
            "vacant": {
                "type": "string",
                "enum": VACANCIES,
                "description": "Whether the property is vacant or occupied"
            },
            "area": { "type": "string", "description": "Area name" },
            "building": { "type": "string", "description": "Building name" }
        },
        "required": [
            "min_price", "max_price", "type", "purpose", "completion", "area", "building",
            "vacant", "view", "bedroom_count", "bath_count", "sqft", "studio", "furnishing",
            "handover_date"
        ],
        "additionalProperties": false
    });

    FunctionSpec {
        name: SEARCH_FUNCTION_NAME.to_string(),
        description: "Get the list of matching real estate listings".to_string(),
        parameters,
        strict: true,
    }
}

/// Raw `database_search` arguments as the model sends them. Fields are optional so that a
/// non-strict endpoint that drops some of them still parses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchArguments {
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default, rename = "type")]
    pub property_type: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub completion: Option<String>,
    #[serde(default)]
    pub handover_date: Option<String>,
    #[serde(default)]
    pub furnishing: Option<String>,
    #[serde(default)]
    pub studio: Option<String>,
    #[serde(default)]
    pub sqft: Option<f64>,
    #[serde(default)]
    pub bath_count: Option<f64>,
    #[serde(default)]
    pub bedroom_count: Option<f64>,
    #[serde(default)]
    pub view: Option<String>,
    #[serde(default)]
    pub vacant: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub building: Option<String>,
}

fn text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

impl SearchArguments {
    pub fn from_json(arguments: &str) -> serde_json::Result<Self> {
        serde_json::from_str(arguments)
    }

    /// Converts into criteria. Empty strings become absent; bath count and floor area of
    /// zero mean "not mentioned". `sqft` is the lower floor-area bound. `studio` has no
    /// column to filter on and is dropped.
    pub fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            purpose: self.purpose.as_deref().and_then(Purpose::parse),
            bedroom_count: self.bedroom_count.map(|v| v.round() as i64),
            property_type: text(self.property_type),
            area: text(self.area),
            building: text(self.building),
            view: text(self.view),
            min_price: self.min_price,
            max_price: self.max_price,
            bath_count: positive(self.bath_count).map(|v| v.round() as i64),
            sqft_min: positive(self.sqft),
            sqft_max: None,
            furnishing: text(self.furnishing),
            completion: text(self.completion),
            vacant: text(self.vacant),
            handover_date: text(self.handover_date),
        }
    }
}
