//! Listing rows: the read model returned by searches and the insert model used to stock a database.

use serde::{Deserialize, Serialize};

/// One unit as returned by a search, flattened with its building and area names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PropertyRecord {
    pub id: i64,
    pub price: f64,
    pub property_type: Option<String>,
    pub purpose: Option<String>,
    pub completion: Option<String>,
    pub handover_date: Option<String>,
    pub furnishing: Option<String>,
    pub studio: Option<bool>,
    pub sqft: Option<f64>,
    pub baths: Option<i64>,
    pub beds: Option<i64>,
    pub view: Option<String>,
    pub vacant: Option<String>,
    pub agent_name: Option<String>,
    pub agent_whatsapp: Option<String>,
    pub building: Option<String>,
    pub area: Option<String>,
}

/// A unit to insert into `units`.
#[derive(Debug, Clone, Default)]
pub struct NewUnit {
    pub price: f64,
    pub property_type: String,
    pub purpose: String,
    pub beds: i64,
    pub baths: Option<i64>,
    pub sqft: Option<f64>,
    pub completion: Option<String>,
    pub handover_date: Option<String>,
    pub furnishing: Option<String>,
    pub studio: bool,
    pub view: Option<String>,
    pub vacant: Option<String>,
    pub agent_name: Option<String>,
    pub agent_whatsapp: Option<String>,
    /// `archived` hides the unit from every search.
    pub post_status: String,
    pub building_id: Option<i64>,
    pub area_id: Option<i64>,
}

impl NewUnit {
    /// A published unit with the fields every search filters on.
    pub fn new(
        property_type: impl Into<String>,
        purpose: impl Into<String>,
        beds: i64,
        price: f64,
    ) -> Self {
        Self {
            price,
            property_type: property_type.into(),
            purpose: purpose.into(),
            beds,
            post_status: "published".to_string(),
            ..Default::default()
        }
    }

    pub fn in_building(mut self, building_id: i64, area_id: Option<i64>) -> Self {
        self.building_id = Some(building_id);
        self.area_id = area_id;
        self
    }

    pub fn archived(mut self) -> Self {
        self.post_status = "archived".to_string();
        self
    }
}
