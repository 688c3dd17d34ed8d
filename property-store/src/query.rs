//! Translates [`FilterCriteria`] into a parameterized SQL search over `units`.
//!
//! The builder is pure: it produces SQL text and bind values, and the store executes
//! them. Missing required criteria yield no query at all.

use crate::models::FilterCriteria;
use tracing::warn;

const BASE_SELECT: &str = r#"
SELECT
    u.id, u.price, u.type_unit AS property_type, u.purpose, u.completion,
    u.handover_date, u.furnishing, u.studio, u.sqft,
    u.baths, u.beds, u.view, u.vacant, u.agent_name, u.agent_whatsapp,
    b.name AS building, a.original_name AS area
FROM units u
LEFT JOIN buildings b ON u.building_id = b.id
LEFT JOIN areas a ON u.area_id = a.id
WHERE u.post_status != 'archived'"#;

/// A value bound to a `?` placeholder, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Integer(i64),
    Real(f64),
}

/// SQL text plus its bind values.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyQuery {
    sql: String,
    binds: Vec<BindValue>,
}

/// Trimmed, non-empty text.
fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl PropertyQuery {
    /// Builds the search for `criteria`, or `None` when type, bedroom count or either
    /// price bound is missing.
    pub fn from_criteria(criteria: &FilterCriteria) -> Option<Self> {
        let missing = criteria.missing_required();
        if !missing.is_empty() {
            warn!(missing = ?missing, "Required search criteria missing, skipping query");
            return None;
        }

        let mut query = Self {
            sql: BASE_SELECT.to_string(),
            binds: Vec::new(),
        };

        if let Some(t) = text(&criteria.property_type) {
            query.push(" AND LOWER(u.type_unit) = LOWER(?)", BindValue::Text(t.to_string()));
        }
        if let Some(beds) = criteria.bedroom_count {
            query.push(" AND u.beds = ?", BindValue::Integer(beds));
        }
        if let Some(min) = criteria.min_price {
            query.push(" AND u.price >= ?", BindValue::Real(min));
        }
        if let Some(max) = criteria.max_price {
            query.push(" AND u.price <= ?", BindValue::Real(max));
        }
        if let Some(purpose) = criteria.purpose {
            query.push(
                " AND LOWER(u.purpose) = LOWER(?)",
                BindValue::Text(purpose.store_value().to_string()),
            );
        }
        if let Some(view) = text(&criteria.view) {
            query.push(" AND LOWER(u.view) = LOWER(?)", BindValue::Text(view.to_string()));
        }
        if let Some(area) = text(&criteria.area) {
            query.push(
                " AND a.original_name LIKE ?",
                BindValue::Text(format!("%{}%", area)),
            );
        }
        if let Some(building) = text(&criteria.building) {
            query.push(" AND b.name LIKE ?", BindValue::Text(format!("%{}%", building)));
        }
        if let Some(baths) = criteria.bath_count {
            query.push(" AND u.baths = ?", BindValue::Integer(baths));
        }
        if let Some(sqft_min) = criteria.sqft_min {
            query.push(" AND u.sqft >= ?", BindValue::Real(sqft_min));
        }
        if let Some(sqft_max) = criteria.sqft_max {
            query.push(" AND u.sqft <= ?", BindValue::Real(sqft_max));
        }
        if let Some(furnishing) = text(&criteria.furnishing) {
            query.push(
                " AND LOWER(u.furnishing) = LOWER(?)",
                BindValue::Text(furnishing.to_string()),
            );
        }
        if let Some(vacant) = text(&criteria.vacant) {
            query.push(" AND LOWER(u.vacant) = LOWER(?)", BindValue::Text(vacant.to_string()));
        }
        if let Some(handover) = text(&criteria.handover_date) {
            query.push(" AND u.handover_date < ?", BindValue::Text(handover.to_string()));
        }
        if let Some(completion) = text(&criteria.completion) {
            query.push(" AND u.completion = ?", BindValue::Text(completion.to_string()));
        }

        query.sql.push_str(" ORDER BY u.price ASC, u.id ASC");
        Some(query)
    }

    fn push(&mut self, clause: &str, value: BindValue) {
        self.sql.push_str(clause);
        self.binds.push(value);
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn binds(&self) -> &[BindValue] {
        &self.binds
    }
}
