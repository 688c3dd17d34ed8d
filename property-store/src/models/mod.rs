//! Data models: search criteria and listing rows.

mod criteria;
mod property_record;

pub use criteria::{FilterCriteria, Purpose};
pub use property_record::{NewUnit, PropertyRecord};
