//! Property store crate: filter criteria, the query builder and listing persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – FilterCriteria, Purpose, PropertyRecord, NewUnit
//! - [`query`] – PropertyQuery (criteria → parameterized SQL)
//! - [`repository`] – PropertyStore trait
//! - [`sqlite_store`] – SqlitePropertyStore

mod error;
mod models;
mod query;
mod repository;
mod sqlite_store;

pub use error::StorageError;
pub use models::{FilterCriteria, NewUnit, PropertyRecord, Purpose};
pub use query::{BindValue, PropertyQuery};
pub use repository::PropertyStore;
pub use sqlite_store::SqlitePropertyStore;
