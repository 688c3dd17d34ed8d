//! SQLite-backed [`PropertyStore`].
//!
//! Opens a fresh connection per query and closes it afterwards; there is no pool and no
//! transaction spanning queries. Schema: `areas`, `buildings`, `units` joined on foreign keys.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{error, info, instrument};

use crate::error::StorageError;
use crate::models::{FilterCriteria, NewUnit, PropertyRecord};
use crate::query::{BindValue, PropertyQuery};
use crate::repository::PropertyStore;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS areas (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    original_name TEXT NOT NULL UNIQUE
);
CREATE TABLE IF NOT EXISTS buildings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    area_id INTEGER REFERENCES areas(id)
);
CREATE TABLE IF NOT EXISTS units (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    price REAL NOT NULL,
    type_unit TEXT NOT NULL,
    purpose TEXT NOT NULL,
    completion TEXT,
    handover_date TEXT,
    furnishing TEXT,
    studio BOOLEAN NOT NULL DEFAULT 0,
    sqft REAL,
    baths INTEGER,
    beds INTEGER NOT NULL,
    view TEXT,
    vacant TEXT,
    agent_name TEXT,
    agent_whatsapp TEXT,
    post_status TEXT NOT NULL DEFAULT 'published',
    building_id INTEGER REFERENCES buildings(id),
    area_id INTEGER REFERENCES areas(id)
);
CREATE INDEX IF NOT EXISTS idx_units_search ON units(type_unit, beds, price);
CREATE INDEX IF NOT EXISTS idx_units_building_id ON units(building_id);
"#;

/// Listing store over a SQLite database file.
#[derive(Clone)]
pub struct SqlitePropertyStore {
    options: SqliteConnectOptions,
}

impl SqlitePropertyStore {
    /// Creates a store for a `sqlite:` URL (e.g. `sqlite://./estate.db`). Does not connect.
    pub fn new(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| StorageError::InvalidUrl(format!("{}: {}", database_url, e)))?;
        Ok(Self { options })
    }

    /// Creates a store for a database file path.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            options: SqliteConnectOptions::new().filename(path),
        }
    }

    async fn connect(&self) -> Result<SqliteConnection, StorageError> {
        Ok(self.options.connect().await?)
    }

    /// Creates the database file and tables if they do not exist.
    #[instrument(skip(self))]
    pub async fn migrate(&self) -> Result<(), StorageError> {
        info!("Creating property tables if not exist");
        let mut conn = self.options.clone().create_if_missing(true).connect().await?;
        sqlx::query(SCHEMA).execute(&mut conn).await?;
        conn.close().await?;
        info!("Property tables ready");
        Ok(())
    }

    /// Inserts an area and returns its id.
    pub async fn add_area(&self, name: &str) -> Result<i64, StorageError> {
        let mut conn = self.connect().await?;
        let id = sqlx::query("INSERT INTO areas (original_name) VALUES (?)")
            .bind(name)
            .execute(&mut conn)
            .await?
            .last_insert_rowid();
        conn.close().await?;
        Ok(id)
    }

    /// Inserts a building and returns its id.
    pub async fn add_building(&self, name: &str, area_id: Option<i64>) -> Result<i64, StorageError> {
        let mut conn = self.connect().await?;
        let id = sqlx::query("INSERT INTO buildings (name, area_id) VALUES (?, ?)")
            .bind(name)
            .bind(area_id)
            .execute(&mut conn)
            .await?
            .last_insert_rowid();
        conn.close().await?;
        Ok(id)
    }

    /// Inserts a unit and returns its id.
    pub async fn add_unit(&self, unit: &NewUnit) -> Result<i64, StorageError> {
        let mut conn = self.connect().await?;
        let id = sqlx::query(
            r#"
            INSERT INTO units (
                price, type_unit, purpose, completion, handover_date, furnishing, studio,
                sqft, baths, beds, view, vacant, agent_name, agent_whatsapp, post_status,
                building_id, area_id
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(unit.price)
        .bind(&unit.property_type)
        .bind(&unit.purpose)
        .bind(&unit.completion)
        .bind(&unit.handover_date)
        .bind(&unit.furnishing)
        .bind(unit.studio)
        .bind(unit.sqft)
        .bind(unit.baths)
        .bind(unit.beds)
        .bind(&unit.view)
        .bind(&unit.vacant)
        .bind(&unit.agent_name)
        .bind(&unit.agent_whatsapp)
        .bind(&unit.post_status)
        .bind(unit.building_id)
        .bind(unit.area_id)
        .execute(&mut conn)
        .await?
        .last_insert_rowid();
        conn.close().await?;
        Ok(id)
    }

    /// Runs a built query; errors are returned, not swallowed.
    pub async fn try_search(&self, query: &PropertyQuery) -> Result<Vec<PropertyRecord>, StorageError> {
        let mut conn = self.connect().await?;

        let mut q = sqlx::query_as::<_, PropertyRecord>(query.sql());
        for value in query.binds() {
            q = match value {
                BindValue::Text(s) => q.bind(s.clone()),
                BindValue::Integer(i) => q.bind(*i),
                BindValue::Real(f) => q.bind(*f),
            };
        }
        let rows = q.fetch_all(&mut conn).await?;
        conn.close().await?;
        Ok(rows)
    }

    async fn try_names(&self, sql: &str) -> Result<Vec<String>, StorageError> {
        let mut conn = self.connect().await?;
        let rows: Vec<(String,)> = sqlx::query_as(sql).fetch_all(&mut conn).await?;
        conn.close().await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}

#[async_trait]
impl PropertyStore for SqlitePropertyStore {
    #[instrument(skip(self, criteria))]
    async fn search(&self, criteria: &FilterCriteria) -> Vec<PropertyRecord> {
        let Some(query) = PropertyQuery::from_criteria(criteria) else {
            return Vec::new();
        };

        match self.try_search(&query).await {
            Ok(rows) => {
                info!(count = rows.len(), "Property search finished");
                rows
            }
            Err(e) => {
                error!(error = %e, "Property search failed");
                Vec::new()
            }
        }
    }

    async fn available_areas(&self) -> Vec<String> {
        self.try_names("SELECT original_name FROM areas ORDER BY original_name")
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, "Failed to list areas");
                Vec::new()
            })
    }

    async fn available_buildings(&self) -> Vec<String> {
        self.try_names("SELECT name FROM buildings ORDER BY name")
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, "Failed to list buildings");
                Vec::new()
            })
    }
}
