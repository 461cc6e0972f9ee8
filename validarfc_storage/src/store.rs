//! Relational storage for validation records.
//!
//! Backed by a sea-orm connection pool. Works against `PostgreSQL` in
//! production and `SQLite` in tests.

use async_trait::async_trait;
use sea_orm::sea_query::{ColumnDef, Table};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityName, EntityTrait,
    PaginatorTrait, QueryOrder, QuerySelect,
};
use std::time::Duration;
use tracing::{debug, info};
use validarfc_core::{HistoryReader, ValidationRecord, ValidationRecorder, ValidationRepo};
use validarfc_entities::validations;

use crate::convert;

/// SQL drivers bind LIMIT/OFFSET as signed 64-bit integers.
#[allow(clippy::cast_sign_loss)]
const fn clamp_to_i64(n: u64) -> u64 {
    if n > i64::MAX as u64 { i64::MAX as u64 } else { n }
}

/// Pool settings for [`ValidationStore::connect`].
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub max_connections: u32,
    /// Applies to both opening a connection and waiting for one from the pool
    pub connect_timeout: Duration,
    /// Defer the first connection until a query needs it, so a store can be
    /// built while the database is down.
    pub lazy: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            max_connections: 10,
            connect_timeout: Duration::from_secs(5),
            lazy: true,
        }
    }
}

/// Append-only store of validation attempts.
#[derive(Debug, Clone)]
pub struct ValidationStore {
    db: DatabaseConnection,
}

impl ValidationStore {
    pub async fn connect(database_url: &str, options: &StoreOptions) -> anyhow::Result<Self> {
        let mut opt = ConnectOptions::new(database_url.to_owned());
        opt.max_connections(options.max_connections)
            .connect_timeout(options.connect_timeout)
            .acquire_timeout(options.connect_timeout)
            .connect_lazy(options.lazy)
            .sqlx_logging(false);

        info!("Connecting to validation database (lazy={})", options.lazy);
        let db = Database::connect(opt).await?;
        Ok(Self { db })
    }

    #[must_use]
    pub const fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    #[must_use]
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Create the `validations` table if it is missing. Existing tables are
    /// left untouched.
    ///
    /// The table carries only `rfc`, `is_valid` and `created_at`, with no key
    /// column, so a pre-existing table of that shape is used as is.
    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        let backend = self.db.get_database_backend();
        let stmt = Table::create()
            .table(validations::Entity.table_ref())
            .if_not_exists()
            .col(ColumnDef::new(validations::Column::Rfc).string().not_null())
            .col(
                ColumnDef::new(validations::Column::IsValid)
                    .boolean()
                    .not_null(),
            )
            .col(
                ColumnDef::new(validations::Column::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .to_owned();

        self.db
            .execute_unprepared(&backend.build(&stmt).to_string())
            .await?;

        info!("Validation table ready");
        Ok(())
    }
}

#[async_trait]
impl ValidationRecorder for ValidationStore {
    async fn record(&self, rfc: &str, is_valid: bool) -> anyhow::Result<ValidationRecord> {
        let record = ValidationRecord::now(rfc, is_valid);
        validations::Entity::insert(convert::active_model_from_record(&record))
            .exec_without_returning(&self.db)
            .await?;

        debug!("Recorded validation for {}", record.rfc);
        Ok(record)
    }

    /// One multi-row INSERT, so an unreachable database costs a single timeout.
    async fn record_batch(
        &self,
        entries: &[(String, bool)],
    ) -> anyhow::Result<Vec<ValidationRecord>> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<ValidationRecord> = entries
            .iter()
            .map(|(rfc, is_valid)| ValidationRecord::now(rfc.as_str(), *is_valid))
            .collect();
        validations::Entity::insert_many(records.iter().map(convert::active_model_from_record))
            .exec_without_returning(&self.db)
            .await?;

        debug!("Recorded batch of {} validations", records.len());
        Ok(records)
    }
}

#[async_trait]
impl HistoryReader for ValidationStore {
    async fn count(&self) -> anyhow::Result<u64> {
        Ok(validations::Entity::find().count(&self.db).await?)
    }

    async fn list_recent(&self, offset: u64, limit: u64) -> anyhow::Result<Vec<ValidationRecord>> {
        let models = validations::Entity::find()
            .order_by_desc(validations::Column::CreatedAt)
            .offset(clamp_to_i64(offset))
            .limit(clamp_to_i64(limit))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(convert::record_from_model).collect())
    }
}

#[async_trait]
impl ValidationRepo for ValidationStore {
    async fn ping(&self) -> anyhow::Result<()> {
        self.db.ping().await?;
        Ok(())
    }
}
