//! MySQL table catalog
//!
//! One pool, capped at a single connection, is opened for a batch of queries
//! and closed when the batch is done.

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Row;

use crate::config::DatabaseSettings;
use crate::error::Result;

/// Statement used to list tables in the configured schema
pub const LIST_TABLES_SQL: &str = "SHOW TABLES";

/// Anything that can list table names
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Table names in the order the source reports them
    async fn list_tables(&self) -> Result<Vec<String>>;
}

/// Table catalog backed by a live MySQL connection
pub struct MySqlCatalog {
    pool: MySqlPool,
}

impl MySqlCatalog {
    /// Connect using the given settings
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable, the credentials are
    /// rejected, or the connect timeout elapses.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self> {
        tracing::debug!(
            host = %settings.host,
            port = settings.port,
            database = %settings.database,
            "Connecting to MySQL"
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(settings.connect_timeout())
            .connect_with(settings.connect_options())
            .await?;

        Ok(Self { pool })
    }

    /// Run arbitrary SQL with positional string parameters and return every row
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn fetch_all(&self, sql: &str, params: &[String]) -> Result<Vec<MySqlRow>> {
        let mut query = sqlx::query(sql);
        for param in params {
            query = query.bind(param.as_str());
        }

        let rows = query.fetch_all(&self.pool).await?;
        tracing::debug!(sql, rows = rows.len(), "Query complete");
        Ok(rows)
    }

    /// Close the connection
    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TableSource for MySqlCatalog {
    async fn list_tables(&self) -> Result<Vec<String>> {
        let rows = self.fetch_all(LIST_TABLES_SQL, &[]).await?;

        // `SHOW TABLES` may report names with a binary collation
        rows.iter()
            .map(|row| -> Result<String> {
                let raw: Vec<u8> = row.try_get(0)?;
                Ok(String::from_utf8_lossy(&raw).into_owned())
            })
            .collect()
    }
}

/// Fixed list of tables, for offline runs and tests
#[derive(Debug, Clone, Default)]
pub struct StaticTables(pub Vec<String>);

#[async_trait]
impl TableSource for StaticTables {
    async fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_tables() {
        let source = StaticTables(vec!["users".to_string(), "services".to_string()]);
        let tables = source.list_tables().await.unwrap();
        assert_eq!(tables, vec!["users", "services"]);
    }

    #[tokio::test]
    async fn test_unreachable_server_fails() {
        let settings = DatabaseSettings {
            host: "127.0.0.1".to_string(),
            port: 1,
            connect_timeout_secs: 1,
            ..DatabaseSettings::default()
        };
        let result = MySqlCatalog::connect(&settings).await;
        assert!(matches!(result, Err(crate::AidkitError::Database(_))));
    }
}
