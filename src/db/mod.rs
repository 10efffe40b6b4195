use crate::config::{Config, DatabaseConfig};
use crate::core::Outcome;
use sqlx::mysql::{MySqlConnectOptions, MySqlRow};
use sqlx::{Connection, MySqlConnection};
use std::time::Duration;
use tokio::time::timeout;

/// Connection attempts give up after this long.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Single-connection MySQL wrapper: `disconnected → connected → disconnected`.
///
/// One instance per test, explicit [`connect`](Self::connect) /
/// [`disconnect`](Self::disconnect), no pooling. Connectivity and query
/// failures are recovered locally and reported as [`Outcome::Failed`];
/// callers must check before relying on a result.
pub struct DatabaseConnection {
    host: String,
    port: u16,
    user: String,
    password: String,
    database: String,
    conn: Option<MySqlConnection>,
}

impl DatabaseConnection {
    /// Build from the process-wide configuration.
    pub fn new() -> Self {
        Self::from_config(&Config::global().database)
    }

    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            user: config.user.clone(),
            password: config.password.clone(),
            database: config.database.clone(),
            conn: None,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Establish the connection.
    ///
    /// Failure (unreachable host, bad credentials, 5 s deadline) is logged
    /// and returned as `Failed`, never raised.
    pub async fn connect(&mut self) -> Outcome<()> {
        tracing::info!(
            "Attempting MySQL connection to {}:{}/{}",
            self.host,
            self.port,
            self.database
        );
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database);

        match timeout(CONNECT_TIMEOUT, MySqlConnection::connect_with(&options)).await {
            Ok(Ok(conn)) => {
                self.conn = Some(conn);
                tracing::info!(
                    "Connected to MySQL: {}:{}/{}",
                    self.host,
                    self.port,
                    self.database
                );
                Outcome::Ok(())
            }
            Ok(Err(e)) => {
                tracing::error!("Error connecting to MySQL: {e}");
                Outcome::failed(e.to_string())
            }
            Err(_) => {
                tracing::error!(
                    "Error connecting to MySQL: no response within {CONNECT_TIMEOUT:?}"
                );
                Outcome::failed(format!("connection timed out after {CONNECT_TIMEOUT:?}"))
            }
        }
    }

    /// Close the connection if one exists; safe to call when disconnected.
    pub async fn disconnect(&mut self) {
        if let Some(conn) = self.conn.take() {
            if let Err(e) = conn.close().await {
                tracing::warn!("Error closing MySQL connection: {e}");
            }
            tracing::info!("Disconnected from MySQL");
        }
    }

    /// Run a mutating statement in its own transaction.
    ///
    /// Commits on success and returns the affected row count; rolls back and
    /// logs on failure.
    pub async fn execute_query(&mut self, query: &str) -> Outcome<u64> {
        let Some(conn) = self.conn.as_mut() else {
            return Outcome::failed("not connected");
        };

        let mut tx = match conn.begin().await {
            Ok(tx) => tx,
            Err(e) => {
                tracing::error!("Error starting transaction: {e}");
                return Outcome::failed(e.to_string());
            }
        };

        match sqlx::query(query).execute(&mut *tx).await {
            Ok(result) => match tx.commit().await {
                Ok(()) => {
                    tracing::info!("Query executed successfully: {}", preview(query));
                    Outcome::Ok(result.rows_affected())
                }
                Err(e) => {
                    tracing::error!("Error committing query: {e}");
                    Outcome::failed(e.to_string())
                }
            },
            Err(e) => {
                tracing::error!("Error executing query: {e}");
                if let Err(e) = tx.rollback().await {
                    tracing::warn!("Rollback failed: {e}");
                }
                Outcome::failed(e.to_string())
            }
        }
    }

    /// Run a read statement and return all rows.
    pub async fn fetch_query(&mut self, query: &str) -> Outcome<Vec<MySqlRow>> {
        let Some(conn) = self.conn.as_mut() else {
            return Outcome::failed("not connected");
        };

        match sqlx::query(query).fetch_all(conn).await {
            Ok(rows) => {
                tracing::info!("Query fetched successfully: {}", preview(query));
                Outcome::Ok(rows)
            }
            Err(e) => {
                tracing::error!("Error fetching query: {e}");
                Outcome::failed(e.to_string())
            }
        }
    }

    /// Run a read statement and return the first row, `None` when the result
    /// set is empty.
    pub async fn fetch_one(&mut self, query: &str) -> Outcome<Option<MySqlRow>> {
        let Some(conn) = self.conn.as_mut() else {
            return Outcome::failed("not connected");
        };

        match sqlx::query(query).fetch_optional(conn).await {
            Ok(row) => {
                tracing::info!("Query fetched one record: {}", preview(query));
                Outcome::Ok(row)
            }
            Err(e) => {
                tracing::error!("Error fetching query: {e}");
                Outcome::failed(e.to_string())
            }
        }
    }
}

impl Default for DatabaseConnection {
    fn default() -> Self {
        Self::new()
    }
}

// Queries are logged truncated, matching the log volume the suite expects.
fn preview(query: &str) -> String {
    let mut out: String = query.chars().take(50).collect();
    if query.chars().count() > 50 {
        out.push_str("...");
    }
    out
}
