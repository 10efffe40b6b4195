// Database connectivity tests. Queries against a live MySQL instance are
// ignored by default; run them with
// `cargo test --test database_test -- --ignored`.

use orangehrm_e2e::{fixtures, logging, Config, DatabaseConnection, Result};
use sqlx::Row;

#[tokio::test]
#[ignore = "Requires a reachable MySQL instance"]
async fn connection_is_established() -> Result<()> {
    let log = logging::get_logger("database")?;
    fixtures::with_database(|db| async move {
        assert!(db.is_connected(), "database fixture should be connected");
        (db, ())
    })
    .await;
    log.info("Database connection test passed");
    Ok(())
}

#[tokio::test]
async fn connection_parameters_follow_configuration() -> Result<()> {
    let log = logging::get_logger("database")?;
    let config = Config::global();
    let db = DatabaseConnection::new();
    assert_eq!(db.host(), config.database.host);
    assert_eq!(db.user(), config.database.user);
    assert_eq!(db.database(), config.database.database);
    log.info("Database parameters test passed");
    Ok(())
}

#[tokio::test]
#[ignore = "Requires a reachable MySQL instance"]
async fn simple_select_returns_one() -> Result<()> {
    let log = logging::get_logger("database")?;
    fixtures::with_database(|mut db| async move {
        let row = db
            .fetch_one("SELECT 1 AS test")
            .await
            .expect("fetch_one failed")
            .expect("query returned no rows");
        let value: i64 = row.try_get(0).expect("first field not an integer");
        assert_eq!(value, 1);
        (db, ())
    })
    .await;
    log.info("Simple query test passed");
    Ok(())
}

#[tokio::test]
#[ignore = "Requires a reachable MySQL instance"]
async fn union_returns_two_rows() -> Result<()> {
    let log = logging::get_logger("database")?;
    fixtures::with_database(|mut db| async move {
        let rows = db
            .fetch_query("SELECT 1 UNION SELECT 2")
            .await
            .expect("fetch_query failed");
        assert_eq!(rows.len(), 2);
        (db, ())
    })
    .await;
    log.info("Fetch multiple rows test passed");
    Ok(())
}

#[tokio::test]
async fn unreachable_server_yields_failed_outcome() {
    // Nothing listens on the discard port; the failure must be recovered
    // locally, not raised.
    let config = orangehrm_e2e::config::DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port: 9,
        user: "root".to_string(),
        password: String::new(),
        database: "orangehrm".to_string(),
    };
    let mut db = DatabaseConnection::from_config(&config);
    let outcome = db.connect().await;
    assert!(outcome.is_failed());
    assert!(!db.is_connected());
    assert!(outcome.failure().is_some());
}

#[tokio::test]
async fn disconnect_is_safe_without_a_connection() {
    let mut db = DatabaseConnection::new();
    db.disconnect().await;
    assert!(!db.is_connected());
}
