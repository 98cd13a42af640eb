use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use tracing::info;

use crate::error::AppError;

/// Open (creating if missing) the SQLite database backing the key-value
/// store and apply the schema.
pub async fn init_db(db_path: &Path) -> Result<SqlitePool, AppError> {
    let db_url = format!("sqlite://{}", db_path.to_string_lossy());

    info!("Initializing key-value store at: {}", db_url);

    let options = SqliteConnectOptions::from_str(&db_url)
        .map_err(AppError::Database)?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at DATETIME NOT NULL
        );
        "#,
    )
    .execute(&pool)
    .await?;

    info!("Key-value store initialized.");

    Ok(pool)
}

/// Store a JSON value under a key, replacing any previous value.
pub async fn set(pool: &SqlitePool, key: &str, value: &Value) -> Result<(), AppError> {
    let serialized = serde_json::to_string(value)?;
    let updated_at = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
        INSERT INTO kv_store (key, value, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(serialized)
    .bind(updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Fetch the value stored under a key. `None` when the key is absent.
pub async fn get(pool: &SqlitePool, key: &str) -> Result<Option<Value>, AppError> {
    let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => {
            let raw: String = row.get("value");
            Ok(Some(serde_json::from_str(&raw)?))
        }
        None => Ok(None),
    }
}

/// Fetch multiple keys at once. Absent keys are simply missing from the map.
pub async fn mget(pool: &SqlitePool, keys: &[String]) -> Result<HashMap<String, Value>, AppError> {
    let mut results = HashMap::with_capacity(keys.len());
    for key in keys {
        if let Some(value) = get(pool, key).await? {
            results.insert(key.clone(), value);
        }
    }
    Ok(results)
}

/// Fetch every key starting with a prefix.
pub async fn scan_by_prefix(
    pool: &SqlitePool,
    prefix: &str,
) -> Result<HashMap<String, Value>, AppError> {
    // LIKE wildcards in the prefix itself must not widen the scan
    let escaped = prefix.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
    let pattern = format!("{}%", escaped);

    let rows = sqlx::query(r#"SELECT key, value FROM kv_store WHERE key LIKE ? ESCAPE '\' ORDER BY key"#)
        .bind(pattern)
        .fetch_all(pool)
        .await?;

    let mut results = HashMap::with_capacity(rows.len());
    for row in rows {
        let key: String = row.get("key");
        let raw: String = row.get("value");
        results.insert(key, serde_json::from_str(&raw)?);
    }
    Ok(results)
}

/// Delete a key. Deleting an absent key is not an error.
pub async fn remove(pool: &SqlitePool, key: &str) -> Result<(), AppError> {
    sqlx::query("DELETE FROM kv_store WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await?;
    Ok(())
}
