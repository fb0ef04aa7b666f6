use rusqlite::{Connection, params};
use tracing::warn;

use crate::time::now_unix;

use super::StorageError;

/// Key of the favorites blob, kept compatible with the value shape the web
/// client stored in localStorage: a JSON array of string-encoded story IDs.
pub const FAVORITES_KEY: &str = "likedStories";

fn encode_ids(ids: &[u64]) -> String {
    let strings: Vec<String> = ids.iter().map(u64::to_string).collect();
    serde_json::to_string(&strings).unwrap_or_else(|_| "[]".to_string())
}

fn decode_ids(json: &str) -> Vec<u64> {
    let Ok(strings) = serde_json::from_str::<Vec<String>>(json) else {
        warn!("malformed favorites blob, treating as empty");
        return Vec::new();
    };
    strings.iter().filter_map(|s| s.parse().ok()).collect()
}

pub fn save_favorites(conn: &Connection, ids: &[u64]) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at",
        params![FAVORITES_KEY, encode_ids(ids), now_unix() as i64],
    )?;
    Ok(())
}

pub fn load_favorites(conn: &Connection) -> Result<Vec<u64>, StorageError> {
    let result = conn.query_row(
        "SELECT value FROM kv WHERE key = ?1",
        params![FAVORITES_KEY],
        |row| row.get::<_, String>(0),
    );

    match result {
        Ok(json) => Ok(decode_ids(&json)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}
