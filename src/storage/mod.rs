//! Local persistence for the favorites set.
//!
//! A single SQLite database holds one key-value entry: `likedStories`, a
//! JSON array of string-encoded story IDs. The connection lives on a
//! dedicated worker thread; the async side talks to it over an mpsc command
//! channel with oneshot replies.

mod db;
mod migrations;
mod queries;

use std::io;
use std::path::PathBuf;

use rusqlite::Connection;
use tokio::sync::{mpsc, oneshot};

pub enum StorageLocation {
    Path(PathBuf),
    #[cfg(test)]
    InMemory,
}

#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    Channel(String),
    Migration { version: i64, error: String },
    NoDbPathParent,
    IO(io::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Sqlite(e) => write!(f, "Database error: {}", e),
            StorageError::Channel(msg) => write!(f, "Channel error: {}", msg),
            StorageError::Migration { version, error } => {
                write!(f, "Migration {} failed: {}", version, error)
            }
            StorageError::NoDbPathParent => write!(f, "db path did not have a parent dir"),
            StorageError::IO(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Sqlite(e)
    }
}

impl<T> From<mpsc::error::SendError<T>> for StorageError {
    fn from(e: mpsc::error::SendError<T>) -> Self {
        StorageError::Channel(e.to_string())
    }
}

impl From<oneshot::error::RecvError> for StorageError {
    fn from(e: oneshot::error::RecvError) -> Self {
        StorageError::Channel(e.to_string())
    }
}

pub(crate) enum StorageCommand {
    LoadFavorites {
        reply: oneshot::Sender<Result<Vec<u64>, StorageError>>,
    },
    SaveFavorites {
        ids: Vec<u64>,
        reply: oneshot::Sender<Result<(), StorageError>>,
    },
}

#[derive(Clone)]
pub struct Storage {
    cmd_tx: mpsc::Sender<StorageCommand>,
}

impl Storage {
    pub fn open(location: StorageLocation) -> Result<Self, StorageError> {
        let (cmd_tx, cmd_rx) = mpsc::channel(64);

        let conn = match location {
            StorageLocation::Path(path) => {
                let parent = path.parent().ok_or(StorageError::NoDbPathParent)?;
                if !parent.exists() {
                    std::fs::create_dir_all(parent).map_err(StorageError::IO)?;
                }
                Connection::open(&path)?
            }
            #[cfg(test)]
            StorageLocation::InMemory => Connection::open_in_memory()?,
        };

        migrations::run_migrations(&conn)?;
        std::thread::spawn(move || {
            db::run_worker(conn, cmd_rx);
        });

        Ok(Self { cmd_tx })
    }

    /// Read the persisted favorites blob. Missing or malformed data yields
    /// an empty set rather than an error for the caller to handle.
    pub async fn load_favorites(&self) -> Result<Vec<u64>, StorageError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(StorageCommand::LoadFavorites { reply: tx })
            .await?;
        rx.await?
    }

    /// Queue a favorites write without waiting for completion. All
    /// mutations come from the single UI task, so channel order preserves
    /// write order and the stored blob always reflects the last write.
    pub fn queue_save_favorites(&self, ids: &[u64]) -> Result<(), StorageError> {
        let (reply, _) = oneshot::channel();
        self.cmd_tx
            .try_send(StorageCommand::SaveFavorites {
                ids: ids.to_vec(),
                reply,
            })
            .map_err(|e| StorageError::Channel(e.to_string()))
    }

    /// Rewrite the entire favorites blob. The set stays small, so a full
    /// rewrite per mutation is fine.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn save_favorites(&self, ids: &[u64]) -> Result<(), StorageError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(StorageCommand::SaveFavorites {
                ids: ids.to_vec(),
                reply: tx,
            })
            .await?;
        rx.await?
    }
}
