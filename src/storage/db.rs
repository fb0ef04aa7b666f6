use rusqlite::Connection;
use tokio::sync::mpsc;

use super::queries;
use super::StorageCommand;

/// Command loop for the connection-owning worker thread. Runs until the
/// command channel closes.
pub fn run_worker(conn: Connection, mut cmd_rx: mpsc::Receiver<StorageCommand>) {
    while let Some(cmd) = cmd_rx.blocking_recv() {
        match cmd {
            StorageCommand::LoadFavorites { reply } => {
                let result = queries::load_favorites(&conn);
                let _ = reply.send(result);
            }
            StorageCommand::SaveFavorites { ids, reply } => {
                let result = queries::save_favorites(&conn, &ids);
                let _ = reply.send(result);
            }
        }
    }
}
