//! The user's favorites set: liked story IDs, most-recently-liked first.
//!
//! The set is loaded once at startup, held in memory for the session, and
//! every mutation rewrites the persisted blob through the storage worker.
//! Views observe changes through a `watch` channel instead of having the
//! list threaded through them.

use tokio::sync::watch;
use tracing::warn;

use crate::storage::Storage;

pub struct FavoritesStore {
    ids: Vec<u64>,
    storage: Option<Storage>,
    notify: watch::Sender<Vec<u64>>,
}

impl FavoritesStore {
    /// Load the persisted set. Absent or malformed data yields an empty
    /// set; a storage read failure is logged and does the same. Never fails
    /// the caller.
    pub async fn load(storage: Option<Storage>) -> Self {
        let ids = match &storage {
            Some(s) => match s.load_favorites().await {
                Ok(ids) => ids,
                Err(e) => {
                    warn!(error = %e, "failed to load favorites, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        let (notify, _) = watch::channel(ids.clone());
        Self {
            ids,
            storage,
            notify,
        }
    }

    /// A store with no persistence, for sessions without a config dir.
    pub fn ephemeral() -> Self {
        let (notify, _) = watch::channel(Vec::new());
        Self {
            ids: Vec::new(),
            storage: None,
            notify,
        }
    }

    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Observe the set. Receivers see the current value immediately and
    /// every change after.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn subscribe(&self) -> watch::Receiver<Vec<u64>> {
        self.notify.subscribe()
    }

    /// Prepend `id` if absent. Adding an id that is already present is a
    /// no-op: the set never holds duplicates. Returns true if inserted.
    pub fn add(&mut self, id: u64) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.insert(0, id);
        self.publish();
        true
    }

    /// Remove `id`. Removing an absent id is a no-op. Returns true if the
    /// set changed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&i| i != id);
        if self.ids.len() == before {
            return false;
        }
        self.publish();
        true
    }

    /// Flip the liked state of `id`. Returns true if it is now a favorite.
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }

    fn publish(&self) {
        self.notify.send_replace(self.ids.clone());
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.queue_save_favorites(&self.ids) {
                warn!(error = %e, "failed to persist favorites");
            }
        }
    }
}
