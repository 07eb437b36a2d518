//! Session history: newest-first log of saved batches, capped at 50, kept in a
//! single durable slot as one JSON array.
//!
//! Every mutation is a read-modify-write of the whole blob under the store
//! lock, and is persisted before the call returns. A missing or unparseable
//! blob reads as empty history.

pub mod gate;
pub mod slot;

pub use gate::{ClearHistoryGate, ClearHistoryState, ConfirmationStep};
pub use slot::{FileSlot, MemorySlot, SessionSlot};

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::defaults::Defaults;
use crate::error::{Result, WalletError};
use crate::types::{reserve_session_ids_through, Batch, Session};

pub const MAX_SESSIONS: usize = Defaults::MAX_HISTORY_SESSIONS;

/// Parse the slot contents. Anything that is not a valid session array is
/// `StorageCorrupt`.
pub fn parse_sessions(blob: &str) -> Result<Vec<Session>> {
    serde_json::from_str(blob).map_err(|e| WalletError::StorageCorrupt(e.to_string()))
}

pub struct SessionHistoryStore<S: SessionSlot> {
    slot: S,
    lock: Mutex<()>,
}

impl SessionHistoryStore<FileSlot> {
    /// Store over `<dir>/wallet-sessions.json`.
    pub fn open(dir: impl AsRef<std::path::Path>) -> Self {
        Self::new(FileSlot::new(dir, Defaults::HISTORY_SLOT))
    }
}

impl<S: SessionSlot> SessionHistoryStore<S> {
    pub fn new(slot: S) -> Self {
        Self { slot, lock: Mutex::new(()) }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Newest first. Never fails: unreadable or corrupt state is empty history.
    pub async fn list(&self) -> Vec<Session> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    pub async fn get(&self, id: &str) -> Option<Session> {
        self.list().await.into_iter().find(|s| s.id() == id)
    }

    /// Prepend `session`. If its id is already taken in the stored history it
    /// gets a fresh one first.
    pub async fn insert(&self, session: Session) -> Result<()> {
        let _guard = self.lock.lock().await;
        let sessions = self.load().await;
        self.insert_loaded(sessions, session).await?;
        Ok(())
    }

    /// Wrap `batch` in a new session, insert it and hand the session back.
    pub async fn save_batch(&self, batch: Batch) -> Result<Session> {
        let _guard = self.lock.lock().await;
        let sessions = self.load().await;
        reserve_stored_ids(&sessions);
        self.insert_loaded(sessions, Session::new(batch)).await
    }

    async fn insert_loaded(&self, mut sessions: Vec<Session>, mut session: Session) -> Result<Session> {
        if sessions.iter().any(|s| s.id() == session.id()) {
            reserve_stored_ids(&sessions);
            session.reissue_id();
        }
        let id = session.id().to_string();
        sessions.insert(0, session.clone());
        let evicted = sessions.len().saturating_sub(MAX_SESSIONS);
        sessions.truncate(MAX_SESSIONS);
        self.persist(&sessions).await?;
        info!(%id, total = sessions.len(), evicted, "saved session to history");
        Ok(session)
    }

    /// Remove the session with `id`; absent ids are a no-op.
    pub async fn delete_one(&self, id: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut sessions = self.load().await;
        let before = sessions.len();
        sessions.retain(|s| s.id() != id);
        self.persist(&sessions).await?;
        info!(%id, removed = before - sessions.len(), "deleted session");
        Ok(())
    }

    pub async fn delete_all(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.slot.remove().await?;
        info!("cleared session history");
        Ok(())
    }

    async fn load(&self) -> Vec<Session> {
        let blob = match self.slot.read().await {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read history slot; treating as empty");
                return Vec::new();
            }
        };
        match parse_sessions(&blob) {
            Ok(mut sessions) => {
                sessions.truncate(MAX_SESSIONS);
                sessions
            }
            Err(e) => {
                warn!(error = %e, "ignoring unparseable history");
                Vec::new()
            }
        }
    }

    async fn persist(&self, sessions: &[Session]) -> Result<()> {
        let blob = serde_json::to_string(sessions)?;
        self.slot.write(&blob).await?;
        Ok(())
    }
}

/// Ids are creation milliseconds; new ones must land above every stored one.
fn reserve_stored_ids(sessions: &[Session]) {
    if let Some(max) = sessions.iter().filter_map(|s| s.id().parse::<i64>().ok()).max() {
        reserve_session_ids_through(max);
    }
}
