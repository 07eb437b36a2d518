use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

use crate::crypto::KeyPair;
use crate::error::WalletError;
use crate::util::now_millis;

/// One generation run: its key pairs (in request order) plus metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    key_pairs: Vec<KeyPair>,
    include_public_key: bool,
    generation_time_ms: f64,
}

impl Batch {
    pub(crate) fn new(key_pairs: Vec<KeyPair>, include_public_key: bool, generation_time_ms: f64) -> Self {
        Self {
            key_pairs,
            include_public_key,
            generation_time_ms: generation_time_ms.max(0.0),
        }
    }

    pub fn key_pairs(&self) -> &[KeyPair] {
        &self.key_pairs
    }

    pub fn len(&self) -> usize {
        self.key_pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_pairs.is_empty()
    }

    pub fn include_public_key(&self) -> bool {
        self.include_public_key
    }

    pub fn generation_time_ms(&self) -> f64 {
        self.generation_time_ms
    }
}

static LAST_SESSION_ID: AtomicI64 = AtomicI64::new(0);

/// Millisecond timestamp, bumped past the last id handed out so two sessions
/// created in the same millisecond still get distinct ids.
fn next_session_id(now_ms: i64) -> i64 {
    let prev = LAST_SESSION_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now_ms.max(last + 1))
        })
        .unwrap_or_else(|last| last);
    now_ms.max(prev + 1)
}

/// Make sure ids handed out from now on are above `floor`, e.g. the largest id
/// already present in stored history from an earlier run.
pub(crate) fn reserve_session_ids_through(floor: i64) {
    LAST_SESSION_ID.fetch_max(floor, Ordering::SeqCst);
}

/// A saved batch in the history log. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredSession", into = "StoredSession")]
pub struct Session {
    id: String,
    timestamp: i64,
    batch: Batch,
}

impl Session {
    pub fn new(batch: Batch) -> Self {
        let timestamp = now_millis();
        Self {
            id: next_session_id(timestamp).to_string(),
            timestamp,
            batch,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fresh id for a session that has not been stored yet.
    pub(crate) fn reissue_id(&mut self) {
        self.id = next_session_id(now_millis()).to_string();
    }

    /// Creation time, milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn batch(&self) -> &Batch {
        &self.batch
    }

    pub fn count(&self) -> usize {
        self.batch.len()
    }
}

/* ---------- persisted shapes ---------- */

/// One wallet as written to the history slot.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredWallet {
    pub private_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

/// Field order here is the on-disk order.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub id: String,
    pub timestamp: i64,
    pub count: usize,
    pub include_public_key: bool,
    pub generation_time_ms: f64,
    pub wallets: Vec<StoredWallet>,
}

impl From<Session> for StoredSession {
    fn from(s: Session) -> Self {
        let include = s.batch.include_public_key;
        let wallets = s
            .batch
            .key_pairs
            .iter()
            .map(|kp| StoredWallet {
                private_key: kp.secret_base58(),
                public_key: include.then(|| kp.public_base58()),
            })
            .collect();
        StoredSession {
            id: s.id.clone(),
            timestamp: s.timestamp,
            count: s.batch.len(),
            include_public_key: include,
            generation_time_ms: s.batch.generation_time_ms,
            wallets,
        }
    }
}

impl TryFrom<StoredSession> for Session {
    type Error = WalletError;

    fn try_from(s: StoredSession) -> Result<Self, Self::Error> {
        if s.count != s.wallets.len() {
            return Err(WalletError::StorageCorrupt(format!(
                "session {} claims {} wallets but holds {}",
                s.id,
                s.count,
                s.wallets.len()
            )));
        }
        let mut key_pairs = Vec::with_capacity(s.wallets.len());
        for (i, w) in s.wallets.iter().enumerate() {
            let kp = KeyPair::from_base58_secret(&w.private_key).map_err(|e| {
                WalletError::StorageCorrupt(format!("session {} wallet #{}: {}", s.id, i, e))
            })?;
            if let Some(pk) = &w.public_key {
                if *pk != kp.public_base58() {
                    return Err(WalletError::StorageCorrupt(format!(
                        "session {} wallet #{}: public key does not match secret",
                        s.id, i
                    )));
                }
            }
            key_pairs.push(kp);
        }
        Ok(Session {
            id: s.id,
            timestamp: s.timestamp,
            batch: Batch::new(key_pairs, s.include_public_key, s.generation_time_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(n: usize, include: bool) -> Batch {
        let kps = (0..n).map(|_| KeyPair::generate().unwrap()).collect();
        Batch::new(kps, include, 1.5)
    }

    #[test]
    fn session_ids_are_unique_within_one_millisecond() {
        let a = next_session_id(1_000);
        let b = next_session_id(1_000);
        let c = next_session_id(1_000);
        assert!(a < b && b < c);
    }

    #[test]
    fn reserved_floor_is_skipped() {
        let floor = now_millis() + 10_000_000;
        reserve_session_ids_through(floor);
        let s = Session::new(batch(1, false));
        assert!(s.id().parse::<i64>().unwrap() > floor);
    }

    #[test]
    fn sessions_created_back_to_back_get_distinct_ids() {
        let ids: std::collections::HashSet<String> =
            (0..100).map(|_| Session::new(batch(1, false)).id().to_string()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn stored_shape_uses_camel_case_and_omits_absent_public_keys() {
        let s = Session::new(batch(2, false));
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["count"], 2);
        assert_eq!(v["includePublicKey"], false);
        assert!(v["generationTimeMs"].is_number());
        let w = &v["wallets"][0];
        assert!(w["privateKey"].is_string());
        assert!(w.get("publicKey").is_none());
    }

    #[test]
    fn session_survives_json() {
        let s = Session::new(batch(3, true));
        let text = serde_json::to_string(&s).unwrap();
        let back: Session = serde_json::from_str(&text).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn count_mismatch_is_rejected() {
        let s = Session::new(batch(2, true));
        let mut v = serde_json::to_value(&s).unwrap();
        v["count"] = 5.into();
        assert!(serde_json::from_value::<Session>(v).is_err());
    }

    #[test]
    fn foreign_public_key_is_rejected() {
        let s = Session::new(batch(1, true));
        let other = KeyPair::generate().unwrap();
        let mut v = serde_json::to_value(&s).unwrap();
        v["wallets"][0]["publicKey"] = other.public_base58().into();
        assert!(serde_json::from_value::<Session>(v).is_err());
    }
}
