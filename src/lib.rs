//! Offline Solana wallet generator: batches of Ed25519 key pairs, base-58
//! encoding, CSV/JSON export, and a bounded local history of saved batches.

pub mod batch;
pub mod crypto;
pub mod defaults;
pub mod encoding;
pub mod error;
pub mod export;
pub mod history;
pub mod prefs;
pub mod types;
pub mod util;

pub use batch::generate as generate_batch;
pub use crypto::KeyPair;
pub use error::{Result, WalletError};
pub use export::{render as export_batch, ExportFormat, KeySelection};
pub use history::{ClearHistoryGate, SessionHistoryStore};
pub use prefs::{parse_count_text, Preferences};
pub use types::{Batch, Session};
