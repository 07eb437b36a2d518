//! Central place for all default values.
//! Update these and the whole app picks them up.

use std::path::PathBuf;

pub struct Defaults;

impl Defaults {
    /* Generation */
    pub const WALLET_COUNT: i64 = 10;
    pub const WALLET_COUNT_TEXT: &'static str = "10";
    pub const OUTPUT_FORMAT: &'static str = "csv";

    /* History */
    pub const HISTORY_SLOT: &'static str = "wallet-sessions";
    pub const MAX_HISTORY_SESSIONS: usize = 50;
    pub const APP_DIR_NAME: &'static str = "solana-wallet-gen";
    pub const FALLBACK_HISTORY_DIR: &'static str = "./wallet-history";
}

/// `<platform data dir>/solana-wallet-gen`, or `./wallet-history` when the
/// platform has no data dir.
pub fn history_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(Defaults::APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(Defaults::FALLBACK_HISTORY_DIR))
}
