use clap::{Parser, Subcommand};
use std::path::PathBuf;

use solana_wallet_gen::{KeySelection, Preferences};

/// Offline Solana wallet generator: batch key pairs, CSV/JSON export, local history
#[derive(Parser, Debug)]
#[command(version, about = "Offline Solana wallet generator")]
pub struct Cli {
    /// Directory holding the session history (default: platform data dir)
    #[arg(long, global = true, env = "SWG_HISTORY_DIR")]
    pub history_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a batch of wallets and print the export
    Generate {
        #[command(flatten)]
        prefs: Preferences,

        /// Which keys to export
        #[arg(long, value_enum, default_value = "both")]
        select: KeySelection,

        /// Export only wallet #N (1-based) instead of the whole batch
        #[arg(long, value_name = "N")]
        wallet: Option<usize>,

        /// Optional path to write the export to instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Inspect or edit saved generation sessions
    History {
        #[command(subcommand)]
        cmd: HistoryCommand,
    },

    /// Decode a base-58 key and show its bytes
    Decode {
        /// Base-58 secret key (64 bytes) or address (32 bytes)
        text: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// List saved sessions, newest first
    List,

    /// Re-export a saved session
    Show {
        id: String,

        #[arg(long, value_enum, env = "SWG_OUTPUT_FORMAT", default_value = "csv")]
        format: solana_wallet_gen::ExportFormat,

        #[arg(long, value_enum, default_value = "both")]
        select: KeySelection,

        /// Export only wallet #N (1-based)
        #[arg(long, value_name = "N")]
        wallet: Option<usize>,

        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Delete one saved session
    Delete { id: String },

    /// Delete every saved session (asks twice)
    Clear {
        /// Answer yes to both confirmations
        #[arg(long)]
        yes: bool,
    },
}
