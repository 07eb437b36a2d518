use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, HistoryCommand};
use solana_wallet_gen::defaults::history_dir;
use solana_wallet_gen::SessionHistoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries exports; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = SessionHistoryStore::open(cli.history_dir.unwrap_or_else(history_dir));

    match cli.cmd {
        Command::Generate { prefs, select, wallet, out } => {
            commands::generate::run(&store, &prefs, select, wallet, out).await
        }

        Command::History { cmd } => match cmd {
            HistoryCommand::List => commands::history::list(&store).await,
            HistoryCommand::Show { id, format, select, wallet, out } => {
                commands::history::show(&store, &id, format, select, wallet, out).await
            }
            HistoryCommand::Delete { id } => commands::history::delete(&store, &id).await,
            HistoryCommand::Clear { yes } => commands::history::clear(&store, yes).await,
        },

        Command::Decode { text } => commands::decode::run(&text),
    }
}
