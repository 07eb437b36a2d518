use anyhow::{Context, Result};
use std::path::PathBuf;

use solana_wallet_gen::export::{self, KeySelection};
use solana_wallet_gen::history::{SessionHistoryStore, SessionSlot};
use solana_wallet_gen::{generate_batch, Preferences};

pub async fn run<S: SessionSlot>(
    store: &SessionHistoryStore<S>,
    prefs: &Preferences,
    select: KeySelection,
    wallet: Option<usize>,
    out: Option<PathBuf>,
) -> Result<()> {
    let count = prefs.wallet_count();
    let batch = generate_batch(count, prefs.include_public_keys)
        .await
        .context("Wallet Generation Error")?;
    eprintln!("✓ {}", export::summary(&batch));

    let payload = super::render_payload(&batch, prefs.output_format, select, wallet)?;

    if prefs.save_to_history {
        let session = store.save_batch(batch).await.context("saving session to history")?;
        eprintln!("✓ Saved session {} to history", session.id());
    }

    super::emit(&payload, out)
}
