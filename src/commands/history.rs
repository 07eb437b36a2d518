use anyhow::{anyhow, Context, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use solana_wallet_gen::export::{ExportFormat, KeySelection};
use solana_wallet_gen::history::{ClearHistoryGate, ClearHistoryState, ConfirmationStep, SessionHistoryStore, SessionSlot};
use solana_wallet_gen::util::format_millis;

pub async fn list<S: SessionSlot>(store: &SessionHistoryStore<S>) -> Result<()> {
    let sessions = store.list().await;
    if sessions.is_empty() {
        println!("No saved sessions.");
        return Ok(());
    }
    for s in &sessions {
        let b = s.batch();
        println!(
            "{}  {}  {} wallets  {:.2}ms{}",
            s.id(),
            format_millis(s.timestamp()),
            s.count(),
            b.generation_time_ms(),
            if b.include_public_key() { "  +public keys" } else { "" },
        );
    }
    Ok(())
}

pub async fn show<S: SessionSlot>(
    store: &SessionHistoryStore<S>,
    id: &str,
    format: ExportFormat,
    select: KeySelection,
    wallet: Option<usize>,
    out: Option<PathBuf>,
) -> Result<()> {
    let session = store
        .get(id)
        .await
        .ok_or_else(|| anyhow!("no saved session with id {id}"))?;
    let payload = super::render_payload(session.batch(), format, select, wallet)?;
    super::emit(&payload, out)
}

pub async fn delete<S: SessionSlot>(store: &SessionHistoryStore<S>, id: &str) -> Result<()> {
    store.delete_one(id).await.context("deleting session")?;
    println!("✓ Deleted session {id}");
    Ok(())
}

pub async fn clear<S: SessionSlot>(store: &SessionHistoryStore<S>, yes: bool) -> Result<()> {
    let mut gate = ClearHistoryGate::new();
    {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut state = gate.request();
        while let ClearHistoryState::ConfirmationPending(step) = state {
            let accepted = yes || ask(&mut input, prompt(step))?;
            state = if accepted { gate.confirm() } else { gate.decline() };
        }
    }

    if gate.is_cleared() {
        store.delete_all().await.context("clearing history")?;
        println!("✓ History cleared");
    } else {
        println!("History left unchanged.");
    }
    Ok(())
}

fn prompt(step: ConfirmationStep) -> &'static str {
    match step {
        ConfirmationStep::First => "Clear all saved sessions? [y/N] ",
        ConfirmationStep::Second => "This permanently deletes every saved wallet. Really clear? [y/N] ",
    }
}

fn ask(input: &mut impl BufRead, question: &str) -> Result<bool> {
    print!("{question}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("reading confirmation")?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
