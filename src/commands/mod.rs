pub mod decode;
pub mod generate;
pub mod history;

use anyhow::{anyhow, bail, Context, Result};
use std::{fs, path::PathBuf};

use solana_wallet_gen::export::{self, ExportFormat, KeySelection};
use solana_wallet_gen::Batch;

/// Export text for the whole batch, or for a single wallet when `wallet` is
/// set. Wallets are numbered from 1, as in "Wallet #N". Single-wallet copy
/// text is the same plain line whatever the format.
pub fn render_payload(
    batch: &Batch,
    format: ExportFormat,
    select: KeySelection,
    wallet: Option<usize>,
) -> Result<String> {
    let Some(n) = wallet else {
        return Ok(export::render(batch, format, select));
    };
    if n == 0 || n > batch.len() {
        bail!("wallet #{n} does not exist; this batch has {} wallets", batch.len());
    }
    let kp = &batch.key_pairs()[n - 1];
    export::render_one(kp, batch.include_public_key(), select)
        .ok_or_else(|| anyhow!("wallet #{n} has no public key; the batch was generated without public keys"))
}

/// Print `payload` to stdout, or write it to `out` (creating parent dirs).
pub fn emit(payload: &str, out: Option<PathBuf>) -> Result<()> {
    if let Some(p) = out {
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating parent directory {}", parent.display()))?;
            }
        }
        fs::write(&p, payload).with_context(|| format!("writing {}", p.display()))?;
        eprintln!("✓ Wrote {}", p.display());
    } else {
        println!("{payload}");
    }
    Ok(())
}
