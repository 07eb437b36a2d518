//! CSV / JSON export views of a batch.
//!
//! A key pair carries a public key in the output only when the batch was
//! generated with `include_public_key`. Output is deterministic: the same
//! batch, format and selection always render to the same bytes.

use clap::ValueEnum;
use serde::Serialize;

use crate::crypto::KeyPair;
use crate::types::Batch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum KeySelection {
    #[default]
    Both,
    PrivateOnly,
    PublicOnly,
}

/// JSON element; absent keys are left out entirely.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_key: Option<String>,
}

pub fn render(batch: &Batch, format: ExportFormat, selection: KeySelection) -> String {
    match format {
        ExportFormat::Csv => render_csv(batch, selection),
        ExportFormat::Json => render_json(batch, selection),
    }
}

fn render_csv(batch: &Batch, selection: KeySelection) -> String {
    let include = batch.include_public_key();
    let lines: Vec<String> = match selection {
        KeySelection::Both => batch
            .key_pairs()
            .iter()
            .map(|kp| both_line(kp, include))
            .collect(),
        KeySelection::PrivateOnly => batch.key_pairs().iter().map(KeyPair::secret_base58).collect(),
        KeySelection::PublicOnly if include => {
            batch.key_pairs().iter().map(KeyPair::public_base58).collect()
        }
        KeySelection::PublicOnly => Vec::new(),
    };
    lines.join("\n")
}

fn render_json(batch: &Batch, selection: KeySelection) -> String {
    let include = batch.include_public_key();
    let entries: Vec<ExportEntry> = match selection {
        KeySelection::Both => batch
            .key_pairs()
            .iter()
            .map(|kp| ExportEntry {
                private_key: Some(kp.secret_base58()),
                public_key: include.then(|| kp.public_base58()),
            })
            .collect(),
        KeySelection::PrivateOnly => batch
            .key_pairs()
            .iter()
            .map(|kp| ExportEntry { private_key: Some(kp.secret_base58()), public_key: None })
            .collect(),
        KeySelection::PublicOnly if include => batch
            .key_pairs()
            .iter()
            .map(|kp| ExportEntry { private_key: None, public_key: Some(kp.public_base58()) })
            .collect(),
        KeySelection::PublicOnly => Vec::new(),
    };
    // a Vec of string-only structs has no failing serialization path
    serde_json::to_string_pretty(&entries).expect("serialize export entries")
}

fn both_line(kp: &KeyPair, include_public_key: bool) -> String {
    if include_public_key {
        format!("{}, {}", kp.secret_base58(), kp.public_base58())
    } else {
        kp.secret_base58()
    }
}

/// Copy text for a single wallet. `None` when a public key was asked for but
/// the batch does not carry public keys.
pub fn render_one(kp: &KeyPair, include_public_key: bool, selection: KeySelection) -> Option<String> {
    match selection {
        KeySelection::Both => Some(both_line(kp, include_public_key)),
        KeySelection::PrivateOnly => Some(kp.secret_base58()),
        KeySelection::PublicOnly => include_public_key.then(|| kp.public_base58()),
    }
}

/// Status line shown after a run, e.g. "Generated 10 wallets in 3.21ms".
pub fn summary(batch: &Batch) -> String {
    format!("Generated {} wallets in {:.2}ms", batch.len(), batch.generation_time_ms())
}
