//! Batch generation: N independent key pairs, all-or-nothing.
//!
//! Work is split into chunks on the tokio blocking pool. Chunks are awaited in
//! the order they were spawned, so index i of the request is index i of the
//! resulting batch regardless of scheduling.

use std::time::Instant;
use tracing::debug;

use crate::crypto::KeyPair;
use crate::error::{Result, WalletError};
use crate::types::Batch;

pub const MIN_COUNT: i64 = 1;
pub const MAX_COUNT: i64 = 1000;

pub fn validate_count(count: i64) -> Result<usize> {
    if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
        return Err(WalletError::InvalidCount(count));
    }
    Ok(count as usize)
}

pub async fn generate(count: i64, include_public_key: bool) -> Result<Batch> {
    let count = validate_count(count)?;
    let started = Instant::now();

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(count);
    let chunk = count.div_ceil(workers);

    let mut handles = Vec::with_capacity(workers);
    let mut remaining = count;
    while remaining > 0 {
        let n = remaining.min(chunk);
        remaining -= n;
        handles.push(tokio::task::spawn_blocking(move || generate_chunk(n)));
    }

    let mut key_pairs = Vec::with_capacity(count);
    for h in handles {
        let part = h.await.map_err(|e| WalletError::Task(e.to_string()))??;
        key_pairs.extend(part);
    }

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    debug!(count, workers, elapsed_ms, "generated wallet batch");

    Ok(Batch::new(key_pairs, include_public_key, elapsed_ms))
}

fn generate_chunk(n: usize) -> Result<Vec<KeyPair>> {
    (0..n).map(|_| KeyPair::generate()).collect()
}
