//! Base-58 text encoding for raw key bytes (Bitcoin alphabet, no padding),
//! the same encoding Solana tooling uses for secret keys and addresses.

use crate::error::{Result, WalletError};

/// Secret key bytes -> base-58 text.
pub fn encode_secret(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Public key bytes -> base-58 address text.
pub fn encode_public(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

pub fn decode(text: &str) -> Result<Vec<u8>> {
    let t = text.trim();
    if t.is_empty() {
        return Err(WalletError::Decoding("empty input".to_string()));
    }
    bs58::decode(t)
        .into_vec()
        .map_err(|e| WalletError::Decoding(e.to_string()))
}

/// Decode into a fixed-size array, rejecting any other length.
pub fn decode_array<const N: usize>(text: &str) -> Result<[u8; N]> {
    let v = decode(text)?;
    v.as_slice().try_into().map_err(|_| {
        WalletError::Decoding(format!("expected {} bytes, got {}", N, v.len()))
    })
}
