use ed25519_dalek::SigningKey;
use rand_core::{OsRng, RngCore};
use std::fmt;
use zeroize::Zeroize;

use crate::encoding;
use crate::error::{Result, WalletError};

/// Ed25519 seed (32) || public key (32), the Solana secret key layout.
pub const SECRET_KEY_LEN: usize = 64;
pub const PUBLIC_KEY_LEN: usize = 32;

const SEED_LEN: usize = 32;

/// One Solana wallet. The public half is always derived from the secret,
/// never set on its own. Secret bytes are zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    secret_key: [u8; SECRET_KEY_LEN],
    public_key: [u8; PUBLIC_KEY_LEN],
}

impl KeyPair {
    /// Fresh key pair from the OS secure random source.
    pub fn generate() -> Result<Self> {
        let mut seed = [0u8; SEED_LEN];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|e| WalletError::RandomSource(e.to_string()))?;
        let signing = SigningKey::from_bytes(&seed);
        seed.zeroize();
        Ok(Self::from_signing_key(&signing))
    }

    /// Rebuild a key pair from 64 secret bytes, checking that the embedded
    /// public half matches the one derived from the seed.
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self> {
        let arr: &[u8; SECRET_KEY_LEN] = bytes.try_into().map_err(|_| {
            WalletError::Decoding(format!(
                "secret key must be {} bytes, got {}",
                SECRET_KEY_LEN,
                bytes.len()
            ))
        })?;
        let signing = SigningKey::from_keypair_bytes(arr)
            .map_err(|_| WalletError::Decoding("public half does not match secret seed".to_string()))?;
        Ok(Self::from_signing_key(&signing))
    }

    pub fn from_base58_secret(text: &str) -> Result<Self> {
        let mut bytes = encoding::decode(text)?;
        let kp = Self::from_secret_bytes(&bytes);
        bytes.zeroize();
        kp
    }

    fn from_signing_key(signing: &SigningKey) -> Self {
        Self {
            secret_key: signing.to_keypair_bytes(),
            public_key: signing.verifying_key().to_bytes(),
        }
    }

    pub fn secret_key(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.secret_key
    }

    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.public_key
    }

    pub fn secret_base58(&self) -> String {
        encoding::encode_secret(&self.secret_key)
    }

    /// The wallet address.
    pub fn public_base58(&self) -> String {
        encoding::encode_public(&self.public_key)
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.secret_key.zeroize();
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_base58())
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn public_half_is_embedded_in_secret() {
        let kp = KeyPair::generate().unwrap();
        assert_eq!(&kp.secret_key()[SEED_LEN..], kp.public_key());
    }

    #[test]
    fn base58_round_trip() {
        let kp = KeyPair::generate().unwrap();
        assert_eq!(encoding::decode(&kp.secret_base58()).unwrap(), kp.secret_key().to_vec());
        assert_eq!(encoding::decode(&kp.public_base58()).unwrap(), kp.public_key().to_vec());
        assert_eq!(KeyPair::from_base58_secret(&kp.secret_base58()).unwrap(), kp);
    }

    #[test]
    fn ten_thousand_secrets_do_not_collide() {
        let mut seen = HashSet::with_capacity(10_000);
        for _ in 0..10_000 {
            let kp = KeyPair::generate().unwrap();
            assert!(seen.insert(*kp.secret_key()));
        }
    }

    #[test]
    fn rejects_mismatched_public_half() {
        let a = KeyPair::generate().unwrap();
        let b = KeyPair::generate().unwrap();
        let mut forged = *a.secret_key();
        forged[SEED_LEN..].copy_from_slice(b.public_key());
        assert!(matches!(
            KeyPair::from_secret_bytes(&forged),
            Err(WalletError::Decoding(_))
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            KeyPair::from_secret_bytes(&[1u8; 32]),
            Err(WalletError::Decoding(_))
        ));
    }

    #[test]
    fn debug_output_hides_secret() {
        let kp = KeyPair::generate().unwrap();
        let dbg = format!("{kp:?}");
        assert!(dbg.contains("<redacted>"));
        assert!(!dbg.contains(&kp.secret_base58()));
    }
}
