use anyhow::{Context, Result};

use solana_wallet_gen::crypto::{KeyPair, PUBLIC_KEY_LEN, SECRET_KEY_LEN};
use solana_wallet_gen::encoding;
use solana_wallet_gen::util::bytes_to_0x;

/// Show what a base-58 key decodes to. 64-byte input is treated as a secret
/// key and checked against its embedded public half; 32-byte input is an
/// address.
pub fn run(text: &str) -> Result<()> {
    for line in describe(text)? {
        println!("{line}");
    }
    Ok(())
}

fn describe(text: &str) -> Result<Vec<String>> {
    let bytes = encoding::decode(text).context("decoding base-58 input")?;
    let mut lines = vec![format!("length:  {} bytes", bytes.len())];

    match bytes.len() {
        SECRET_KEY_LEN => {
            let kp = KeyPair::from_secret_bytes(&bytes).context("validating secret key")?;
            lines.push("kind:    secret key (valid pair)".to_string());
            lines.push(format!("address: {}", kp.public_base58()));
            lines.push(format!("public:  {}", bytes_to_0x(kp.public_key())));
        }
        PUBLIC_KEY_LEN => {
            let address: [u8; PUBLIC_KEY_LEN] = encoding::decode_array(text)?;
            lines.push("kind:    address".to_string());
            lines.push(format!("hex:     {}", bytes_to_0x(&address)));
        }
        _ => lines.push(format!("hex:     {}", bytes_to_0x(&bytes))),
    }
    Ok(lines)
}
