pub mod keypair;

pub use keypair::{KeyPair, PUBLIC_KEY_LEN, SECRET_KEY_LEN};
