pub mod aead;
pub mod nonce;
pub mod types;

pub use aead::*;
pub use nonce::*;
pub use types::*;
