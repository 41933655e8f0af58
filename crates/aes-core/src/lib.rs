//! AES-128 block cipher with an Electronic Codebook codec.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - GF(2^8) arithmetic and the AES substitution tables.
//! - Key schedule for AES-128.
//! - Single-block encryption and decryption.
//! - ECB mode over arbitrary-length buffers with PKCS7 padding.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
pub mod ecb;
mod error;
pub mod gf;
mod key;
pub mod padding;
pub mod round;
mod sbox;
mod state;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{
    decrypt_block, decrypt_block_with_key, encrypt_block, encrypt_block_with_key, expand_key,
};
pub use crate::error::EcbError;
pub use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
pub use crate::sbox::{inv_sbox, sbox};
pub use crate::state::State;
