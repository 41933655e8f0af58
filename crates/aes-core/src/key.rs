//! Key types for AES-128.

use crate::block::{Block, BLOCK_SIZE};

/// Number of round keys produced by the AES-128 schedule.
pub const ROUND_KEY_COUNT: usize = 11;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl Aes128Key {
    /// Raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

/// Expanded round keys for AES-128.
///
/// Only [`crate::expand_key`] builds one, and nothing hands out mutable
/// access, so a schedule never changes after derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys([Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    pub(crate) fn new(keys: [Block; ROUND_KEY_COUNT]) -> Self {
        Self(keys)
    }

    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// The whole schedule as 176 contiguous bytes.
    pub fn to_bytes(&self) -> [u8; ROUND_KEY_COUNT * BLOCK_SIZE] {
        let mut out = [0u8; ROUND_KEY_COUNT * BLOCK_SIZE];
        for (chunk, key) in out.chunks_exact_mut(BLOCK_SIZE).zip(self.0.iter()) {
            chunk.copy_from_slice(key);
        }
        out
    }
}
