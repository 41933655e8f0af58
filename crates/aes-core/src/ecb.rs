//! Electronic Codebook mode with PKCS7 padding.
//!
//! Every block is processed on its own, so identical plaintext blocks under
//! one key produce identical ciphertext blocks.

use crate::block::{Block, BLOCK_SIZE};
use crate::cipher::{decrypt_block, encrypt_block, expand_key};
use crate::error::EcbError;
use crate::key::{Aes128Key, RoundKeys};
use crate::padding::{pad, unpad};

/// Pads `input` and encrypts it block by block.
///
/// The result is a multiple of 16 bytes and always longer than `input`.
pub fn encrypt(input: &[u8], key: &Aes128Key) -> Vec<u8> {
    encrypt_with_round_keys(input, &expand_key(key))
}

/// Like [`encrypt`], reusing an already expanded schedule.
pub fn encrypt_with_round_keys(input: &[u8], round_keys: &RoundKeys) -> Vec<u8> {
    let mut data = pad(input);
    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        let block = to_block(chunk);
        chunk.copy_from_slice(&encrypt_block(&block, round_keys));
    }
    log::trace!(
        "ecb encrypted {} bytes into {} blocks",
        input.len(),
        data.len() / BLOCK_SIZE
    );
    data
}

/// Decrypts `input` block by block and strips its padding.
///
/// Fails with [`EcbError::InvalidLength`] unless `input` holds at least one
/// whole block and nothing else, and with [`EcbError::InvalidPadding`] when
/// the recovered padding is malformed.
pub fn decrypt(input: &[u8], key: &Aes128Key) -> Result<Vec<u8>, EcbError> {
    decrypt_with_round_keys(input, &expand_key(key))
}

/// Like [`decrypt`], reusing an already expanded schedule.
pub fn decrypt_with_round_keys(
    input: &[u8],
    round_keys: &RoundKeys,
) -> Result<Vec<u8>, EcbError> {
    if input.is_empty() || input.len() % BLOCK_SIZE != 0 {
        log::debug!("rejecting ecb input of {} bytes", input.len());
        return Err(EcbError::InvalidLength { len: input.len() });
    }
    let mut data = input.to_vec();
    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        let block = to_block(chunk);
        chunk.copy_from_slice(&decrypt_block(&block, round_keys));
    }
    let message_len = unpad(&data)?.len();
    data.truncate(message_len);
    log::trace!(
        "ecb decrypted {} blocks into {} bytes",
        input.len() / BLOCK_SIZE,
        message_len
    );
    Ok(data)
}

fn to_block(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(chunk);
    block
}
