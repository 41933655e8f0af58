//! AES-128 key schedule and block encryption/decryption.

use crate::block::Block;
use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::{sbox, RCON};
use crate::state::State;

type Word = [u8; 4];

const WORDS: usize = 4 * ROUND_KEY_COUNT;

fn rot_word(word: Word) -> Word {
    let [b0, b1, b2, b3] = word;
    [b1, b2, b3, b0]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_word(lhs: Word, rhs: Word) -> Word {
    std::array::from_fn(|i| lhs[i] ^ rhs[i])
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [[0u8; 4]; WORDS];
    for (word, chunk) in w.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in 4..WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / 4];
        }
        w[i] = xor_word(w[i - 4], temp);
    }

    let mut round_keys = [[0u8; 16]; ROUND_KEY_COUNT];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for (chunk, word) in round_key.chunks_exact_mut(4).zip(&w[round * 4..round * 4 + 4]) {
            chunk.copy_from_slice(word);
        }
    }

    RoundKeys::new(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys, 0);

    for round in 1..10 {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys, round);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys, 10);

    state.to_block()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys, 10);
    for round in (1..10).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys, round);
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys, 0);

    state.to_block()
}

/// Encrypts one block, deriving the schedule from `key` for this call only.
pub fn encrypt_block_with_key(block: &Block, key: &Aes128Key) -> Block {
    encrypt_block(block, &expand_key(key))
}

/// Decrypts one block, deriving the schedule from `key` for this call only.
pub fn decrypt_block_with_key(block: &Block, key: &Aes128Key) -> Block {
    decrypt_block(block, &expand_key(key))
}
