//! AES round transformations over the column-major [`State`].

use crate::gf::{multiply, xtime};
use crate::key::RoundKeys;
use crate::sbox::{inv_sbox, sbox};
use crate::state::State;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut().iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut().iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r`.
#[inline]
pub fn shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut row = state.row(r);
        row.rotate_left(r);
        state.set_row(r, row);
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut row = state.row(r);
        row.rotate_right(r);
        state.set_row(r, row);
    }
}

// [[2,3,1,1],[1,2,3,1],[1,1,2,3],[3,1,1,2]]
fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

// [[14,11,13,9],[9,14,11,13],[13,9,14,11],[11,13,9,14]]
fn inv_mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = multiply(a0, 0x0e) ^ multiply(a1, 0x0b) ^ multiply(a2, 0x0d) ^ multiply(a3, 0x09);
    col[1] = multiply(a0, 0x09) ^ multiply(a1, 0x0e) ^ multiply(a2, 0x0b) ^ multiply(a3, 0x0d);
    col[2] = multiply(a0, 0x0d) ^ multiply(a1, 0x09) ^ multiply(a2, 0x0e) ^ multiply(a3, 0x0b);
    col[3] = multiply(a0, 0x0b) ^ multiply(a1, 0x0d) ^ multiply(a2, 0x09) ^ multiply(a3, 0x0e);
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let mut column = state.column(col);
        mix_single_column(&mut column);
        state.set_column(col, column);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for col in 0..4 {
        let mut column = state.column(col);
        inv_mix_single_column(&mut column);
        state.set_column(col, column);
    }
}

/// XORs round key `round` into the state.
///
/// State byte (`r`, `c`) meets schedule byte `round * 16 + 4 * c + r`.
#[inline]
pub fn add_round_key(state: &mut State, round_keys: &RoundKeys, round: usize) {
    let round_key = round_keys.get(round);
    for c in 0..4 {
        for r in 0..4 {
            state.set(r, c, state.get(r, c) ^ round_key[4 * c + r]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use crate::cipher::expand_key;
    use crate::key::Aes128Key;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn state_from_hex(hex: &str) -> State {
        let bytes: Vec<u8> = (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
            .collect();
        let block: Block = bytes.try_into().unwrap();
        State::from_block(&block)
    }

    fn random_states(count: usize) -> Vec<State> {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        (0..count)
            .map(|_| {
                let mut block = [0u8; 16];
                rng.fill_bytes(&mut block);
                State::from_block(&block)
            })
            .collect()
    }

    // Round 1 intermediates from FIPS-197 Appendix B.
    #[test]
    fn round_one_matches_fips_197_appendix_b() {
        let mut state = state_from_hex("193de3bea0f4e22b9ac68d2ae9f84808");
        sub_bytes(&mut state);
        assert_eq!(state, state_from_hex("d42711aee0bf98f1b8b45de51e415230"));
        shift_rows(&mut state);
        assert_eq!(state, state_from_hex("d4bf5d30e0b452aeb84111f11e2798e5"));
        mix_columns(&mut state);
        assert_eq!(state, state_from_hex("046681e5e0cb199a48f8d37a2806264c"));
    }

    #[test]
    fn shift_rows_rotates_each_row() {
        let block: Block = std::array::from_fn(|i| i as u8);
        let mut state = State::from_block(&block);
        shift_rows(&mut state);
        assert_eq!(state.row(0), [0, 4, 8, 12]);
        assert_eq!(state.row(1), [5, 9, 13, 1]);
        assert_eq!(state.row(2), [10, 14, 2, 6]);
        assert_eq!(state.row(3), [15, 3, 7, 11]);
    }

    #[test]
    fn inverse_transforms_undo_forward() {
        for original in random_states(64) {
            let mut state = original;
            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, original);

            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);

            sub_bytes(&mut state);
            inv_sub_bytes(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn add_round_key_is_an_involution() {
        let round_keys = expand_key(&Aes128Key::from([0x5a; 16]));
        for original in random_states(8) {
            let mut state = original;
            add_round_key(&mut state, &round_keys, 3);
            assert_ne!(state, original);
            add_round_key(&mut state, &round_keys, 3);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn add_round_key_uses_schedule_offsets() {
        let round_keys = expand_key(&Aes128Key::from([0u8; 16]));
        let schedule = round_keys.to_bytes();
        let mut state = State::default();
        add_round_key(&mut state, &round_keys, 4);
        for c in 0..4 {
            for r in 0..4 {
                assert_eq!(state.get(r, c), schedule[4 * 16 + 4 * c + r]);
            }
        }
    }
}
