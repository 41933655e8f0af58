//! The 4×4 cipher state.

use crate::block::Block;

/// One block viewed as a 4×4 byte matrix.
///
/// Bytes are stored column-major: block byte `i` sits at row `i % 4`,
/// column `i / 4`, so loading and storing a block is a plain copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State([u8; 16]);

impl State {
    #[inline]
    const fn index(row: usize, col: usize) -> usize {
        4 * col + row
    }

    /// Loads a block into a new state.
    #[inline]
    pub fn from_block(block: &Block) -> Self {
        Self(*block)
    }

    /// Writes the state back out as a block.
    #[inline]
    pub fn to_block(&self) -> Block {
        self.0
    }

    /// Returns the byte at (`row`, `col`).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[Self::index(row, col)]
    }

    /// Sets the byte at (`row`, `col`).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.0[Self::index(row, col)] = value;
    }

    /// Copies out column `col`, top to bottom.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        let idx = Self::index(0, col);
        [self.0[idx], self.0[idx + 1], self.0[idx + 2], self.0[idx + 3]]
    }

    /// Overwrites column `col`.
    #[inline]
    pub fn set_column(&mut self, col: usize, column: [u8; 4]) {
        let idx = Self::index(0, col);
        self.0[idx..idx + 4].copy_from_slice(&column);
    }

    /// Copies out row `row`, left to right.
    #[inline]
    pub fn row(&self, row: usize) -> [u8; 4] {
        std::array::from_fn(|col| self.get(row, col))
    }

    /// Overwrites row `row`.
    #[inline]
    pub fn set_row(&mut self, row: usize, values: [u8; 4]) {
        for (col, value) in values.into_iter().enumerate() {
            self.set(row, col, value);
        }
    }

    /// All 16 bytes, for transforms that do not care about position.
    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8; 16] {
        &mut self.0
    }
}
