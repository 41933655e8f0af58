//! Errors reported by the ECB codec.

/// Reasons an ECB ciphertext is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EcbError {
    /// Ciphertext length is zero or not a multiple of the block size.
    #[error("ciphertext length {len} is not a positive multiple of 16")]
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// Trailing PKCS7 padding is malformed.
    #[error("invalid PKCS7 padding")]
    InvalidPadding,
}
