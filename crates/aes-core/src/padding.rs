//! PKCS7 padding to the AES block size.

use crate::block::BLOCK_SIZE;
use crate::error::EcbError;

/// Appends `N = 16 - len % 16` bytes of value `N`.
///
/// Aligned input gains a full block of `0x10`, so at least one byte is
/// always added.
pub fn pad(input: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - input.len() % BLOCK_SIZE;
    let mut out = Vec::with_capacity(input.len() + pad_len);
    out.extend_from_slice(input);
    out.resize(input.len() + pad_len, pad_len as u8);
    out
}

/// Validates and strips PKCS7 padding, returning the message prefix.
pub fn unpad(buffer: &[u8]) -> Result<&[u8], EcbError> {
    let pad_value = *buffer.last().ok_or(EcbError::InvalidPadding)?;
    let pad_len = usize::from(pad_value);
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > buffer.len() {
        log::debug!("rejecting padding byte {pad_value:#04x}");
        return Err(EcbError::InvalidPadding);
    }
    let (message, padding) = buffer.split_at(buffer.len() - pad_len);
    if padding.iter().any(|&b| b != pad_value) {
        log::debug!("padding bytes disagree with declared length {pad_len}");
        return Err(EcbError::InvalidPadding);
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_lengths() {
        assert_eq!(pad(b""), vec![16u8; 16]);
        let padded = pad(b"YELLOW SUBMARINE");
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[16..], &[16u8; 16]);

        let padded = pad(b"ICE ICE BABY");
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[12..], &[4u8; 4]);

        let padded = pad(&[0xaa; 31]);
        assert_eq!(padded.len(), 32);
        assert_eq!(padded[31], 1);
    }

    #[test]
    fn unpad_strips_valid_padding() {
        for len in 0..48 {
            let message: Vec<u8> = (0..len as u8).collect();
            let padded = pad(&message);
            assert_eq!(unpad(&padded).unwrap(), &message[..]);
        }
    }

    #[test]
    fn unpad_rejects_bad_padding() {
        let mut block = [0x41u8; 16];
        block[15] = 0;
        assert_eq!(unpad(&block), Err(EcbError::InvalidPadding));

        block[15] = 17;
        assert_eq!(unpad(&block), Err(EcbError::InvalidPadding));

        block[12..].copy_from_slice(&[4, 4, 5, 4]);
        assert_eq!(unpad(&block), Err(EcbError::InvalidPadding));

        assert_eq!(unpad(&[]), Err(EcbError::InvalidPadding));
        assert_eq!(unpad(&[3, 3]), Err(EcbError::InvalidPadding));
    }
}
