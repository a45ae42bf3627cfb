//! Internal utility functions and helpers.
//!
//! This module contains small helper functions used throughout the crate.
//! It is an implementation detail and not part of the public API.

use crate::error::HashError;

/// Encodes bytes as a lowercase hex string.
pub(crate) fn to_hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut result = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        result.push(HEX[(byte >> 4) as usize] as char);
        result.push(HEX[(byte & 0xf) as usize] as char);
    }
    result
}

/// Decodes a hex string into exactly `expected_len` bytes.
pub(crate) fn from_hex(hex_str: &str, expected_len: usize) -> Result<Vec<u8>, HashError> {
    if !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HashError::Parse {
            message: "hex string contains a non-hex character",
        });
    }
    if hex_str.len() != expected_len * 2 {
        return Err(HashError::Parse {
            message: "hex string has wrong length for this digest",
        });
    }
    let mut bytes = vec![0u8; expected_len];
    for (i, byte) in bytes.iter_mut().enumerate() {
        let pair = &hex_str[i * 2..i * 2 + 2];
        // Digits are pre-validated above; this cannot fail.
        *byte = u8::from_str_radix(pair, 16).map_err(|_| HashError::Parse {
            message: "hex string contains a non-hex character",
        })?;
    }
    Ok(bytes)
}
