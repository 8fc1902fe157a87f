//! # Signature Transport Encoding
//!
//! Identity documents carry their signature as a standard-alphabet, padded
//! base64 string. This module is the single place that encoding lives.
//!
//! Decoding failure is a configuration-class error
//! (`CryptoError::MalformedSignature`): a signature string that cannot be
//! decoded was never evaluated cryptographically, and reporting it as a
//! `false` verification would hide deployment bugs behind an apparent
//! negative result.

use attest_core::error::CryptoError;
use base64::prelude::{Engine as _, BASE64_STANDARD};

use crate::ed25519::Ed25519Signature;

/// Encode a signature for transport: standard alphabet, padded base64.
pub fn encode_signature(signature: &Ed25519Signature) -> String {
    BASE64_STANDARD.encode(signature.as_bytes())
}

/// Decode a transported signature string.
///
/// # Errors
///
/// Returns `CryptoError::MalformedSignature` if the input is not valid
/// base64 or does not decode to exactly 64 bytes.
pub fn decode_signature(encoded: &str) -> Result<Ed25519Signature, CryptoError> {
    let bytes = BASE64_STANDARD
        .decode(encoded)
        .map_err(|e| CryptoError::MalformedSignature(format!("invalid base64: {e}")))?;
    let arr: [u8; 64] = bytes.try_into().map_err(|v: Vec<u8>| {
        CryptoError::MalformedSignature(format!(
            "expected 64 signature bytes, got {}",
            v.len()
        ))
    })?;
    Ok(Ed25519Signature::from_bytes(arr))
}
