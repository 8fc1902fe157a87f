//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the attestation stack. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Failures fall into two channels that must never be conflated:
//!
//! - **Configuration failures** (unusable key material, undecodable
//!   signature encoding, malformed identifiers) indicate a broken
//!   deployment. They propagate as `Err` and are represented here.
//! - **Verification mismatch** (wrong key, tampered field, version-policy
//!   divergence) is an expected outcome, reported as a plain `false` from
//!   the verify path. It never appears in this hierarchy.

use thiserror::Error;

/// Top-level error type for the attestation stack.
#[derive(Error, Debug)]
pub enum AttestError {
    /// Cryptographic configuration failure.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Identifier parsing failure.
    #[error("identity error: {0}")]
    Identity(#[from] IdentityError),

    /// Timestamp parsing or range failure.
    #[error("timestamp error: {0}")]
    Timestamp(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-class failure in a cryptographic operation.
///
/// Everything in this enum means the operation could not be evaluated at
/// all. A signature that was evaluated and does not match is reported as
/// `Ok(false)` by the verify path, never through this type — conflating
/// "can't evaluate" with "evaluated and failed" would hide deployment bugs
/// behind an apparent negative verification.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Key material could not be used (wrong length, off-curve point).
    #[error("key error: {0}")]
    KeyError(String),

    /// The transported signature could not be decoded into signature bytes.
    #[error("malformed signature encoding: {0}")]
    MalformedSignature(String),
}

/// Error parsing a structured identity value.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// A dotted instance id did not have the expected shape.
    #[error("malformed instance id {value:?}: {reason}")]
    MalformedInstanceId {
        /// The input that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A service identity full name had no domain/name separator.
    #[error("malformed service identity {0:?}: expected <domain>.<name>")]
    MalformedServiceIdentity(String),

    /// An identity type id outside the closed set.
    #[error("unknown identity type id {0:?}")]
    UnknownIdentityType(String),
}
