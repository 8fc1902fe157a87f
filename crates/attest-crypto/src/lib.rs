//! # attest-crypto — Signature Engine
//!
//! Provides the cryptographic operations for the attestation stack:
//!
//! - **Ed25519** signing and verification over `CanonicalBytes` (the only
//!   valid input type, enforcing canonicalization correctness).
//! - **Base64** transport encoding for signatures (standard alphabet,
//!   padded — the form carried in the identity document).
//!
//! Every sign and verify call builds its own signing/verification state;
//! nothing cryptographic is shared or cached between calls, so concurrent
//! calls are fully independent.
//!
//! ## Crate Policy
//!
//! - Depends only on `attest-core` internally.
//! - No mocking of cryptographic operations in tests — all tests use real
//!   `CanonicalBytes` and real Ed25519.
//! - Key material is caller-supplied and read-only here; no generation or
//!   storage beyond the test/tooling constructors on `Ed25519KeyPair`.

pub mod ed25519;
pub mod encoding;

pub use ed25519::{verify, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
pub use encoding::{decode_signature, encode_signature};
