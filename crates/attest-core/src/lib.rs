//! # attest-core — Foundational Types for the Attestation Stack
//!
//! This crate is the bedrock of the instance attestation stack. It defines
//! the type-system primitives that make the signing protocol hard to misuse.
//! Every other crate in the workspace depends on `attest-core`; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `InstanceUniqueId`,
//!    `ServiceIdentity`, `IdentityType` — all validated constructors.
//!    No bare strings for identifiers.
//!
//! 2. **`CanonicalBytes` newtype.** ALL signed payloads flow through
//!    `CanonicalBytes::assemble()`. There is no other way to produce the
//!    byte sequence a signature covers, so signer and verifier cannot
//!    diverge on field order or encoding.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with
//!    millisecond precision — the resolution the signed payload carries.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `attest-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use error::{AttestError, CryptoError, IdentityError};
pub use identity::{IdentityType, InstanceUniqueId, ServiceIdentity};
pub use temporal::Timestamp;
