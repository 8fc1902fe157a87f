//! # attest-doc — Signed Identity Documents
//!
//! The outward-facing crate of the attestation stack. An issuer builds an
//! [`IdentityDocument`] binding an instance's identity, network location,
//! and provisioning metadata to an Ed25519 signature; a relying party
//! checks that signature offline against the issuer's public key.
//!
//! Control flow on the issuer side: fields → canonical assembly (current
//! field set) → sign → document. On the verifier side: document → version
//! policy reads the document's own version tag → identical canonical
//! assembly → verify against the embedded signature.
//!
//! ## Crate Policy
//!
//! - A signed document is immutable; mutate a field and the signature no
//!   longer verifies.
//! - Key material, transport, clocks, and hostname lookup are all
//!   caller-supplied. This crate holds no state between calls.

pub mod document;
pub mod signer;
pub mod version;

pub use document::IdentityDocument;
pub use signer::{generate_signature, has_valid_signature};
pub use version::{signs_service_identity, DEFAULT_DOCUMENT_VERSION, SERVICE_IDENTITY_VERSION};
