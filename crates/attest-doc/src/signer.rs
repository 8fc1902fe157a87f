//! # Signature Generation and Validation
//!
//! The two public operations of the attestation protocol.
//!
//! Generation always runs "current": the issuer is at or above the version
//! threshold, so the attested service identity is always signed.
//! Validation reads the **document's own** version tag to decide which
//! field set to recompute, so one code path validates both legacy and
//! current documents.
//!
//! Both operations are synchronous, CPU-bound, and share no state between
//! calls; concurrent use needs no coordination.

use std::collections::BTreeSet;

use attest_core::error::CryptoError;
use attest_core::{CanonicalBytes, IdentityType, InstanceUniqueId, ServiceIdentity, Timestamp};
use attest_crypto::{decode_signature, encode_signature, verify, Ed25519KeyPair, Ed25519PublicKey};

use crate::document::IdentityDocument;
use crate::version::signs_service_identity;

/// Sign the canonical encoding of the given fields with the issuer's key.
///
/// The attested `service_identity` is always included — generation runs at
/// the current document version. Returns the padded standard-base64
/// signature string carried in the document.
#[allow(clippy::too_many_arguments)]
pub fn generate_signature(
    provider_unique_id: &InstanceUniqueId,
    provider_service_identity: &ServiceIdentity,
    config_server_hostname: &str,
    instance_hostname: &str,
    created_at: Timestamp,
    ip_addresses: &BTreeSet<String>,
    identity_type: IdentityType,
    keypair: &Ed25519KeyPair,
    service_identity: &ServiceIdentity,
) -> String {
    let payload = CanonicalBytes::assemble(
        provider_unique_id,
        provider_service_identity,
        config_server_hostname,
        instance_hostname,
        created_at,
        ip_addresses,
        identity_type,
        Some(service_identity),
    );
    encode_signature(&keypair.sign(&payload))
}

/// Check a document's embedded signature against the issuer's public key.
///
/// Recomputes the canonical encoding using the field set selected by the
/// document's own `document_version`, then verifies.
///
/// Returns `Ok(false)` on a genuine cryptographic mismatch — wrong key,
/// tampered field, or a version tag that selects a different field set
/// than the signer used. Returns `Err` only for configuration-class
/// failures (undecodable signature string, unusable public key), which
/// must not be mistaken for "document invalid".
pub fn has_valid_signature(
    doc: &IdentityDocument,
    public_key: &Ed25519PublicKey,
) -> Result<bool, CryptoError> {
    let signature = decode_signature(&doc.signature)?;
    let service_identity = signs_service_identity(doc.document_version)
        .then_some(&doc.service_identity);
    let payload = CanonicalBytes::assemble(
        &doc.provider_unique_id,
        &doc.provider_service_identity,
        &doc.config_server_hostname,
        &doc.instance_hostname,
        doc.created_at,
        &doc.ip_addresses,
        doc.identity_type,
        service_identity,
    );
    verify(&payload, &signature, public_key)
}
