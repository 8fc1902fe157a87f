//! # Identity Document
//!
//! The signed attestation an issuer hands to a freshly provisioned
//! instance: identity, network location, provisioning metadata, and the
//! issuer's signature over the canonical encoding of those fields.
//!
//! One document per instance instantiation; re-provisioning issues a new
//! document with a new signature. A document is never mutated in place —
//! any field change invalidates the embedded signature.

use std::collections::BTreeSet;

use attest_core::{IdentityType, InstanceUniqueId, ServiceIdentity, Timestamp};
use attest_crypto::Ed25519KeyPair;
use serde::{Deserialize, Serialize};

use crate::signer::generate_signature;
use crate::version::DEFAULT_DOCUMENT_VERSION;

/// A signed identity document.
///
/// Wire field names are camelCase; the transport envelope (header, body,
/// whatever the caller uses) is outside this crate.
///
/// `ip_addresses` is a `BTreeSet` so set semantics and the canonical
/// ascending iteration order hold by construction, whatever order the
/// addresses arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDocument {
    /// Structured identifier uniquely naming the attested instance.
    pub provider_unique_id: InstanceUniqueId,
    /// Identity of the issuing provider service.
    pub provider_service_identity: ServiceIdentity,
    /// Hostname of the config server that issued the document.
    pub config_server_hostname: String,
    /// Hostname of the attested instance.
    pub instance_hostname: String,
    /// Document creation time, UTC, millisecond resolution.
    pub created_at: Timestamp,
    /// Textual IP addresses of the instance.
    pub ip_addresses: BTreeSet<String>,
    /// Category of the attested instance.
    pub identity_type: IdentityType,
    /// Version tag selecting which fields the signature covers.
    pub document_version: u32,
    /// Identity of the attested instance itself. Participates in the
    /// signature only for `document_version >= SERVICE_IDENTITY_VERSION`.
    pub service_identity: ServiceIdentity,
    /// Base64-encoded signature over the canonical field encoding.
    pub signature: String,
}

impl IdentityDocument {
    /// Issue a complete document at the current version: canonicalize,
    /// sign with the issuer's key pair, and assemble.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        provider_unique_id: InstanceUniqueId,
        provider_service_identity: ServiceIdentity,
        config_server_hostname: String,
        instance_hostname: String,
        created_at: Timestamp,
        ip_addresses: BTreeSet<String>,
        identity_type: IdentityType,
        keypair: &Ed25519KeyPair,
        service_identity: ServiceIdentity,
    ) -> Self {
        let signature = generate_signature(
            &provider_unique_id,
            &provider_service_identity,
            &config_server_hostname,
            &instance_hostname,
            created_at,
            &ip_addresses,
            identity_type,
            keypair,
            &service_identity,
        );
        Self {
            provider_unique_id,
            provider_service_identity,
            config_server_hostname,
            instance_hostname,
            created_at,
            ip_addresses,
            identity_type,
            document_version: DEFAULT_DOCUMENT_VERSION,
            service_identity,
            signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> IdentityDocument {
        let keypair = Ed25519KeyPair::from_seed(&[1u8; 32]);
        IdentityDocument::new(
            InstanceUniqueId::new("tenant1", "app1", "default", 0).unwrap(),
            ServiceIdentity::new("vespa", "provider").unwrap(),
            "cfg1.example.com".to_string(),
            "host1.example.com".to_string(),
            Timestamp::from_epoch_millis(1_700_000_000_000).unwrap(),
            ["10.0.0.5".to_string(), "10.0.0.1".to_string()]
                .into_iter()
                .collect(),
            IdentityType::Tenant,
            &keypair,
            ServiceIdentity::from_full_name("vespa.tenant.myservice").unwrap(),
        )
    }

    #[test]
    fn test_new_stamps_default_version() {
        assert_eq!(sample_document().document_version, DEFAULT_DOCUMENT_VERSION);
    }

    #[test]
    fn test_serde_wire_names_are_camel_case() {
        let doc = sample_document();
        let json = serde_json::to_value(&doc).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "providerUniqueId",
            "providerServiceIdentity",
            "configServerHostname",
            "instanceHostname",
            "createdAt",
            "ipAddresses",
            "identityType",
            "documentVersion",
            "serviceIdentity",
            "signature",
        ] {
            assert!(obj.contains_key(key), "missing wire field {key}");
        }
        assert_eq!(obj["providerUniqueId"], "tenant1.app1.default.0");
        assert_eq!(obj["identityType"], "tenant");
    }

    #[test]
    fn test_serde_roundtrip() {
        let doc = sample_document();
        let json = serde_json::to_string(&doc).unwrap();
        let back: IdentityDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_ip_addresses_deduplicate() {
        let ips: BTreeSet<String> = ["10.0.0.1", "10.0.0.1", "10.0.0.2"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(ips.len(), 2);
    }
}
