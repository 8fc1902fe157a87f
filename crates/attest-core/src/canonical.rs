//! # Canonical Payload — Deterministic Signed-Byte Production
//!
//! This module defines `CanonicalBytes`, the sole construction path for the
//! byte sequence an identity-document signature covers.
//!
//! ## Security Invariant
//!
//! The `CanonicalBytes` newtype has a private inner field. The only way to
//! construct it is through `CanonicalBytes::assemble()`, which lays the
//! document fields out in one fixed order with one fixed encoding. Any
//! function that signs or verifies must accept `&CanonicalBytes`, so a
//! signer and a verifier can never disagree on field order or encoding —
//! the "divergent serialization path" defect class is structurally
//! impossible.
//!
//! ## Wire Contract
//!
//! Fields are concatenated with **no delimiters and no length prefixes**,
//! in this exact order:
//!
//! 1. UTF-8 of the instance id's dotted rendering.
//! 2. UTF-8 of the provider service identity's full name.
//! 3. UTF-8 of the config server hostname.
//! 4. UTF-8 of the instance hostname.
//! 5. 8 bytes, big-endian, of the creation time as epoch milliseconds.
//! 6. UTF-8 of each IP address, ascending lexicographic, no separators.
//! 7. UTF-8 of the identity type's short id.
//! 8. UTF-8 of the attested service identity's full name, only when supplied.
//!
//! The absence of delimiters means adjacent fields could in principle be
//! re-split into a different field combination with the same total bytes.
//! That is a property of the deployed protocol that every already-issued
//! document and every fielded verifier depends on; introducing delimiters
//! or length prefixes here would break them all.

use std::collections::BTreeSet;

use crate::identity::{IdentityType, InstanceUniqueId, ServiceIdentity};
use crate::temporal::Timestamp;

/// The deterministic byte sequence an identity-document signature covers.
///
/// # Invariants
///
/// - The only constructor is [`CanonicalBytes::assemble()`].
/// - Identical field values always produce identical bytes, across
///   processes and across implementations.
/// - IP addresses serialize in ascending lexicographic order of their
///   textual form regardless of input order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Assemble the canonical payload from document fields.
    ///
    /// `service_identity` carries the version-policy inclusion decision:
    /// `Some` appends the attested service identity's full name as the
    /// final field, `None` leaves the payload at the legacy field set.
    /// The policy itself lives with the document; this function only
    /// executes the outcome.
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        provider_unique_id: &InstanceUniqueId,
        provider_service_identity: &ServiceIdentity,
        config_server_hostname: &str,
        instance_hostname: &str,
        created_at: Timestamp,
        ip_addresses: &BTreeSet<String>,
        identity_type: IdentityType,
        service_identity: Option<&ServiceIdentity>,
    ) -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(provider_unique_id.as_dotted_string().as_bytes());
        buf.extend_from_slice(provider_service_identity.full_name().as_bytes());
        buf.extend_from_slice(config_server_hostname.as_bytes());
        buf.extend_from_slice(instance_hostname.as_bytes());
        buf.extend_from_slice(&created_at.epoch_millis().to_be_bytes());
        // BTreeSet iteration is ascending lexicographic by construction.
        for ip in ip_addresses {
            buf.extend_from_slice(ip.as_bytes());
        }
        buf.extend_from_slice(identity_type.id().as_bytes());
        if let Some(identity) = service_identity {
            buf.extend_from_slice(identity.full_name().as_bytes());
        }
        Self(buf)
    }

    /// Access the canonical bytes for signing or verification.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_id() -> InstanceUniqueId {
        InstanceUniqueId::new("tenant1", "app1", "default", 0).unwrap()
    }

    fn provider() -> ServiceIdentity {
        ServiceIdentity::from_full_name("vespa.provider").unwrap()
    }

    fn attested() -> ServiceIdentity {
        ServiceIdentity::from_full_name("vespa.tenant.myservice").unwrap()
    }

    fn ips(addrs: &[&str]) -> BTreeSet<String> {
        addrs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_golden_byte_layout() {
        let created_at = Timestamp::from_epoch_millis(1_700_000_000_000).unwrap();
        let cb = CanonicalBytes::assemble(
            &sample_id(),
            &provider(),
            "cfg1.example.com",
            "host1.example.com",
            created_at,
            &ips(&["10.0.0.5", "10.0.0.1"]),
            IdentityType::Tenant,
            Some(&attested()),
        );

        let mut expected = Vec::new();
        expected.extend_from_slice(b"tenant1.app1.default.0");
        expected.extend_from_slice(b"vespa.provider");
        expected.extend_from_slice(b"cfg1.example.com");
        expected.extend_from_slice(b"host1.example.com");
        expected.extend_from_slice(&[0x00, 0x00, 0x01, 0x8B, 0xCF, 0xE5, 0x68, 0x00]);
        // Sorted: 10.0.0.1 before 10.0.0.5, no separator.
        expected.extend_from_slice(b"10.0.0.110.0.0.5");
        expected.extend_from_slice(b"tenant");
        expected.extend_from_slice(b"vespa.tenant.myservice");

        assert_eq!(cb.as_bytes(), expected.as_slice());
    }

    #[test]
    fn test_timestamp_is_big_endian_epoch_millis() {
        let created_at = Timestamp::from_epoch_millis(1).unwrap();
        let cb = CanonicalBytes::assemble(
            &sample_id(),
            &provider(),
            "",
            "",
            created_at,
            &BTreeSet::new(),
            IdentityType::Node,
            None,
        );
        let prefix_len = "tenant1.app1.default.0vespa.provider".len();
        assert_eq!(
            &cb.as_bytes()[prefix_len..prefix_len + 8],
            &[0, 0, 0, 0, 0, 0, 0, 1]
        );
    }

    #[test]
    fn test_ip_set_order_independence() {
        let created_at = Timestamp::from_epoch_millis(42).unwrap();
        let a = CanonicalBytes::assemble(
            &sample_id(),
            &provider(),
            "cfg",
            "host",
            created_at,
            &ips(&["10.0.0.2", "10.0.0.1"]),
            IdentityType::Tenant,
            None,
        );
        let b = CanonicalBytes::assemble(
            &sample_id(),
            &provider(),
            "cfg",
            "host",
            created_at,
            &ips(&["10.0.0.1", "10.0.0.2"]),
            IdentityType::Tenant,
            None,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_ip_order_is_lexicographic_not_numeric() {
        // "10.0.0.10" < "10.0.0.9" as text.
        let created_at = Timestamp::from_epoch_millis(0).unwrap();
        let cb = CanonicalBytes::assemble(
            &sample_id(),
            &provider(),
            "",
            "",
            created_at,
            &ips(&["10.0.0.9", "10.0.0.10"]),
            IdentityType::Node,
            None,
        );
        let bytes = cb.as_bytes();
        let ten = b"10.0.0.10";
        let pos_ten = bytes.windows(ten.len()).position(|w| w == ten).unwrap();
        let nine = b"10.0.0.9";
        let pos_nine = bytes.windows(nine.len()).position(|w| w == nine).unwrap();
        assert!(pos_ten < pos_nine);
    }

    #[test]
    fn test_service_identity_inclusion_changes_bytes() {
        let created_at = Timestamp::from_epoch_millis(42).unwrap();
        let excluded = CanonicalBytes::assemble(
            &sample_id(),
            &provider(),
            "cfg",
            "host",
            created_at,
            &ips(&["10.0.0.1"]),
            IdentityType::Tenant,
            None,
        );
        let included = CanonicalBytes::assemble(
            &sample_id(),
            &provider(),
            "cfg",
            "host",
            created_at,
            &ips(&["10.0.0.1"]),
            IdentityType::Tenant,
            Some(&attested()),
        );
        assert_ne!(excluded, included);
        assert_eq!(
            included.len(),
            excluded.len() + "vespa.tenant.myservice".len()
        );
    }

    #[test]
    fn test_empty_ip_set() {
        let created_at = Timestamp::from_epoch_millis(42).unwrap();
        let cb = CanonicalBytes::assemble(
            &sample_id(),
            &provider(),
            "cfg",
            "host",
            created_at,
            &BTreeSet::new(),
            IdentityType::Tenant,
            None,
        );
        assert!(!cb.is_empty());
    }

    #[test]
    fn test_no_delimiters_between_fields() {
        // cfg="ab", host="" produces the same bytes as cfg="a", host="b".
        // This boundary ambiguity is part of the deployed wire contract.
        let created_at = Timestamp::from_epoch_millis(0).unwrap();
        let assemble = |cfg: &str, host: &str| {
            CanonicalBytes::assemble(
                &sample_id(),
                &provider(),
                cfg,
                host,
                created_at,
                &BTreeSet::new(),
                IdentityType::Node,
                None,
            )
        };
        assert_eq!(assemble("ab", ""), assemble("a", "b"));
    }
}
