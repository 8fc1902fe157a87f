//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers an identity document binds together.
//! These prevent accidental identifier confusion — you cannot pass a
//! provider's service identity where an instance id is expected.
//!
//! ## Canonical Renderings
//!
//! Each type has exactly one string rendering, and that rendering is what
//! enters the signed payload. The serde form is the same string, so a
//! document round-tripped through JSON canonicalizes to the same bytes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IdentityError;

/// Structured identifier uniquely naming an attested instance.
///
/// Canonical rendering is the dotted string
/// `<tenant>.<application>.<cluster>.<instance_index>`, e.g.
/// `tenant1.app1.default.0`. The dotted form is what participates in the
/// signed payload, so the component strings themselves must be dot-free.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceUniqueId {
    tenant: String,
    application: String,
    cluster: String,
    instance_index: u32,
}

/// Identity name of a service principal, e.g. `vespa.tenant.myservice`.
///
/// Full name is `<domain>.<name>` where the domain may itself be dotted;
/// the name is the segment after the last dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceIdentity {
    domain: String,
    name: String,
}

/// Category of the attested instance. Closed set; rendered as a short id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityType {
    /// A tenant workload node.
    Tenant,
    /// An infrastructure node.
    Node,
}

// ---------------------------------------------------------------------------
// InstanceUniqueId impls
// ---------------------------------------------------------------------------

impl InstanceUniqueId {
    /// Create an instance id from its components.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::MalformedInstanceId` if any string component
    /// is empty or contains a dot (which would make the dotted rendering
    /// ambiguous to re-parse).
    pub fn new(
        tenant: impl Into<String>,
        application: impl Into<String>,
        cluster: impl Into<String>,
        instance_index: u32,
    ) -> Result<Self, IdentityError> {
        let tenant = tenant.into();
        let application = application.into();
        let cluster = cluster.into();
        for (label, value) in [
            ("tenant", &tenant),
            ("application", &application),
            ("cluster", &cluster),
        ] {
            if value.is_empty() {
                return Err(IdentityError::MalformedInstanceId {
                    value: value.clone(),
                    reason: format!("{label} component is empty"),
                });
            }
            if value.contains('.') {
                return Err(IdentityError::MalformedInstanceId {
                    value: value.clone(),
                    reason: format!("{label} component contains '.'"),
                });
            }
        }
        Ok(Self { tenant, application, cluster, instance_index })
    }

    /// Parse the canonical dotted rendering.
    ///
    /// Exactly four dot-separated components; the last must be a
    /// non-negative integer.
    pub fn from_dotted_string(s: &str) -> Result<Self, IdentityError> {
        let parts: Vec<&str> = s.split('.').collect();
        let [tenant, application, cluster, index] = parts.as_slice() else {
            return Err(IdentityError::MalformedInstanceId {
                value: s.to_string(),
                reason: format!("expected 4 components, got {}", parts.len()),
            });
        };
        let instance_index: u32 = index.parse().map_err(|_| {
            IdentityError::MalformedInstanceId {
                value: s.to_string(),
                reason: format!("instance index {index:?} is not an integer"),
            }
        })?;
        Self::new(*tenant, *application, *cluster, instance_index)
    }

    /// Render the canonical dotted string. This rendering is the exact
    /// form that enters the signed payload.
    pub fn as_dotted_string(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.tenant, self.application, self.cluster, self.instance_index
        )
    }

    /// Tenant component.
    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    /// Application component.
    pub fn application(&self) -> &str {
        &self.application
    }

    /// Cluster component.
    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    /// Instance index within the cluster.
    pub fn instance_index(&self) -> u32 {
        self.instance_index
    }
}

impl std::fmt::Display for InstanceUniqueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_dotted_string())
    }
}

impl Serialize for InstanceUniqueId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_dotted_string())
    }
}

impl<'de> Deserialize<'de> for InstanceUniqueId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_dotted_string(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// ServiceIdentity impls
// ---------------------------------------------------------------------------

impl ServiceIdentity {
    /// Create a service identity from a domain and a service name.
    ///
    /// The name must be dot-free; the domain may be dotted.
    pub fn new(
        domain: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        let domain = domain.into();
        let name = name.into();
        if domain.is_empty() || name.is_empty() || name.contains('.') {
            return Err(IdentityError::MalformedServiceIdentity(format!(
                "{domain}.{name}"
            )));
        }
        Ok(Self { domain, name })
    }

    /// Parse a full name, splitting at the last dot.
    pub fn from_full_name(s: &str) -> Result<Self, IdentityError> {
        let (domain, name) = s
            .rsplit_once('.')
            .ok_or_else(|| IdentityError::MalformedServiceIdentity(s.to_string()))?;
        Self::new(domain, name)
    }

    /// Render the full name `<domain>.<name>`. This rendering is the exact
    /// form that enters the signed payload.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.domain, self.name)
    }

    /// Domain component (may itself be dotted).
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Service name component (after the last dot).
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for ServiceIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl Serialize for ServiceIdentity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.full_name())
    }
}

impl<'de> Deserialize<'de> for ServiceIdentity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_full_name(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// IdentityType impls
// ---------------------------------------------------------------------------

impl IdentityType {
    /// The short id string. This rendering is the exact form that enters
    /// the signed payload.
    pub fn id(&self) -> &'static str {
        match self {
            IdentityType::Tenant => "tenant",
            IdentityType::Node => "node",
        }
    }

    /// Parse a short id string.
    pub fn from_id(id: &str) -> Result<Self, IdentityError> {
        match id {
            "tenant" => Ok(IdentityType::Tenant),
            "node" => Ok(IdentityType::Node),
            other => Err(IdentityError::UnknownIdentityType(other.to_string())),
        }
    }
}

impl std::fmt::Display for IdentityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for IdentityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for IdentityType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_id(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- InstanceUniqueId ----

    #[test]
    fn test_instance_id_dotted_roundtrip() {
        let id = InstanceUniqueId::new("tenant1", "app1", "default", 0).unwrap();
        assert_eq!(id.as_dotted_string(), "tenant1.app1.default.0");
        let parsed = InstanceUniqueId::from_dotted_string("tenant1.app1.default.0").unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_instance_id_accessors() {
        let id = InstanceUniqueId::new("t", "a", "c", 7).unwrap();
        assert_eq!(id.tenant(), "t");
        assert_eq!(id.application(), "a");
        assert_eq!(id.cluster(), "c");
        assert_eq!(id.instance_index(), 7);
    }

    #[test]
    fn test_instance_id_rejects_wrong_component_count() {
        assert!(InstanceUniqueId::from_dotted_string("a.b.c").is_err());
        assert!(InstanceUniqueId::from_dotted_string("a.b.c.d.0").is_err());
        assert!(InstanceUniqueId::from_dotted_string("").is_err());
    }

    #[test]
    fn test_instance_id_rejects_non_numeric_index() {
        assert!(InstanceUniqueId::from_dotted_string("a.b.c.x").is_err());
        assert!(InstanceUniqueId::from_dotted_string("a.b.c.-1").is_err());
    }

    #[test]
    fn test_instance_id_rejects_empty_or_dotted_components() {
        assert!(InstanceUniqueId::new("", "app", "default", 0).is_err());
        assert!(InstanceUniqueId::new("te.nant", "app", "default", 0).is_err());
        assert!(InstanceUniqueId::from_dotted_string("a..c.0").is_err());
    }

    #[test]
    fn test_instance_id_serde_as_dotted_string() {
        let id = InstanceUniqueId::new("tenant1", "app1", "default", 3).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""tenant1.app1.default.3""#);
        let back: InstanceUniqueId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    // ---- ServiceIdentity ----

    #[test]
    fn test_service_identity_full_name() {
        let si = ServiceIdentity::new("vespa.tenant", "myservice").unwrap();
        assert_eq!(si.full_name(), "vespa.tenant.myservice");
        assert_eq!(si.domain(), "vespa.tenant");
        assert_eq!(si.name(), "myservice");
    }

    #[test]
    fn test_service_identity_parse_splits_at_last_dot() {
        let si = ServiceIdentity::from_full_name("vespa.tenant.myservice").unwrap();
        assert_eq!(si.domain(), "vespa.tenant");
        assert_eq!(si.name(), "myservice");
    }

    #[test]
    fn test_service_identity_rejects_missing_separator() {
        assert!(ServiceIdentity::from_full_name("nodomain").is_err());
        assert!(ServiceIdentity::from_full_name("").is_err());
        assert!(ServiceIdentity::from_full_name("trailing.").is_err());
        assert!(ServiceIdentity::from_full_name(".leading").is_err());
    }

    #[test]
    fn test_service_identity_serde_as_full_name() {
        let si = ServiceIdentity::new("vespa", "provider").unwrap();
        let json = serde_json::to_string(&si).unwrap();
        assert_eq!(json, r#""vespa.provider""#);
        let back: ServiceIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(si, back);
    }

    // ---- IdentityType ----

    #[test]
    fn test_identity_type_ids() {
        assert_eq!(IdentityType::Tenant.id(), "tenant");
        assert_eq!(IdentityType::Node.id(), "node");
        assert_eq!(IdentityType::from_id("tenant").unwrap(), IdentityType::Tenant);
        assert_eq!(IdentityType::from_id("node").unwrap(), IdentityType::Node);
    }

    #[test]
    fn test_identity_type_rejects_unknown_id() {
        assert!(IdentityType::from_id("host").is_err());
        assert!(IdentityType::from_id("Tenant").is_err());
        assert!(IdentityType::from_id("").is_err());
    }

    #[test]
    fn test_identity_type_serde() {
        let json = serde_json::to_string(&IdentityType::Node).unwrap();
        assert_eq!(json, r#""node""#);
        let back: IdentityType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, IdentityType::Node);
    }
}
