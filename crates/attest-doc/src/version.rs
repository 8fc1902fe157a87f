//! # Version Policy — Backward-Compatible Field Selection
//!
//! Older issuers and verifiers predate the attested instance's own service
//! identity being part of the signed payload. The document's integer
//! version tag selects the field set, letting one verification code path
//! validate both legacy and current documents across rolling upgrades.
//!
//! The version tag itself is not separately signed; it participates only
//! by selecting the field set. Tampering with the tag alone changes which
//! payload the verifier recomputes and therefore fails verification — but
//! the dependency on the document's own (unsigned) tag is deliberate and
//! must stay exactly as deployed verifiers expect.

/// Document version at which the attested instance's own service identity
/// joined the signed payload. Documents below this version were signed
/// without it.
pub const SERVICE_IDENTITY_VERSION: u32 = 1;

/// Version stamped on newly generated documents. Generation always runs
/// at the current version and always signs the service identity.
pub const DEFAULT_DOCUMENT_VERSION: u32 = SERVICE_IDENTITY_VERSION;

/// Whether a document of the given version includes the attested service
/// identity in its signed payload.
pub fn signs_service_identity(document_version: u32) -> bool {
    document_version >= SERVICE_IDENTITY_VERSION
}
