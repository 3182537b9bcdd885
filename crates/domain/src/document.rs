use crate::errors::DomainError;
use chrono::{DateTime, Utc};

/// Contract every persisted document satisfies. The repository facade and the
/// document store are generic over this trait, so adding an entity type means
/// implementing it plus a collection name.
pub trait Document: Clone + Send + Sync + 'static {
    /// Logical collection the document lives in ("animals", "rooms", ...).
    /// Also the cache-key namespace.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    /// Optimistic-concurrency version. 0 means never persisted.
    fn version(&self) -> u64;

    fn set_version(&mut self, version: u64);

    fn touch(&mut self, now: DateTime<Utc>);
}

/// Validates an `If-Match` header value (quoted or bare version number)
/// against the current entity version.
///
/// A missing header skips the check, matching the original API contract:
/// clients opt into optimistic concurrency by sending the ETag back.
pub fn validate_if_match(current_version: u64, if_match: Option<&str>) -> Result<(), DomainError> {
    let Some(raw) = if_match else {
        return Ok(());
    };

    let client_version: u64 = raw
        .trim()
        .trim_matches('"')
        .parse()
        .map_err(|_| DomainError::InvalidPrecondition(format!("Invalid ETag format: {raw}")))?;

    if client_version != current_version {
        return Err(DomainError::VersionMismatch);
    }

    Ok(())
}
