use axum::http::{header, HeaderMap, HeaderValue};
use corral_domain::DomainError;

pub const IDEMPOTENCY_KEY: &str = "idempotency-key";

/// Required Idempotency-Key header for creation endpoints.
pub fn idempotency_key(headers: &HeaderMap) -> Result<&str, DomainError> {
    headers
        .get(IDEMPOTENCY_KEY)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            DomainError::Validation("Idempotency-Key header is required".to_string())
        })
}

/// Optional If-Match precondition. A header that is not valid ASCII is
/// treated the same as a malformed version string downstream.
pub fn if_match(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::IF_MATCH).and_then(|v| v.to_str().ok())
}

/// Document version rendered as a strong ETag.
pub fn etag(version: u64) -> HeaderValue {
    HeaderValue::from_str(&format!("\"{version}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("\"0\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_idempotency_key_is_a_validation_error() {
        let headers = HeaderMap::new();
        assert!(matches!(
            idempotency_key(&headers),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn etag_is_quoted() {
        assert_eq!(etag(3), HeaderValue::from_static("\"3\""));
    }
}
