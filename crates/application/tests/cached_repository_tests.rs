use corral_application::{CircuitBreaker, CircuitState};
use corral_domain::{Animal, DomainError};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

mod helpers;
use helpers::{
    make_animal, test_cache, test_circuit_config, test_repository, FailureMode,
    MockDocumentStore,
};

fn fresh_ttl() -> Duration {
    Duration::from_secs(60)
}

// ============================================================================
// Tests: cache-first reads
// ============================================================================

#[tokio::test]
async fn test_second_fetch_is_served_from_cache() {
    // Arrange
    let store = Arc::new(
        MockDocumentStore::with_documents(vec![make_animal("42", "Rex")]).await,
    );
    let breaker = Arc::new(CircuitBreaker::new("store", test_circuit_config()));
    let repo = test_repository(store.clone(), test_cache(fresh_ttl()), breaker, false);

    // Act
    let first = repo.fetch("42").await.unwrap();
    let second = repo.fetch("42").await.unwrap();

    // Assert - one store round-trip, the second read never left the cache
    assert_eq!(first.title, "Rex");
    assert_eq!(second.title, "Rex");
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn test_absence_is_not_cached() {
    // Arrange
    let store = Arc::new(MockDocumentStore::<Animal>::new());
    let breaker = Arc::new(CircuitBreaker::new("store", test_circuit_config()));
    let repo = test_repository(store.clone(), test_cache(fresh_ttl()), breaker, false);

    // Act
    let first = repo.fetch("missing").await;
    let second = repo.fetch("missing").await;

    // Assert - both misses went to the store
    assert!(matches!(first, Err(DomainError::NotFound(_))));
    assert!(matches!(second, Err(DomainError::NotFound(_))));
    assert_eq!(store.calls(), 2);
}

// ============================================================================
// Tests: write-path invalidation
// ============================================================================

#[tokio::test]
async fn test_save_invalidates_cached_entry() {
    // Arrange - prime the cache with the old title
    let store = Arc::new(
        MockDocumentStore::with_documents(vec![make_animal("42", "Rex")]).await,
    );
    let breaker = Arc::new(CircuitBreaker::new("store", test_circuit_config()));
    let repo = test_repository(store.clone(), test_cache(fresh_ttl()), breaker, false);

    let mut animal = repo.fetch("42").await.unwrap();

    // Act
    animal.title = "Max".to_string();
    let saved = repo.save(&animal).await.unwrap();
    let refetched = repo.fetch("42").await.unwrap();

    // Assert - no stale read after the write
    assert_eq!(saved.version, 2);
    assert_eq!(refetched.title, "Max");
    assert_eq!(refetched.version, 2);
}

#[tokio::test]
async fn test_delete_invalidates_cached_entry() {
    // Arrange
    let store = Arc::new(
        MockDocumentStore::with_documents(vec![make_animal("42", "Rex")]).await,
    );
    let breaker = Arc::new(CircuitBreaker::new("store", test_circuit_config()));
    let repo = test_repository(store.clone(), test_cache(fresh_ttl()), breaker, false);

    repo.fetch("42").await.unwrap();

    // Act
    repo.delete("42").await.unwrap();

    // Assert - the cached copy is gone along with the document
    assert!(matches!(
        repo.fetch("42").await,
        Err(DomainError::NotFound(_))
    ));
    assert_eq!(store.count().await, 0);
}

#[tokio::test]
async fn test_failed_save_leaves_cache_intact() {
    // Arrange
    let store = Arc::new(
        MockDocumentStore::with_documents(vec![make_animal("42", "Rex")]).await,
    );
    let breaker = Arc::new(CircuitBreaker::new("store", test_circuit_config()));
    let repo = test_repository(store.clone(), test_cache(fresh_ttl()), breaker, false);

    let mut animal = repo.fetch("42").await.unwrap();
    let calls_after_fetch = store.calls();

    // Act - stale version loses the optimistic check
    animal.version = 0;
    animal.title = "Max".to_string();
    let result = repo.save(&animal).await;

    // Assert - conflict reported, cached copy still serves reads
    assert!(matches!(result, Err(DomainError::VersionMismatch)));
    let cached = repo.fetch("42").await.unwrap();
    assert_eq!(cached.title, "Rex");
    assert_eq!(store.calls(), calls_after_fetch + 1);
}

// ============================================================================
// Tests: circuit breaker integration
// ============================================================================

#[tokio::test]
async fn test_repeated_failures_trip_breaker_and_fail_fast() {
    // Arrange
    let store = Arc::new(MockDocumentStore::<Animal>::new());
    store.set_failure_mode(FailureMode::Failure).await;
    let breaker = Arc::new(CircuitBreaker::new("store", test_circuit_config()));
    let repo = test_repository(
        store.clone(),
        test_cache(fresh_ttl()),
        breaker.clone(),
        false,
    );

    // Act - min_calls is 2, so the second failure trips the circuit
    let _ = repo.fetch("a").await;
    let _ = repo.fetch("b").await;
    assert_eq!(breaker.state(), CircuitState::Open);

    let calls_before = store.calls();
    let result = repo.fetch("c").await;

    // Assert - fast-fail without a store round-trip
    assert!(matches!(result, Err(DomainError::CircuitOpen { .. })));
    assert_eq!(store.calls(), calls_before);
}

#[tokio::test]
async fn test_version_conflicts_do_not_trip_breaker() {
    // Arrange
    let store = Arc::new(
        MockDocumentStore::with_documents(vec![make_animal("42", "Rex")]).await,
    );
    let breaker = Arc::new(CircuitBreaker::new("store", test_circuit_config()));
    let repo = test_repository(
        store.clone(),
        test_cache(fresh_ttl()),
        breaker.clone(),
        false,
    );

    let mut stale = make_animal("42", "Rex");
    stale.version = 99;

    // Act - the store answers every time, just with a conflict
    for _ in 0..5 {
        let result = repo.save(&stale).await;
        assert!(matches!(result, Err(DomainError::VersionMismatch)));
    }

    // Assert
    assert_eq!(breaker.state(), CircuitState::Closed);
}

#[tokio::test]
async fn test_timeouts_count_as_failures() {
    // Arrange
    let store = Arc::new(MockDocumentStore::<Animal>::new());
    store.set_failure_mode(FailureMode::Timeout).await;
    let breaker = Arc::new(CircuitBreaker::new("store", test_circuit_config()));
    let repo = test_repository(
        store.clone(),
        test_cache(fresh_ttl()),
        breaker.clone(),
        false,
    );

    // Act
    let first = repo.fetch("a").await;
    let _ = repo.fetch("b").await;

    // Assert
    assert!(matches!(first, Err(DomainError::DownstreamTimeout)));
    assert_eq!(breaker.state(), CircuitState::Open);
}

// ============================================================================
// Tests: stale-read fallback under an open circuit
// ============================================================================

#[tokio::test]
async fn test_open_circuit_serves_stale_entry_when_enabled() {
    // Arrange - short TTL so the cached copy expires quickly
    let store = Arc::new(
        MockDocumentStore::with_documents(vec![make_animal("42", "Rex")]).await,
    );
    let breaker = Arc::new(CircuitBreaker::new("store", test_circuit_config()));
    let repo = test_repository(
        store.clone(),
        test_cache(Duration::from_millis(20)),
        breaker.clone(),
        true,
    );

    repo.fetch("42").await.unwrap();
    sleep(Duration::from_millis(50)).await;

    // Trip the circuit while the entry sits expired in the cache.
    store.set_failure_mode(FailureMode::Failure).await;
    let _ = repo.fetch("42").await;
    let _ = repo.fetch("42").await;
    assert_eq!(breaker.state(), CircuitState::Open);

    // Act
    let result = repo.fetch("42").await;

    // Assert - degraded read instead of an error
    assert_eq!(result.unwrap().title, "Rex");
}

#[tokio::test]
async fn test_open_circuit_without_fallback_reports_retry_after() {
    // Arrange
    let store = Arc::new(MockDocumentStore::<Animal>::new());
    store.set_failure_mode(FailureMode::Failure).await;
    let breaker = Arc::new(CircuitBreaker::new("store", test_circuit_config()));
    let repo = test_repository(store.clone(), test_cache(fresh_ttl()), breaker, false);

    let _ = repo.fetch("a").await;
    let _ = repo.fetch("b").await;

    // Act
    let result = repo.fetch("c").await;

    // Assert
    match result {
        Err(DomainError::CircuitOpen { retry_after_secs }) => {
            assert!(retry_after_secs <= 60);
        }
        other => panic!("expected CircuitOpen, got {other:?}"),
    }
}
