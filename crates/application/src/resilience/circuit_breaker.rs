use corral_domain::config::CircuitConfig;
use corral_domain::DomainError;
use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Circuit states for one protected call path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    /// Normal operation, outcomes recorded in the sliding window
    Closed = 0,
    /// Failing fast without touching the downstream dependency
    Open = 1,
    /// Probing recovery with a bounded number of trial calls
    HalfOpen = 2,
}

impl From<u8> for CircuitState {
    fn from(value: u8) -> Self {
        match value {
            0 => CircuitState::Closed,
            2 => CircuitState::HalfOpen,
            _ => CircuitState::Open,
        }
    }
}

impl fmt::Display for CircuitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitState::Closed => write!(f, "closed"),
            CircuitState::Open => write!(f, "open"),
            CircuitState::HalfOpen => write!(f, "half-open"),
        }
    }
}

/// Errors produced by a protected call. `Open` and `Timeout` are the
/// breaker's own; `Inner` carries a genuine downstream result through
/// unchanged so callers can always tell "circuit protecting you" from
/// "downstream actually failed".
#[derive(Debug, thiserror::Error)]
pub enum CircuitBreakerError<E> {
    #[error("Circuit breaker '{name}' is open")]
    Open { name: String, retry_after: Duration },

    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Operation failed: {0}")]
    Inner(E),
}

impl From<CircuitBreakerError<DomainError>> for DomainError {
    fn from(e: CircuitBreakerError<DomainError>) -> Self {
        match e {
            CircuitBreakerError::Open { retry_after, .. } => DomainError::CircuitOpen {
                retry_after_secs: retry_after.as_secs(),
            },
            CircuitBreakerError::Timeout(_) => DomainError::DownstreamTimeout,
            CircuitBreakerError::Inner(e) => e,
        }
    }
}

#[derive(Default)]
struct BreakerWindow {
    /// (instant, failed) pairs inside the sliding window, oldest first.
    outcomes: VecDeque<(Instant, bool)>,
    opened_at: Option<Instant>,
    half_open_inflight: u32,
    half_open_successes: u32,
}

impl BreakerWindow {
    fn prune(&mut self, window: Duration, now: Instant) {
        while let Some(&(at, _)) = self.outcomes.front() {
            if now.duration_since(at) > window {
                self.outcomes.pop_front();
            } else {
                break;
            }
        }
    }

    fn failure_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        let failures = self.outcomes.iter().filter(|(_, failed)| *failed).count();
        failures as f64 / self.outcomes.len() as f64
    }
}

/// What kind of pass a call was granted. Trial permits carry half-open
/// accounting obligations that must be settled exactly once.
#[derive(Clone, Copy)]
enum Permit {
    Closed,
    Trial,
}

/// Point-in-time view for health reporting.
#[derive(Debug, Clone)]
pub struct BreakerSnapshot {
    pub state: CircuitState,
    pub window_calls: usize,
    pub window_failures: usize,
}

/// Circuit breaker with a sliding failure-rate window.
///
/// State transitions happen under one mutex, so concurrent callers observing
/// failures cannot double-trip the circuit; the state byte is additionally
/// kept in an atomic for cheap reads on the hot path.
pub struct CircuitBreaker {
    name: String,
    config: CircuitConfig,
    state: AtomicU8,
    window: Mutex<BreakerWindow>,
}

impl CircuitBreaker {
    pub fn new(name: impl Into<String>, config: CircuitConfig) -> Self {
        let name = name.into();
        info!(
            breaker = %name,
            failure_rate_threshold = config.failure_rate_threshold,
            cooldown_secs = config.cooldown_secs,
            half_open_trials = config.half_open_trials,
            call_timeout_ms = config.call_timeout_ms,
            "Circuit breaker initialized"
        );
        Self {
            name,
            config,
            state: AtomicU8::new(CircuitState::Closed as u8),
            window: Mutex::new(BreakerWindow::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> CircuitState {
        CircuitState::from(self.state.load(Ordering::Acquire))
    }

    /// Executes `op` under circuit protection, counting every error as a
    /// downstream failure.
    pub async fn call<F, Fut, T, E>(&self, op: F) -> Result<T, CircuitBreakerError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.call_with(op, |_| true).await
    }

    /// Executes `op` under circuit protection with a per-call timeout.
    ///
    /// `is_failure` classifies errors: ones it rejects (e.g. an optimistic
    /// version conflict) pass through without touching the failure window,
    /// since the dependency answered and is therefore healthy.
    pub async fn call_with<F, Fut, T, E>(
        &self,
        op: F,
        is_failure: impl Fn(&E) -> bool,
    ) -> Result<T, CircuitBreakerError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let permit = self.acquire()?;

        let timeout = Duration::from_millis(self.config.call_timeout_ms);
        match tokio::time::timeout(timeout, op()).await {
            Err(_elapsed) => {
                self.record_failure(permit);
                Err(CircuitBreakerError::Timeout(timeout))
            }
            Ok(Ok(value)) => {
                self.record_success(permit);
                Ok(value)
            }
            Ok(Err(e)) => {
                if is_failure(&e) {
                    self.record_failure(permit);
                } else {
                    self.settle_ignored(permit);
                }
                Err(CircuitBreakerError::Inner(e))
            }
        }
    }

    /// Remaining cool-down, if the circuit is open.
    pub fn retry_after(&self) -> Option<Duration> {
        let window = self.window.lock().expect("breaker state poisoned");
        let opened_at = window.opened_at?;
        let cooldown = Duration::from_secs(self.config.cooldown_secs);
        Some(cooldown.saturating_sub(opened_at.elapsed()))
    }

    pub fn snapshot(&self) -> BreakerSnapshot {
        let window = self.window.lock().expect("breaker state poisoned");
        BreakerSnapshot {
            state: self.state(),
            window_calls: window.outcomes.len(),
            window_failures: window.outcomes.iter().filter(|(_, f)| *f).count(),
        }
    }

    fn acquire<E>(&self) -> Result<Permit, CircuitBreakerError<E>> {
        let mut window = self.window.lock().expect("breaker state poisoned");
        match self.state() {
            CircuitState::Closed => Ok(Permit::Closed),
            CircuitState::Open => {
                let cooldown = Duration::from_secs(self.config.cooldown_secs);
                let elapsed = window.opened_at.map(|at| at.elapsed());
                match elapsed {
                    Some(elapsed) if elapsed >= cooldown => {
                        self.transition_to_half_open(&mut window);
                        window.half_open_inflight = 1;
                        Ok(Permit::Trial)
                    }
                    Some(elapsed) => Err(CircuitBreakerError::Open {
                        name: self.name.clone(),
                        retry_after: cooldown - elapsed,
                    }),
                    None => {
                        // Open without a timestamp should not happen; fail
                        // towards availability
                        warn!(breaker = %self.name, "Circuit open without opened_at, allowing call");
                        Ok(Permit::Closed)
                    }
                }
            }
            CircuitState::HalfOpen => {
                if window.half_open_inflight < self.config.half_open_trials {
                    window.half_open_inflight += 1;
                    Ok(Permit::Trial)
                } else {
                    Err(CircuitBreakerError::Open {
                        name: self.name.clone(),
                        retry_after: Duration::ZERO,
                    })
                }
            }
        }
    }

    fn record_success(&self, permit: Permit) {
        let mut window = self.window.lock().expect("breaker state poisoned");
        match permit {
            Permit::Trial => {
                window.half_open_inflight = window.half_open_inflight.saturating_sub(1);
                window.half_open_successes += 1;
                debug!(
                    breaker = %self.name,
                    successes = window.half_open_successes,
                    "Trial call succeeded"
                );
                if window.half_open_successes >= self.config.half_open_trials {
                    self.transition_to_closed(&mut window);
                }
            }
            Permit::Closed => {
                let now = Instant::now();
                window.outcomes.push_back((now, false));
                window.prune(Duration::from_secs(self.config.window_secs), now);
            }
        }
    }

    fn record_failure(&self, permit: Permit) {
        let mut window = self.window.lock().expect("breaker state poisoned");
        match permit {
            Permit::Trial => {
                // Any trial failure reopens immediately and restarts the
                // cool-down
                self.transition_to_open(&mut window);
            }
            Permit::Closed => {
                let now = Instant::now();
                window.outcomes.push_back((now, true));
                window.prune(Duration::from_secs(self.config.window_secs), now);

                if self.state() == CircuitState::Closed
                    && window.outcomes.len() >= self.config.min_calls as usize
                    && window.failure_rate() >= self.config.failure_rate_threshold
                {
                    self.transition_to_open(&mut window);
                }
            }
        }
    }

    /// A rejected-but-not-counted error still releases its trial slot.
    fn settle_ignored(&self, permit: Permit) {
        if let Permit::Trial = permit {
            let mut window = self.window.lock().expect("breaker state poisoned");
            window.half_open_inflight = window.half_open_inflight.saturating_sub(1);
        }
    }

    fn transition_to_open(&self, window: &mut BreakerWindow) {
        self.state.store(CircuitState::Open as u8, Ordering::Release);
        window.opened_at = Some(Instant::now());
        window.half_open_inflight = 0;
        window.half_open_successes = 0;
        error!(
            breaker = %self.name,
            window_calls = window.outcomes.len(),
            failure_rate = window.failure_rate(),
            cooldown_secs = self.config.cooldown_secs,
            "Circuit breaker opened (failing fast)"
        );
        window.outcomes.clear();
    }

    fn transition_to_half_open(&self, window: &mut BreakerWindow) {
        self.state
            .store(CircuitState::HalfOpen as u8, Ordering::Release);
        window.half_open_inflight = 0;
        window.half_open_successes = 0;
        info!(
            breaker = %self.name,
            trials = self.config.half_open_trials,
            "Circuit breaker half-open (testing recovery)"
        );
    }

    fn transition_to_closed(&self, window: &mut BreakerWindow) {
        self.state
            .store(CircuitState::Closed as u8, Ordering::Release);
        window.opened_at = None;
        window.half_open_inflight = 0;
        window.half_open_successes = 0;
        window.outcomes.clear();
        info!(breaker = %self.name, "Circuit breaker closed (recovered)");
    }
}
