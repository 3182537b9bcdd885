use serde::{Deserialize, Serialize};

/// Circuit breaker thresholds for the document store call path.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CircuitConfig {
    /// Failure rate (0.0..=1.0) over the sliding window that trips the
    /// circuit (default: 0.5)
    #[serde(default = "default_failure_rate_threshold")]
    pub failure_rate_threshold: f64,

    /// Sliding window length in seconds (default: 60)
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    /// Minimum calls in the window before the rate is evaluated (default: 5)
    #[serde(default = "default_min_calls")]
    pub min_calls: u32,

    /// Cool-down before probing recovery, in seconds (default: 30)
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: u64,

    /// Trial calls permitted in half-open state (default: 3)
    #[serde(default = "default_half_open_trials")]
    pub half_open_trials: u32,

    /// Per-call timeout in milliseconds; a timeout counts as a failure
    /// (default: 2000)
    #[serde(default = "default_call_timeout_ms")]
    pub call_timeout_ms: u64,
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            failure_rate_threshold: default_failure_rate_threshold(),
            window_secs: default_window_secs(),
            min_calls: default_min_calls(),
            cooldown_secs: default_cooldown_secs(),
            half_open_trials: default_half_open_trials(),
            call_timeout_ms: default_call_timeout_ms(),
        }
    }
}

fn default_failure_rate_threshold() -> f64 {
    0.5
}

fn default_window_secs() -> u64 {
    60
}

fn default_min_calls() -> u32 {
    5
}

fn default_cooldown_secs() -> u64 {
    30
}

fn default_half_open_trials() -> u32 {
    3
}

fn default_call_timeout_ms() -> u64 {
    2000
}
