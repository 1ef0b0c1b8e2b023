//! # Engine configuration
use std::time::Duration;

/// Default value treated as infinite, for bounds and right-hand sides.
pub const DEFAULT_INFINITY: f64 = 1e30;

/// How much the engine reports about its work.
///
/// Levels follow lp_solve; only `Full` makes the engine trace every pivot.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub enum Verbosity {
    Neutral,
    #[default]
    Critical,
    Severe,
    Important,
    Normal,
    Detailed,
    Full,
}

impl Verbosity {
    /// Numeric level.
    pub fn level(self) -> u32 {
        self as u32
    }
}

/// Configuration options for the simplex engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Values at most this far from zero are treated as zero while pivoting.
    pub epsilon: f64,
    /// Largest total violation of the constraints still accepted as feasible.
    pub feasibility_tolerance: f64,
    /// Bounds and right-hand sides with at least this magnitude are infinite.
    pub infinity: f64,
    /// Wall clock time a solve may take. `None` means no limit.
    pub time_limit: Option<Duration>,
    #[allow(missing_docs)]
    pub verbosity: Verbosity,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-9,
            feasibility_tolerance: 1e-7,
            infinity: DEFAULT_INFINITY,
            time_limit: None,
            verbosity: Verbosity::default(),
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pivot tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the feasibility tolerance.
    pub fn with_feasibility_tolerance(mut self, tolerance: f64) -> Self {
        self.feasibility_tolerance = tolerance;
        self
    }

    /// Set the value treated as infinite.
    pub fn with_infinity(mut self, infinity: f64) -> Self {
        self.infinity = infinity;
        self
    }

    /// Set the time limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Set the verbosity level.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use crate::backend::config::{EngineConfig, Verbosity, DEFAULT_INFINITY};

    #[test]
    fn defaults() {
        let config = EngineConfig::new();
        assert_eq!(config.infinity, DEFAULT_INFINITY);
        assert_eq!(config.time_limit, None);
        assert_eq!(config.verbosity, Verbosity::Critical);
    }

    #[test]
    fn builder() {
        let config = EngineConfig::new()
            .with_epsilon(1e-7)
            .with_infinity(1e20)
            .with_time_limit(Duration::from_secs(2))
            .with_verbosity(Verbosity::Full);

        assert_eq!(config.epsilon, 1e-7);
        assert_eq!(config.infinity, 1e20);
        assert_eq!(config.time_limit, Some(Duration::from_secs(2)));
        assert_eq!(config.verbosity.level(), 6);
        assert!(config.verbosity > Verbosity::Normal);
    }
}
