// License: MIT

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration was rejected at construction time.
    ///
    /// Construction is the only fallible operation: once a tracker exists,
    /// measurement is best-effort and silent.
    InvalidConfig(ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The selector list is empty; nothing could ever be tracked.
    NoSelectors,

    /// A zero poll interval would spin the scheduler.
    ZeroPollInterval,

    /// A zero inactivity threshold would make every tick inactive.
    ZeroThreshold,

    /// The active-zone fraction must lie in `(0, 1]`.
    ActiveZoneOutOfRange,
}

// ---------------- Display ----------------

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoSelectors =>
                write!(f, "selector list is empty"),
            ConfigError::ZeroPollInterval =>
                write!(f, "poll interval must be non-zero"),
            ConfigError::ZeroThreshold =>
                write!(f, "inactivity thresholds must be non-zero"),
            ConfigError::ActiveZoneOutOfRange =>
                write!(f, "active zone fraction must be in (0, 1]"),
        }
    }
}

impl std::error::Error for Error {}
