//! Unified error handling for homebound.
//!
//! Two distinct failure families: user-recoverable resolution failures
//! (the player is notified and returns to idle) and caller-contract
//! violations (the orchestrator's own precondition check was bypassed).
//! Nothing in this crate is fatal to the process.

use crate::player::PlayerId;
use thiserror::Error;

/// Terminal destination-resolution failures.
///
/// Both variants are user-recoverable: the player is notified and no state
/// changes (no warmup, no cooldown, no item consumed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No home location recorded and bedspawn fallback is disabled.
    #[error("no home destination")]
    NoHomeDestination,

    /// Player is already within the configured minimum distance.
    #[error("already within minimum distance of {destination}")]
    TooClose {
        /// Display name of the too-near destination.
        destination: String,
    },
}

impl ResolveError {
    /// Static code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoHomeDestination => "no_home_destination",
            Self::TooClose { .. } => "too_close",
        }
    }
}

/// Warmup registry contract violations.
///
/// These are programming errors, not user conditions: `initiate` checks
/// `is_warming_up` before registering, so seeing this means that check was
/// bypassed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WarmupError {
    /// A warmup entry already exists for this player.
    #[error("player {0} is already warming up")]
    AlreadyWarmingUp(PlayerId),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
