//! Cooldown registry: per-player re-trigger suppression.

use crate::player::PlayerId;
use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Map from player to cooldown-expiry instant.
///
/// The stored instant is the single source of truth: "is cooling down" is
/// computed lazily against the clock, with no companion removal timer to
/// fall out of sync with the map. Expired entries are dropped
/// opportunistically on the next read of that player.
#[derive(Debug, Default)]
pub struct CooldownRegistry {
    entries: DashMap<PlayerId, Instant>,
}

impl CooldownRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Record a cooldown expiring `duration` from now.
    ///
    /// Overwrites any existing entry (idempotent by replacement).
    pub fn start(&self, player: PlayerId, duration: Duration) {
        self.entries.insert(player, Instant::now() + duration);
        debug!(%player, ?duration, "cooldown started");
    }

    /// Time remaining on the player's cooldown, zero when absent or expired.
    pub fn time_remaining(&self, player: PlayerId) -> Duration {
        let Some(expiry) = self.entries.get(&player).map(|e| *e.value()) else {
            return Duration::ZERO;
        };
        let remaining = expiry.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            // Drop the stale entry, unless a newer cooldown replaced it
            // between our read and this removal.
            self.entries.remove_if(&player, |_, stored| *stored == expiry);
        }
        remaining
    }

    /// Whether the player is currently suppressed.
    ///
    /// The expiry instant itself counts as not cooling down.
    pub fn is_cooling_down(&self, player: PlayerId) -> bool {
        !self.time_remaining(player).is_zero()
    }
}
