//! Warmup registry: per-player pending-teleport tracking.

use crate::error::WarmupError;
use crate::player::PlayerId;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::time::Duration;
use tokio::task::AbortHandle;
use tokio::time::Instant;
use tracing::debug;

/// An active warmup: the pending task's cancellation handle plus the
/// interaction-grace deadline.
#[derive(Debug)]
struct WarmupEntry {
    abort: AbortHandle,
    grace_until: Instant,
}

/// Map from player to active warmup entry.
///
/// Exactly one entry may exist per player. Both removal paths (`cancel`,
/// `complete`) go through a single atomic `DashMap::remove`, which is the
/// commit point deciding the warmup's outcome: whichever caller removes the
/// entry owns it. The abort handle is best-effort only; a timer that has
/// already begun firing learns it lost from `complete` returning false.
#[derive(Debug)]
pub struct WarmupRegistry {
    entries: DashMap<PlayerId, WarmupEntry>,
    grace: Duration,
}

impl WarmupRegistry {
    /// Create an empty registry with the given interaction grace window.
    pub fn new(grace: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            grace,
        }
    }

    /// Register a pending teleport for the player.
    ///
    /// Fails with `AlreadyWarmingUp` if an entry exists; callers must check
    /// `is_warming_up` first. The interaction grace window opens now and
    /// lapses on its own deadline, independent of the warmup's cancellation
    /// handle.
    pub fn begin(&self, player: PlayerId, abort: AbortHandle) -> Result<(), WarmupError> {
        match self.entries.entry(player) {
            Entry::Occupied(_) => Err(WarmupError::AlreadyWarmingUp(player)),
            Entry::Vacant(vacant) => {
                vacant.insert(WarmupEntry {
                    abort,
                    grace_until: Instant::now() + self.grace,
                });
                debug!(%player, "warmup registered");
                Ok(())
            }
        }
    }

    /// Whether the player has a pending teleport.
    pub fn is_warming_up(&self, player: PlayerId) -> bool {
        self.entries.contains_key(&player)
    }

    /// Whether the player is still inside the post-initiation grace window
    /// during which block-interaction cancel triggers are suppressed.
    ///
    /// The underlying input system can report a single physical click twice
    /// (once per hand); without this window the initiating click would
    /// cancel its own teleport.
    pub fn is_within_interaction_grace(&self, player: PlayerId) -> bool {
        self.entries
            .get(&player)
            .is_some_and(|entry| Instant::now() < entry.grace_until)
    }

    /// Atomically remove the player's entry and abort its pending task.
    ///
    /// Returns whether an entry was present. Safe to race against the
    /// task's own firing: if the task has already claimed the entry via
    /// `complete`, this is a no-op returning false.
    pub fn cancel(&self, player: PlayerId) -> bool {
        if let Some((_, entry)) = self.entries.remove(&player) {
            entry.abort.abort();
            debug!(%player, "warmup cancelled");
            true
        } else {
            false
        }
    }

    /// Atomically remove the player's entry without invoking the abort
    /// handle (the task calls this on itself when it fires).
    ///
    /// Returns whether the entry was still present; false means a cancel
    /// won the race and the task must not act.
    pub fn complete(&self, player: PlayerId) -> bool {
        let claimed = self.entries.remove(&player).is_some();
        if claimed {
            debug!(%player, "warmup completed");
        }
        claimed
    }
}
