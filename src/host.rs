//! Host collaborator traits.
//!
//! The engine has no wire protocol or file format of its own; its boundary
//! is these three traits plus the configuration surface. The handler holds
//! them as injected `Arc<dyn ...>` references, never through ambient global
//! state. All calls are fire-and-forget or synchronous reads; nothing here
//! may block or fail the calling operation.

use crate::item::ItemStack;
use crate::player::PlayerId;
use crate::world::{Location, WorldInfo};
use std::time::Duration;

/// Why a pending teleport was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Player took damage during warmup.
    Damage,
    /// Player changed position during warmup.
    Movement,
    /// Player clicked a block during warmup, outside the grace window.
    Interaction,
    /// Player disconnected.
    Quit,
    /// Player's entity was removed (death).
    Death,
}

impl CancelReason {
    /// Static code string for log labeling.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Damage => "damage",
            Self::Movement => "movement",
            Self::Interaction => "interaction",
            Self::Quit => "quit",
            Self::Death => "death",
        }
    }
}

/// Player-facing message kinds, with their parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Re-trigger attempted while cooling down.
    Cooldown {
        /// Time left until the cooldown expires.
        remaining: Duration,
    },
    /// Warmup started; the teleport will execute after `duration`.
    Warmup {
        /// Destination display name.
        destination: String,
        /// Configured warmup duration.
        duration: Duration,
    },
    /// No home location and bedspawn fallback is disabled.
    NoHome,
    /// Already within minimum distance of the destination.
    TooClose {
        /// Destination display name.
        destination: String,
    },
    /// No matching item remained in inventory at completion.
    NoItem,
    /// Teleport completed.
    Success {
        /// Destination display name.
        destination: String,
    },
    /// Warmup was interrupted.
    Cancelled(CancelReason),
}

/// Sound effect kinds the engine can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundId {
    WarmupBegin,
    Cancelled,
    Denied,
    Departure,
    Arrival,
}

/// Message and sound delivery. Fire-and-forget; delivery to a departed
/// player is a silent no-op.
pub trait Notifier: Send + Sync {
    /// Send a player-facing message.
    fn notify(&self, player: PlayerId, notification: Notification);

    /// Play a sound effect for the player.
    fn play_sound(&self, player: PlayerId, sound: SoundId);
}

/// World and location queries, plus player movement.
///
/// Live state is read at the moment it is needed; the warmup window is long
/// enough for any of it to change.
pub trait GameWorld: Send + Sync {
    /// Player's current location, or `None` if departed.
    fn current_location(&self, player: PlayerId) -> Option<Location>;

    /// Player's recorded home (bed spawn) location, if any.
    fn home_location(&self, player: PlayerId) -> Option<Location>;

    /// Spawn location of the named world, if the world exists.
    fn spawn_location(&self, world: &str) -> Option<Location>;

    /// All worlds on the server.
    fn worlds(&self) -> Vec<WorldInfo>;

    /// Whether the engine is enabled in the named world.
    fn is_enabled(&self, world: &str) -> bool;

    /// Move the player to the given location.
    fn move_player(&self, player: PlayerId, destination: &Location);

    /// Pre-load the spatial region around the destination so arrival does
    /// not stall. Optional.
    fn preload_region(&self, _destination: &Location) {}

    /// Cosmetic lightning strike effect at the destination. Optional.
    fn strike_lightning(&self, _destination: &Location) {}
}

/// Player inventory access.
pub trait Inventory: Send + Sync {
    /// Stack currently held in the player's main hand, if any.
    fn held_item(&self, player: PlayerId) -> Option<ItemStack>;

    /// Replace the held stack; `None` clears the hand.
    fn set_held_item(&self, player: PlayerId, stack: Option<ItemStack>);

    /// Find one unit similar to `stack` anywhere in the player's inventory
    /// and remove it. Returns whether a unit was removed.
    fn remove_one_matching(&self, player: PlayerId, stack: &ItemStack) -> bool;
}
