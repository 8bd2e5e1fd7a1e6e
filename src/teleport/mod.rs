//! Teleport orchestration: the warmup/cooldown state machine.
//!
//! Per player the lifecycle is
//!
//! ```text
//! Idle ──initiate──► Warmup ──interrupt──► Cancelled ──► Idle
//!                      │
//!                      └──timer fires──► Completed ──► Cooldown ──expiry──► Idle
//! ```
//!
//! Cancellation and natural completion are mutually exclusive outcomes:
//! exactly one of the two occurs per registered warmup, decided by a single
//! atomic registry removal (see `state::WarmupRegistry`).

pub mod resolver;
mod task;

pub use resolver::{Destination, DestinationKind};

use crate::config::{Config, RemovalPolicy};
use crate::error::ResolveError;
use crate::host::{CancelReason, GameWorld, Inventory, Notification, Notifier, SoundId};
use crate::item::ItemStack;
use crate::player::PlayerId;
use crate::state::{CooldownRegistry, WarmupRegistry};
use std::sync::Arc;
use std::time::Duration;
use task::DelayedTeleport;
use tokio::sync::oneshot;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Top-level teleport state machine.
///
/// Owns the warmup and cooldown registries and holds the host collaborators
/// it needs, passed at construction.
pub struct TeleportHandler {
    pub(crate) config: Config,
    pub(crate) warmups: WarmupRegistry,
    pub(crate) cooldowns: CooldownRegistry,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) world: Arc<dyn GameWorld>,
    pub(crate) inventory: Arc<dyn Inventory>,
}

impl TeleportHandler {
    /// Create a handler with explicit collaborators.
    pub fn new(
        config: Config,
        notifier: Arc<dyn Notifier>,
        world: Arc<dyn GameWorld>,
        inventory: Arc<dyn Inventory>,
    ) -> Self {
        let warmups = WarmupRegistry::new(config.teleport.interact_grace());
        Self {
            config,
            warmups,
            cooldowns: CooldownRegistry::new(),
            notifier,
            world,
            inventory,
        }
    }

    /// Start a teleport for the player holding `item`.
    ///
    /// Every user-recoverable precondition failure notifies the player and
    /// leaves them idle; a duplicate trigger while already warming is a
    /// silent no-op.
    pub fn initiate(self: &Arc<Self>, player: PlayerId, item: ItemStack) {
        let remaining = self.cooldowns.time_remaining(player);
        if !remaining.is_zero() {
            self.notifier
                .notify(player, Notification::Cooldown { remaining });
            self.notifier.play_sound(player, SoundId::Denied);
            return;
        }

        if self.warmups.is_warming_up(player) {
            return;
        }

        let Some(current) = self.world.current_location(player) else {
            // Departed between the trigger and here; nothing to do.
            return;
        };

        let home = self.world.home_location(player);
        let destination = match resolver::resolve(&current, home, &*self.world, &self.config) {
            Ok(destination) => destination,
            Err(err) => {
                debug!(%player, code = err.error_code(), "destination resolution failed");
                let notification = match &err {
                    ResolveError::NoHomeDestination => Notification::NoHome,
                    ResolveError::TooClose { destination } => Notification::TooClose {
                        destination: destination.clone(),
                    },
                };
                self.notifier.notify(player, notification);
                self.notifier.play_sound(player, SoundId::Cancelled);
                return;
            }
        };

        if self.config.teleport.remove_from_inventory == RemovalPolicy::OnUse {
            // Consumed now, before the timer starts: the item is gone even
            // if the warmup is later cancelled. That is the documented
            // trade-off against on-success.
            self.consume_held(player);
        }

        // The deadline is anchored here, not at the task's first poll: a
        // scheduling delay before the task runs must not stretch the warmup.
        let warmup = self.config.teleport.warmup();
        let deadline = Instant::now() + warmup;
        let delayed = DelayedTeleport {
            player,
            destination: destination.clone(),
            snapshot: ItemStack {
                quantity: 1,
                ..item
            },
        };

        // The task is gated on an armed signal: a zero-duration warmup must
        // not fire before its registry entry exists.
        let (armed_tx, armed_rx) = oneshot::channel::<()>();
        let handler = Arc::clone(self);
        let join = tokio::spawn(async move {
            if armed_rx.await.is_err() {
                return;
            }
            tokio::time::sleep_until(deadline).await;
            delayed.run(&handler);
        });

        match self.warmups.begin(player, join.abort_handle()) {
            Ok(()) => {
                let _ = armed_tx.send(());
            }
            Err(err) => {
                // The is_warming_up check above was bypassed; a programming
                // error, not a user condition.
                join.abort();
                warn!(%player, %err, "warmup registration rejected");
                return;
            }
        }

        if !warmup.is_zero() {
            self.notifier.notify(
                player,
                Notification::Warmup {
                    destination: destination.name.clone(),
                    duration: warmup,
                },
            );
            self.notifier.play_sound(player, SoundId::WarmupBegin);
        }

        self.world.preload_region(&destination.location);

        if self.config.teleport.log_use {
            info!(
                %player,
                world = %current.world,
                destination = %destination.name,
                "teleport item used"
            );
        }
    }

    /// Cancel the player's pending teleport, if any.
    ///
    /// Idempotent: a player with no active warmup is a safe no-op. Safe to
    /// call concurrently with the completion timer firing; at most one of
    /// the two outcomes occurs.
    pub fn cancel(&self, player: PlayerId, reason: CancelReason) {
        if self.warmups.cancel(player) {
            debug!(%player, reason = reason.code(), "teleport cancelled");
            self.notifier
                .notify(player, Notification::Cancelled(reason));
            self.notifier.play_sound(player, SoundId::Cancelled);
        }
    }

    /// Whether the player has a pending teleport. Pass-through.
    pub fn is_warming_up(&self, player: PlayerId) -> bool {
        self.warmups.is_warming_up(player)
    }

    /// Whether the player is inside the interaction grace window.
    /// Pass-through.
    pub fn is_within_interaction_grace(&self, player: PlayerId) -> bool {
        self.warmups.is_within_interaction_grace(player)
    }

    /// Whether the player is suppressed by a cooldown. Pass-through.
    pub fn is_cooling_down(&self, player: PlayerId) -> bool {
        self.cooldowns.is_cooling_down(player)
    }

    /// Time remaining on the player's cooldown. Pass-through.
    pub fn cooldown_remaining(&self, player: PlayerId) -> Duration {
        self.cooldowns.time_remaining(player)
    }

    /// Engine configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decrement the live held stack by one (on-use consumption).
    fn consume_held(&self, player: PlayerId) {
        if let Some(mut held) = self.inventory.held_item(player) {
            held.quantity = held.quantity.saturating_sub(1);
            let next = (held.quantity > 0).then_some(held);
            self.inventory.set_held_item(player, next);
        }
    }
}
