//! Delayed teleport completion.

use super::TeleportHandler;
use super::resolver::Destination;
use crate::config::RemovalPolicy;
use crate::host::{Notification, SoundId};
use crate::item::ItemStack;
use crate::player::PlayerId;
use tracing::{debug, info};

/// Immutable descriptor of a scheduled teleport completion.
///
/// Captured by value into the spawned timer task; neither inspectable nor
/// mutable after scheduling.
#[derive(Debug)]
pub(super) struct DelayedTeleport {
    pub(super) player: PlayerId,
    pub(super) destination: Destination,
    /// Snapshot of the initiating stack. This is only the match key for
    /// consume-on-success; the live inventory is re-read at completion
    /// because it can change during the warmup window.
    pub(super) snapshot: ItemStack,
}

impl DelayedTeleport {
    /// Fires once, after the warmup elapses.
    pub(super) fn run(self, handler: &TeleportHandler) {
        // Claiming the warmup entry is the commit point. If a cancel got
        // there first, the cancellation path already notified the player.
        if !handler.warmups.complete(self.player) {
            debug!(player = %self.player, "completion lost race to cancel");
            return;
        }

        if handler.config.teleport.remove_from_inventory == RemovalPolicy::OnSuccess
            && !handler
                .inventory
                .remove_one_matching(self.player, &self.snapshot)
        {
            // Item was dropped, traded, or destroyed during warmup. The
            // warmup slot was consumed regardless of outcome, so the
            // cooldown still applies; otherwise a player could spam
            // initiations hunting for a free failure.
            debug!(player = %self.player, "no matching item at completion");
            handler.notifier.notify(self.player, Notification::NoItem);
            handler.notifier.play_sound(self.player, SoundId::Cancelled);
            handler
                .cooldowns
                .start(self.player, handler.config.teleport.cooldown());
            return;
        }

        let final_location = if self.destination.keep_facing {
            match handler.world.current_location(self.player) {
                Some(current) => self.destination.location.with_facing(&current),
                None => self.destination.location.clone(),
            }
        } else {
            self.destination.location.clone()
        };

        handler.notifier.play_sound(self.player, SoundId::Departure);
        handler.world.move_player(self.player, &final_location);
        handler.notifier.notify(
            self.player,
            Notification::Success {
                destination: self.destination.name.clone(),
            },
        );
        handler.notifier.play_sound(self.player, SoundId::Arrival);

        if handler.config.teleport.lightning {
            handler.world.strike_lightning(&final_location);
        }

        info!(
            player = %self.player,
            destination = %self.destination.name,
            world = %final_location.world,
            "teleport completed"
        );

        handler
            .cooldowns
            .start(self.player, handler.config.teleport.cooldown());
    }
}
