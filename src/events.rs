//! Host event bridge.
//!
//! Maps raw host events (clicks, damage, movement, departure) onto engine
//! operations. The host registers one `EventBridge` and forwards events;
//! everything else is trigger-flag plumbing around `initiate` and `cancel`.

use crate::host::{CancelReason, GameWorld};
use crate::item::{ItemStack, is_tagged_item};
use crate::player::PlayerId;
use crate::teleport::TeleportHandler;
use crate::world::Location;
use std::sync::Arc;

/// Player click actions as reported by the host input system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractAction {
    LeftClickBlock,
    RightClickBlock,
    LeftClickAir,
    RightClickAir,
}

impl InteractAction {
    fn is_block_click(self) -> bool {
        matches!(self, Self::LeftClickBlock | Self::RightClickBlock)
    }

    fn is_right_click(self) -> bool {
        matches!(self, Self::RightClickAir | Self::RightClickBlock)
    }

    fn is_left_click(self) -> bool {
        matches!(self, Self::LeftClickAir | Self::LeftClickBlock)
    }
}

/// Receives host events and drives the teleport handler.
pub struct EventBridge {
    handler: Arc<TeleportHandler>,
    world: Arc<dyn GameWorld>,
}

impl EventBridge {
    /// Create a bridge over the given handler and world collaborator.
    pub fn new(handler: Arc<TeleportHandler>, world: Arc<dyn GameWorld>) -> Self {
        Self { handler, world }
    }

    /// Player interaction: both the cancel trigger and the initiation entry
    /// point.
    ///
    /// A block click while warming cancels the teleport, unless it lands
    /// inside the interaction grace window; the grace window absorbs the
    /// duplicate-fire click from the initiating action, which then falls
    /// through to an initiation attempt that no-ops on the warming check.
    pub fn on_interact(&self, player: PlayerId, action: InteractAction, held: Option<&ItemStack>) {
        let config = self.handler.config();

        if config.cancel.on_interaction
            && action.is_block_click()
            && self.handler.is_warming_up(player)
            && !self.handler.is_within_interaction_grace(player)
        {
            self.handler.cancel(player, CancelReason::Interaction);
            return;
        }

        let Some(held) = held else { return };
        if !is_tagged_item(held) {
            return;
        }

        let initiating = action.is_right_click()
            || (config.teleport.left_click && action.is_left_click());
        if !initiating {
            return;
        }

        let Some(current) = self.world.current_location(player) else {
            return;
        };
        if !self.world.is_enabled(&current.world) {
            return;
        }

        self.handler.initiate(player, held.clone());
    }

    /// Player took damage.
    pub fn on_damage(&self, player: PlayerId) {
        if self.handler.config().cancel.on_damage {
            self.handler.cancel(player, CancelReason::Damage);
        }
    }

    /// Player move event. Cancels only on a position change; orientation-only
    /// changes never cancel.
    pub fn on_move(&self, player: PlayerId, from: &Location, to: &Location) {
        if self.handler.config().cancel.on_movement && from.position_differs(to) {
            self.handler.cancel(player, CancelReason::Movement);
        }
    }

    /// Player disconnected. Always cancels, regardless of trigger flags: a
    /// departed player can never complete the timer meaningfully.
    pub fn on_quit(&self, player: PlayerId) {
        self.handler.cancel(player, CancelReason::Quit);
    }

    /// Player's entity was removed (death). Always cancels.
    pub fn on_death(&self, player: PlayerId) {
        self.handler.cancel(player, CancelReason::Death);
    }
}
