//! homebound - timed item-teleport lifecycle engine.
//!
//! A single triggering action ("use item") carries a player through a timed
//! warmup, cancellable by a defined set of interrupts, to a resolved
//! destination (home, with world-spawn fallback and nether/end redirection)
//! or a cancellation outcome, followed by a cooldown during which
//! re-triggering is suppressed.
//!
//! The engine is host-agnostic: messages, sounds, world state, and
//! inventories are reached through the collaborator traits in [`host`],
//! injected at construction. State is in-memory only and resets on restart.

pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod item;
pub mod player;
pub mod state;
pub mod teleport;
pub mod world;

pub use config::{Config, RemovalPolicy};
pub use error::{ConfigError, ResolveError, WarmupError};
pub use events::{EventBridge, InteractAction};
pub use host::{CancelReason, GameWorld, Inventory, Notification, Notifier, SoundId};
pub use item::{ItemStack, is_tagged_item, tagged_item};
pub use player::PlayerId;
pub use teleport::{Destination, DestinationKind, TeleportHandler};
pub use world::{Environment, Location, WorldInfo};
