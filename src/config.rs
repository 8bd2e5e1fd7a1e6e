//! Configuration loading and management.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Teleport timing, destination, and item-consumption settings.
    #[serde(default)]
    pub teleport: TeleportConfig,
    /// Warmup-interrupt trigger flags.
    #[serde(default)]
    pub cancel: CancelConfig,
    /// Destination display names.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// When the triggering item is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemovalPolicy {
    /// Consume one unit at initiation, before the warmup timer starts.
    /// The item is gone even if the warmup is later cancelled.
    OnUse,
    /// Consume one matching unit only on successful arrival. If no match
    /// remains at completion, the teleport fails but the cooldown still
    /// applies.
    OnSuccess,
}

/// Teleport timing, destination, and item-consumption settings.
#[derive(Debug, Clone, Deserialize)]
pub struct TeleportConfig {
    /// Warmup delay before the teleport executes, in seconds (default: 5).
    #[serde(default = "default_warmup_secs")]
    pub warmup_secs: u64,
    /// Cooldown after a completed teleport, in seconds (default: 60).
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: u64,
    /// Minimum distance from the destination for a teleport to be allowed
    /// (default: 10.0).
    #[serde(default = "default_minimum_distance")]
    pub minimum_distance: f64,
    /// Item consumption policy (default: on-success).
    #[serde(default = "default_removal_policy")]
    pub remove_from_inventory: RemovalPolicy,
    /// Fall back to the world spawn when no home location exists
    /// (default: false).
    #[serde(default)]
    pub bedspawn_fallback: bool,
    /// Snap home destinations to the horizontal block center
    /// (default: false).
    #[serde(default)]
    pub center_on_block: bool,
    /// Redirect spawn teleports out of nether worlds to the matching
    /// overworld spawn (default: true).
    #[serde(default = "default_true")]
    pub from_nether: bool,
    /// Redirect spawn teleports out of end worlds to the matching
    /// overworld spawn (default: true).
    #[serde(default = "default_true")]
    pub from_end: bool,
    /// Post-initiation window during which block-interaction cancels are
    /// suppressed, in milliseconds (default: 100, roughly 2 ticks).
    /// Absorbs the host input system reporting one physical click twice,
    /// once per hand.
    #[serde(default = "default_interact_grace_ms")]
    pub interact_grace_ms: u64,
    /// Strike a lightning effect at the destination on arrival
    /// (default: true).
    #[serde(default = "default_true")]
    pub lightning: bool,
    /// Log item usage at info level (default: true).
    #[serde(default = "default_true")]
    pub log_use: bool,
    /// Also accept left clicks to initiate (default: false).
    #[serde(default)]
    pub left_click: bool,
}

impl TeleportConfig {
    /// Warmup delay as a `Duration`.
    pub fn warmup(&self) -> Duration {
        Duration::from_secs(self.warmup_secs)
    }

    /// Cooldown as a `Duration`.
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    /// Interaction grace window as a `Duration`.
    pub fn interact_grace(&self) -> Duration {
        Duration::from_millis(self.interact_grace_ms)
    }
}

impl Default for TeleportConfig {
    fn default() -> Self {
        Self {
            warmup_secs: default_warmup_secs(),
            cooldown_secs: default_cooldown_secs(),
            minimum_distance: default_minimum_distance(),
            remove_from_inventory: default_removal_policy(),
            bedspawn_fallback: false,
            center_on_block: false,
            from_nether: true,
            from_end: true,
            interact_grace_ms: default_interact_grace_ms(),
            lightning: true,
            log_use: true,
            left_click: false,
        }
    }
}

/// Warmup-interrupt trigger flags.
///
/// Departure triggers (quit, death) always cancel and are not configurable:
/// a departed player can never complete the timer meaningfully.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelConfig {
    /// Cancel the warmup when the player takes damage (default: true).
    #[serde(default = "default_true")]
    pub on_damage: bool,
    /// Cancel the warmup when the player changes position (default: true).
    #[serde(default = "default_true")]
    pub on_movement: bool,
    /// Cancel the warmup when the player clicks a block outside the
    /// interaction grace window (default: true).
    #[serde(default = "default_true")]
    pub on_interaction: bool,
}

impl Default for CancelConfig {
    fn default() -> Self {
        Self {
            on_damage: true,
            on_movement: true,
            on_interaction: true,
        }
    }
}

/// Destination display names.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Display name for home destinations (default: "Home").
    #[serde(default = "default_home_name")]
    pub home_name: String,
    /// Display name for spawn destinations (default: "Spawn").
    #[serde(default = "default_spawn_name")]
    pub spawn_name: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            home_name: default_home_name(),
            spawn_name: default_spawn_name(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn default_warmup_secs() -> u64 {
    5
}

fn default_cooldown_secs() -> u64 {
    60
}

fn default_minimum_distance() -> f64 {
    10.0
}

fn default_removal_policy() -> RemovalPolicy {
    RemovalPolicy::OnSuccess
}

fn default_interact_grace_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

fn default_home_name() -> String {
    "Home".to_string()
}

fn default_spawn_name() -> String {
    "Spawn".to_string()
}
