//! Integration test common infrastructure.
//!
//! Provides an in-memory fake host implementing all three collaborator
//! traits, recording every notification, sound, and move for assertions.

#![allow(dead_code)]

use homebound::{
    Config, Environment, GameWorld, Inventory, ItemStack, Location, Notification, Notifier,
    PlayerId, SoundId, TeleportHandler, WorldInfo,
};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// In-memory fake of the host environment.
#[derive(Default)]
pub struct TestHost {
    worlds: Mutex<Vec<WorldInfo>>,
    spawns: Mutex<HashMap<String, Location>>,
    disabled: Mutex<HashSet<String>>,
    locations: Mutex<HashMap<PlayerId, Location>>,
    homes: Mutex<HashMap<PlayerId, Location>>,
    held: Mutex<HashMap<PlayerId, ItemStack>>,
    stored: Mutex<HashMap<PlayerId, Vec<ItemStack>>>,
    pub notifications: Mutex<Vec<(PlayerId, Notification)>>,
    pub sounds: Mutex<Vec<(PlayerId, SoundId)>>,
    pub moves: Mutex<Vec<(PlayerId, Location)>>,
    pub strikes: Mutex<Vec<Location>>,
}

impl TestHost {
    /// Host with a single enabled overworld named "world", spawn at
    /// (0, 64, 0).
    pub fn new() -> Arc<Self> {
        let host = Arc::new(Self::default());
        host.add_world("world", Environment::Normal, Location::new("world", 0.0, 64.0, 0.0));
        host
    }

    pub fn add_world(&self, name: &str, environment: Environment, spawn: Location) {
        self.worlds.lock().push(WorldInfo {
            name: name.to_string(),
            environment,
        });
        self.spawns.lock().insert(name.to_string(), spawn);
    }

    pub fn disable_world(&self, name: &str) {
        self.disabled.lock().insert(name.to_string());
    }

    /// Register a player at `at`, optionally with a recorded home.
    pub fn add_player(&self, at: Location, home: Option<Location>) -> PlayerId {
        let player = PlayerId::new();
        self.locations.lock().insert(player, at);
        if let Some(home) = home {
            self.homes.lock().insert(player, home);
        }
        player
    }

    pub fn set_location(&self, player: PlayerId, at: Location) {
        self.locations.lock().insert(player, at);
    }

    pub fn location_of(&self, player: PlayerId) -> Option<Location> {
        self.locations.lock().get(&player).cloned()
    }

    pub fn remove_player(&self, player: PlayerId) {
        self.locations.lock().remove(&player);
        self.held.lock().remove(&player);
        self.stored.lock().remove(&player);
    }

    /// Put a stack in the player's main hand.
    pub fn give_held(&self, player: PlayerId, stack: ItemStack) {
        self.held.lock().insert(player, stack);
    }

    /// Stash a stack elsewhere in the player's inventory.
    pub fn give_stored(&self, player: PlayerId, stack: ItemStack) {
        self.stored.lock().entry(player).or_default().push(stack);
    }

    pub fn clear_inventory(&self, player: PlayerId) {
        self.held.lock().remove(&player);
        self.stored.lock().remove(&player);
    }

    /// Total quantity of stacks similar to `stack` across hand and storage.
    pub fn count_similar(&self, player: PlayerId, stack: &ItemStack) -> u32 {
        let held = self
            .held
            .lock()
            .get(&player)
            .filter(|h| h.is_similar(stack))
            .map(|h| h.quantity)
            .unwrap_or(0);
        let stored = self
            .stored
            .lock()
            .get(&player)
            .map(|stacks| {
                stacks
                    .iter()
                    .filter(|s| s.is_similar(stack))
                    .map(|s| s.quantity)
                    .sum()
            })
            .unwrap_or(0);
        held + stored
    }

    pub fn notifications_for(&self, player: PlayerId) -> Vec<Notification> {
        self.notifications
            .lock()
            .iter()
            .filter(|(p, _)| *p == player)
            .map(|(_, n)| n.clone())
            .collect()
    }

    pub fn moves_for(&self, player: PlayerId) -> Vec<Location> {
        self.moves
            .lock()
            .iter()
            .filter(|(p, _)| *p == player)
            .map(|(_, l)| l.clone())
            .collect()
    }
}

impl Notifier for TestHost {
    fn notify(&self, player: PlayerId, notification: Notification) {
        // Delivery to a departed player is a silent no-op, but record it
        // anyway; tests asserting on departed players want to see nothing
        // was *moved*, not that nothing was said.
        self.notifications.lock().push((player, notification));
    }

    fn play_sound(&self, player: PlayerId, sound: SoundId) {
        self.sounds.lock().push((player, sound));
    }
}

impl GameWorld for TestHost {
    fn current_location(&self, player: PlayerId) -> Option<Location> {
        self.locations.lock().get(&player).cloned()
    }

    fn home_location(&self, player: PlayerId) -> Option<Location> {
        self.homes.lock().get(&player).cloned()
    }

    fn spawn_location(&self, world: &str) -> Option<Location> {
        self.spawns.lock().get(world).cloned()
    }

    fn worlds(&self) -> Vec<WorldInfo> {
        self.worlds.lock().clone()
    }

    fn is_enabled(&self, world: &str) -> bool {
        !self.disabled.lock().contains(world)
    }

    fn move_player(&self, player: PlayerId, destination: &Location) {
        self.locations.lock().insert(player, destination.clone());
        self.moves.lock().push((player, destination.clone()));
    }

    fn strike_lightning(&self, destination: &Location) {
        self.strikes.lock().push(destination.clone());
    }
}

impl Inventory for TestHost {
    fn held_item(&self, player: PlayerId) -> Option<ItemStack> {
        self.held.lock().get(&player).cloned()
    }

    fn set_held_item(&self, player: PlayerId, stack: Option<ItemStack>) {
        match stack {
            Some(stack) => self.held.lock().insert(player, stack),
            None => self.held.lock().remove(&player),
        };
    }

    fn remove_one_matching(&self, player: PlayerId, stack: &ItemStack) -> bool {
        let mut held = self.held.lock();
        if let Some(in_hand) = held.get_mut(&player)
            && in_hand.is_similar(stack)
        {
            in_hand.quantity -= 1;
            if in_hand.quantity == 0 {
                held.remove(&player);
            }
            return true;
        }
        drop(held);

        let mut stored = self.stored.lock();
        if let Some(stacks) = stored.get_mut(&player)
            && let Some(index) = stacks.iter().position(|s| s.is_similar(stack))
        {
            stacks[index].quantity -= 1;
            if stacks[index].quantity == 0 {
                stacks.remove(index);
            }
            return true;
        }
        false
    }
}

/// Install a test tracing subscriber once per process; `RUST_LOG` controls
/// verbosity.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

/// Build a handler wired to the fake host.
pub fn handler(host: &Arc<TestHost>, config: Config) -> Arc<TeleportHandler> {
    init_tracing();
    Arc::new(TeleportHandler::new(
        config,
        host.clone(),
        host.clone(),
        host.clone(),
    ))
}

/// Let spawned timer tasks run after a paused-time advance.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
