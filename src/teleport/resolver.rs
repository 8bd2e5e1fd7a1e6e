//! Destination resolution.
//!
//! Pure over the player's current location, their recorded home, the world
//! set, and configuration: bed-spawn first, world-spawn fallback, with
//! nether/end-to-overworld redirection and a minimum-distance gate. Returns
//! a fully resolved destination or one of two terminal failures, never a
//! partially-resolved state.

use crate::config::Config;
use crate::error::ResolveError;
use crate::host::GameWorld;
use crate::world::{Environment, Location, strip_dimension_suffix};

/// Destination kind. The set is closed and known at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationKind {
    /// Player's recorded home (bed spawn) location.
    Home,
    /// World spawn fallback.
    Spawn,
}

/// A resolved teleport destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    /// Where the player will be moved.
    pub location: Location,
    /// Human-readable destination name for messages.
    pub name: String,
    /// Which branch of the fallback chain produced this.
    pub kind: DestinationKind,
    /// Whether completion should keep the player's current facing.
    ///
    /// Home locations carry no meaningful orientation, so the player's
    /// facing at completion time is preserved. Spawn locations carry the
    /// orientation recorded by the world manager and override it.
    pub keep_facing: bool,
}

/// Resolve a destination for a player currently at `current`.
pub fn resolve(
    current: &Location,
    home: Option<Location>,
    world: &dyn GameWorld,
    config: &Config,
) -> Result<Destination, ResolveError> {
    let destination = match home {
        Some(home) => {
            let location = if config.teleport.center_on_block {
                home.block_centered()
            } else {
                home
            };
            Destination {
                location,
                name: config.display.home_name.clone(),
                kind: DestinationKind::Home,
                keep_facing: true,
            }
        }
        None => {
            if !config.teleport.bedspawn_fallback {
                return Err(ResolveError::NoHomeDestination);
            }
            resolve_spawn(current, world, config)?
        }
    };

    check_minimum_distance(current, &destination, config)?;
    Ok(destination)
}

/// Resolve the spawn fallback, redirecting nether/end worlds to the
/// matching overworld spawn when configured.
fn resolve_spawn(
    current: &Location,
    world: &dyn GameWorld,
    config: &Config,
) -> Result<Destination, ResolveError> {
    let worlds = world.worlds();

    let environment = worlds
        .iter()
        .find(|w| w.name == current.world)
        .map(|w| w.environment);

    let redirect = match environment {
        Some(Environment::Nether) => config.teleport.from_nether,
        Some(Environment::End) => config.teleport.from_end,
        _ => false,
    };

    let mut spawn_world = current.world.as_str();
    if redirect {
        let base = strip_dimension_suffix(&current.world);
        let normals: Vec<_> = worlds
            .iter()
            .filter(|w| w.environment == Environment::Normal)
            .collect();
        if let Some(matching) = normals.iter().find(|w| w.name == base) {
            spawn_world = &matching.name;
        } else if let [only] = normals.as_slice() {
            // A single-overworld server is an unambiguous choice.
            spawn_world = &only.name;
        }
    }

    // A world with no spawn location is as terminal as a missing home.
    let location = world
        .spawn_location(spawn_world)
        .ok_or(ResolveError::NoHomeDestination)?;

    Ok(Destination {
        location,
        name: config.display.spawn_name.clone(),
        kind: DestinationKind::Spawn,
        keep_facing: false,
    })
}

fn check_minimum_distance(
    current: &Location,
    destination: &Destination,
    config: &Config,
) -> Result<(), ResolveError> {
    if destination.location.world == current.world
        && destination.location.distance(current) < config.teleport.minimum_distance
    {
        return Err(ResolveError::TooClose {
            destination: destination.name.clone(),
        });
    }
    Ok(())
}
