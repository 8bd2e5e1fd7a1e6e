//! Player identity.

use std::fmt;
use uuid::Uuid;

/// Stable opaque identity for a player.
///
/// The engine owns no player attributes beyond this id; live state
/// (location, inventory, world) is read from the host collaborators at the
/// moment it is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing host-assigned id.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
