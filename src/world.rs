//! World and location types.
//!
//! `Location` is the single positional value the engine passes across the
//! host boundary. Worlds are identified by name; the environment kind drives
//! the nether/end-to-overworld redirection in destination resolution.

/// World environment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Overworld.
    Normal,
    /// Nether-type world.
    Nether,
    /// End-type world.
    End,
}

/// World descriptor returned by the world collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldInfo {
    /// World name (unique on the server).
    pub name: String,
    /// Environment kind.
    pub environment: Environment,
}

/// A position plus orientation within a named world.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Name of the world containing this location.
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Horizontal facing in degrees.
    pub yaw: f32,
    /// Vertical facing in degrees.
    pub pitch: f32,
}

impl Location {
    /// Create a location with neutral orientation.
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Snap to the horizontal center of the containing block.
    ///
    /// Adds 0.5 to the block-floored x and z; y and orientation are left
    /// untouched. Teleporting to a non-centered coordinate can place a
    /// player inside a block edge or falling through a gap.
    pub fn block_centered(&self) -> Self {
        Self {
            x: self.x.floor() + 0.5,
            z: self.z.floor() + 0.5,
            ..self.clone()
        }
    }

    /// 3D euclidean distance to another location.
    ///
    /// Only meaningful when both locations are in the same world; callers
    /// check the world name first.
    pub fn distance(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// True when the position differs from `other`, ignoring orientation.
    ///
    /// Movement-cancel triggers compare positions, never facing: a player
    /// turning their head during warmup must not cancel the teleport.
    pub fn position_differs(&self, other: &Location) -> bool {
        self.world != other.world || self.x != other.x || self.y != other.y || self.z != other.z
    }

    /// Copy of this location with orientation taken from `facing`.
    pub fn with_facing(&self, facing: &Location) -> Self {
        Self {
            yaw: facing.yaw,
            pitch: facing.pitch,
            ..self.clone()
        }
    }
}

/// Strip the conventional nether/end suffix from a world name.
///
/// `"world_nether"` and `"world_the_end"` both map to `"world"`; a name
/// without either suffix is returned unchanged.
pub(crate) fn strip_dimension_suffix(name: &str) -> &str {
    name.strip_suffix("_nether")
        .or_else(|| name.strip_suffix("_the_end"))
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_centered_snaps_x_and_z_only() {
        let loc = Location {
            world: "world".into(),
            x: 10.3,
            y: 64.0,
            z: -5.7,
            yaw: 90.0,
            pitch: -10.0,
        };
        let centered = loc.block_centered();
        assert_eq!(centered.x, 10.5);
        assert_eq!(centered.y, 64.0);
        assert_eq!(centered.z, -5.5);
        assert_eq!(centered.yaw, 90.0);
        assert_eq!(centered.pitch, -10.0);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Location::new("world", 0.0, 0.0, 0.0);
        let b = Location::new("world", 3.0, 4.0, 0.0);
        assert!((a.distance(&b) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn orientation_change_is_not_movement() {
        let a = Location::new("world", 1.0, 2.0, 3.0);
        let mut b = a.clone();
        b.yaw = 180.0;
        b.pitch = 45.0;
        assert!(!a.position_differs(&b));

        b.x += 0.1;
        assert!(a.position_differs(&b));
    }

    #[test]
    fn dimension_suffix_stripping() {
        assert_eq!(strip_dimension_suffix("world_nether"), "world");
        assert_eq!(strip_dimension_suffix("world_the_end"), "world");
        assert_eq!(strip_dimension_suffix("world"), "world");
        assert_eq!(strip_dimension_suffix("hub"), "hub");
    }
}
