//! World-space types and the collaborator contracts the engine consumes.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use core::fmt;

/// A point in world space. The grid lies on the X/Z plane with Y pointing up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPoint {
    pub const fn new(x: f32, y: f32, z: f32) -> WorldPoint {
        WorldPoint { x, y, z }
    }
}

impl fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

/// Size of the grid in world units. `width` runs along world X, `height` along world Z.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Extent {
        Extent { width, height }
    }
}

/// Reports whether a world-space point is obstructed. Only queried while a
/// [Grid](crate::Grid) is being built, exactly once per cell.
pub trait WorldSampler {
    fn is_obstructed(&self, point: WorldPoint, radius: f32) -> bool;
}

impl<F> WorldSampler for F
where
    F: Fn(WorldPoint, f32) -> bool,
{
    fn is_obstructed(&self, point: WorldPoint, radius: f32) -> bool {
        self(point, radius)
    }
}

/// Supplies the seeker and target positions, read once per search.
pub trait SceneSource {
    fn start_position(&self) -> WorldPoint;
    fn target_position(&self) -> WorldPoint;
}

/// A fixed scene of `(start, target)`.
impl SceneSource for (WorldPoint, WorldPoint) {
    fn start_position(&self) -> WorldPoint {
        self.0
    }
    fn target_position(&self) -> WorldPoint {
        self.1
    }
}

impl<S: SceneSource + ?Sized> SceneSource for &S {
    fn start_position(&self) -> WorldPoint {
        (**self).start_position()
    }
    fn target_position(&self) -> WorldPoint {
        (**self).target_position()
    }
}
