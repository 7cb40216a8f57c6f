use grid_util::point::Point;

use crate::world::WorldPoint;

/// A single grid unit. Immutable once the owning [Grid](crate::Grid) is built; search
/// bookkeeping lives in the per-search context instead.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// Whether the cell can be entered.
    pub walkable: bool,
    /// World-space centre of the cell.
    pub position: WorldPoint,
    /// Grid-local coordinates, unique within the grid.
    pub coord: Point,
}

impl Cell {
    pub fn new(walkable: bool, position: WorldPoint, coord: Point) -> Cell {
        Cell {
            walkable,
            position,
            coord,
        }
    }
}
