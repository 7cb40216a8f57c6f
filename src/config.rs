//! Grid configuration: world extent, cell radius and world origin together determine
//! the grid dimensions and the world/cell coordinate mapping.
use num_traits::ToPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::world::{Extent, WorldPoint};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// World-space size covered by the grid.
    pub extent: Extent,
    /// Half the side length of a cell.
    pub node_radius: f32,
    /// World-space centre of the grid.
    pub origin: WorldPoint,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            extent: Extent::new(30.0, 30.0),
            node_radius: 0.5,
            origin: WorldPoint::default(),
        }
    }
}

impl GridConfig {
    pub fn new(extent: Extent, node_radius: f32, origin: WorldPoint) -> GridConfig {
        GridConfig {
            extent,
            node_radius,
            origin,
        }
    }

    pub fn node_diameter(&self) -> f32 {
        self.node_radius * 2.0
    }

    /// Validates the configuration and computes the grid size in cells,
    /// `round(extent / diameter)` along each axis.
    pub fn grid_size(&self) -> Result<(usize, usize), GridError> {
        if !self.node_radius.is_finite() || self.node_radius <= 0.0 {
            return Err(GridError::InvalidRadius(self.node_radius));
        }
        let Extent { width, height } = self.extent;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(GridError::InvalidExtent { width, height });
        }
        let diameter = self.node_diameter();
        let too_large = || GridError::TooLarge { width, height };
        // Cell coordinates are i32, so each axis must fit in one
        let size_x = (width / diameter)
            .round_ties_even()
            .to_i32()
            .ok_or_else(too_large)? as usize;
        let size_y = (height / diameter)
            .round_ties_even()
            .to_i32()
            .ok_or_else(too_large)? as usize;
        if size_x == 0 || size_y == 0 {
            return Err(GridError::EmptyGrid { size_x, size_y });
        }
        size_x.checked_mul(size_y).ok_or_else(too_large)?;
        Ok((size_x, size_y))
    }

    /// World-space position of the corner with the lowest x and z.
    pub fn bottom_left(&self) -> WorldPoint {
        WorldPoint::new(
            self.origin.x - self.extent.width / 2.0,
            self.origin.y,
            self.origin.z - self.extent.height / 2.0,
        )
    }
}
