use core::fmt;

use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::search::{SearchResult, Strategy};
use crate::world::{Extent, WorldPoint, WorldSampler};
use crate::N_SMALLVEC_SIZE;

/// The last published outcome of a strategy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PathSlot {
    /// No search has been published yet.
    #[default]
    Pending,
    /// The last search found no path.
    NoPath,
    /// The last search found this path, excluding the start cell.
    Found(Vec<Point>),
}

impl PathSlot {
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            PathSlot::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// [Grid] owns the cells sampled from the world, maintains information about connected
/// components using a [UnionFind] structure and holds the most recent path published
/// for every [Strategy].
///
/// Cells are stored column-major (`[x][y]`) and never change after construction.
#[derive(Clone, Debug)]
pub struct Grid {
    config: GridConfig,
    size_x: usize,
    size_y: usize,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    slots: [PathSlot; Strategy::COUNT],
}

impl Grid {
    /// Builds a grid covering `extent` around `origin` with cells of the given radius.
    pub fn new<S>(
        extent: Extent,
        radius: f32,
        origin: WorldPoint,
        sampler: &S,
    ) -> Result<Grid, GridError>
    where
        S: WorldSampler + ?Sized,
    {
        Grid::build(GridConfig::new(extent, radius, origin), sampler)
    }

    /// Builds a grid from a configuration, querying the sampler once per cell centre.
    pub fn build<S>(config: GridConfig, sampler: &S) -> Result<Grid, GridError>
    where
        S: WorldSampler + ?Sized,
    {
        let (size_x, size_y) = config.grid_size()?;
        let radius = config.node_radius;
        let diameter = config.node_diameter();
        let bottom_left = config.bottom_left();
        info!(
            "Building {} x {} grid with node radius {} around {}",
            size_x, size_y, radius, config.origin
        );
        let cells = iproduct!(0..size_x, 0..size_y)
            .map(|(x, y)| {
                let position = WorldPoint::new(
                    bottom_left.x + x as f32 * diameter + radius,
                    bottom_left.y,
                    bottom_left.z + y as f32 * diameter + radius,
                );
                let walkable = !sampler.is_obstructed(position, radius);
                Cell::new(walkable, position, Point::new(x as i32, y as i32))
            })
            .collect::<Vec<Cell>>();
        let mut grid = Grid {
            config,
            size_x,
            size_y,
            cells,
            components: UnionFind::new(size_x * size_y),
            slots: Default::default(),
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn size_x(&self) -> usize {
        self.size_x
    }

    pub fn size_y(&self) -> usize {
        self.size_y
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.size_x
            && (point.y as usize) < self.size_y
    }

    fn get_ix_point(&self, point: &Point) -> Option<usize> {
        self.in_bounds(point)
            .then(|| point.x as usize * self.size_y + point.y as usize)
    }

    pub fn cell(&self, point: &Point) -> Option<&Cell> {
        self.get_ix_point(point).map(|ix| &self.cells[ix])
    }

    pub fn is_walkable(&self, point: &Point) -> bool {
        self.cell(point).is_some_and(|cell| cell.walkable)
    }

    /// The in-bounds points of the Moore neighbourhood of `point`, x offset in the outer
    /// loop and y offset in the inner loop.
    pub fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        iproduct!(-1..=1, -1..=1)
            .filter(|&offset| offset != (0, 0))
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.in_bounds(p))
            .collect()
    }

    /// The up to 8 cells adjacent to `cell`, walkable or not.
    pub fn neighbours(&self, cell: &Cell) -> SmallVec<[&Cell; N_SMALLVEC_SIZE]> {
        self.neighborhood_points(&cell.coord)
            .iter()
            .filter_map(|p| self.cell(p))
            .collect()
    }

    /// Maps a world point to the nearest cell. Points outside the grid are clamped to the
    /// closest edge cell.
    pub fn cell_from_world_point(&self, point: WorldPoint) -> &Cell {
        let Extent { width, height } = self.config.extent;
        let origin = self.config.origin;
        let percent_x = ((point.x - origin.x + width / 2.0) / width).clamp(0.0, 1.0);
        let percent_y = ((point.z - origin.z + height / 2.0) / height).clamp(0.0, 1.0);
        // NaN saturates to 0 in the casts below
        let x = (((self.size_x - 1) as f32 * percent_x).round_ties_even() as usize)
            .min(self.size_x - 1);
        let y = (((self.size_y - 1) as f32 * percent_y).round_ties_even() as usize)
            .min(self.size_y - 1);
        &self.cells[x * self.size_y + y]
    }

    /// World-space centres of the cells along `path`, for visualization.
    pub fn path_positions(&self, path: &[Point]) -> Vec<WorldPoint> {
        path.iter()
            .filter_map(|p| self.cell(p))
            .map(|cell| cell.position)
            .collect()
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.get_ix_point(point).map(|ix| self.components.find(ix))
    }

    /// Checks if `goal` can be reached from `start`. An unwalkable start reaches whatever
    /// its walkable neighbours reach, since a search may still leave it.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if start == goal {
            return self.in_bounds(start);
        }
        let (Some(start_ix), Some(goal_ix)) = (self.get_ix_point(start), self.get_ix_point(goal))
        else {
            return false;
        };
        if !self.cells[goal_ix].walkable {
            return false;
        }
        if self.cells[start_ix].walkable {
            self.components.equiv(start_ix, goal_ix)
        } else {
            self.neighborhood_points(start).iter().any(|p| {
                self.is_walkable(p)
                    && self
                        .get_ix_point(p)
                        .is_some_and(|ix| self.components.equiv(ix, goal_ix))
            })
        }
    }

    /// Checks if `goal` cannot be reached from `start`.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }

    /// Links up walkable grid neighbours into the same components.
    fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.cells.len());
        for cell in self.cells.iter().filter(|cell| cell.walkable) {
            let point = cell.coord;
            let Some(parent_ix) = self.get_ix_point(&point) else {
                continue;
            };
            // Half of the Moore neighbourhood suffices as unions are symmetric
            [
                Point::new(point.x, point.y + 1),
                Point::new(point.x + 1, point.y - 1),
                Point::new(point.x + 1, point.y),
                Point::new(point.x + 1, point.y + 1),
            ]
            .iter()
            .filter(|p| self.is_walkable(p))
            .filter_map(|p| self.get_ix_point(p))
            .for_each(|ix| {
                components.union(parent_ix, ix);
            });
        }
        self.components = components;
    }

    /// Writes the outcome of a search into the slot of `strategy`, replacing whatever was
    /// published before.
    pub fn publish(&mut self, strategy: Strategy, result: &SearchResult) {
        self.slots[strategy.index()] = match &result.path {
            Some(path) => PathSlot::Found(path.clone()),
            None => PathSlot::NoPath,
        };
    }

    pub fn slot(&self, strategy: Strategy) -> &PathSlot {
        &self.slots[strategy.index()]
    }

    /// The last path published for `strategy`, if the last search found one.
    pub fn last_path(&self, strategy: Strategy) -> Option<&[Point]> {
        self.slot(strategy).path()
    }

    /// Resets every slot to [PathSlot::Pending].
    pub fn clear_paths(&mut self) {
        self.slots = Default::default();
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in (0..self.size_y as i32).rev() {
            let row = (0..self.size_x as i32)
                .map(|x| {
                    if self.is_walkable(&Point::new(x, y)) {
                        '.'
                    } else {
                        '#'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
