//! Generational transition. Every function here reads the current grid and
//! builds a fresh one with the same bounds; the input is never touched.

use rayon::prelude::*;

use super::{count_live_neighbors, BoundedGrid, Cell, ConwayRule, Rule};

/// Next generation under Conway's rules
pub fn tick(grid: &BoundedGrid) -> BoundedGrid {
    tick_with(grid, &ConwayRule)
}

/// Next generation under an arbitrary rule (serial)
pub fn tick_with(grid: &BoundedGrid, rule: &dyn Rule) -> BoundedGrid {
    let (ncols, nrows) = grid.dimensions();
    let cells = (0..ncols)
        .flat_map(|i| (0..nrows).map(move |j| (i, j)))
        .map(|(i, j)| next_state(grid, rule, i, j))
        .collect();

    BoundedGrid::from_cells(grid.bounds(), cells)
}

/// Parallel evolution using rayon, one task per column.
/// Produces exactly the same grid as [`tick_with`].
pub fn tick_parallel(grid: &BoundedGrid, rule: &dyn Rule) -> BoundedGrid {
    let (ncols, nrows) = grid.dimensions();
    let cells: Vec<Cell> = (0..ncols)
        .into_par_iter()
        .flat_map_iter(|i| (0..nrows).map(move |j| (i, j)))
        .map(|(i, j)| next_state(grid, rule, i, j))
        .collect();

    BoundedGrid::from_cells(grid.bounds(), cells)
}

fn next_state(grid: &BoundedGrid, rule: &dyn Rule, i: usize, j: usize) -> Cell {
    let current = grid.get_local(i, j).unwrap_or_default();
    rule.evolve(current, count_live_neighbors(grid, i, j))
}

impl BoundedGrid {
    /// Shorthand for [`tick`]
    pub fn tick(&self) -> Self {
        tick(self)
    }
}
