use super::{Bounds, Cell};
use crate::error::Result;

/// A dense grid of cells covering one [`Bounds`] window.
///
/// Cells are stored column-major (column outer, row inner), which is also the
/// order [`BoundedGrid::live_cells`] reports them in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid {
    bounds: Bounds,
    cells: Vec<Cell>,
}

impl BoundedGrid {
    /// Create a grid with every cell dead
    pub fn empty(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: vec![Cell::Dead; bounds.ncols() * bounds.nrows()],
        }
    }

    /// Create a grid and bring each listed world coordinate to life.
    /// Fails if any coordinate lies outside the window.
    pub fn new<I>(bounds: Bounds, live_cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut grid = Self::empty(bounds);
        for (x, y) in live_cells {
            grid.set_alive(x, y)?;
        }
        Ok(grid)
    }

    /// Assemble a grid from column-major cells computed elsewhere
    pub(crate) fn from_cells(bounds: Bounds, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), bounds.ncols() * bounds.nrows());
        Self { bounds, cells }
    }

    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// `(ncols, nrows)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.bounds.ncols(), self.bounds.nrows())
    }

    /// Convert local coordinates to the flat index
    const fn index(&self, i: usize, j: usize) -> usize {
        i * self.bounds.nrows() + j
    }

    /// Get cell at a local position, `None` outside the window
    pub fn get_local(&self, i: usize, j: usize) -> Option<Cell> {
        let (ncols, nrows) = self.dimensions();
        (i < ncols && j < nrows).then(|| self.cells[self.index(i, j)])
    }

    /// Set a cell by world coordinate
    pub fn set(&mut self, x: i64, y: i64, cell: Cell) -> Result<()> {
        let (i, j) = self.bounds.locate(x, y)?;
        let idx = self.index(i, j);
        self.cells[idx] = cell;
        Ok(())
    }

    pub fn set_alive(&mut self, x: i64, y: i64) -> Result<()> {
        self.set(x, y, Cell::Alive)
    }

    pub fn set_dead(&mut self, x: i64, y: i64) -> Result<()> {
        self.set(x, y, Cell::Dead)
    }

    /// Get cell by world coordinate
    pub fn get(&self, x: i64, y: i64) -> Result<Cell> {
        let (i, j) = self.bounds.locate(x, y)?;
        Ok(self.cells[self.index(i, j)])
    }

    pub fn is_alive(&self, x: i64, y: i64) -> Result<bool> {
        self.get(x, y).map(Cell::is_alive)
    }

    /// World positions of every live cell, column ascending then row
    /// ascending. Calling it again restarts the enumeration.
    pub fn live_cells(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        let nrows = self.bounds.nrows();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(idx, _)| self.bounds.local_to_world(idx / nrows, idx % nrows))
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill the window with random soup, each cell alive with probability `density`
    pub fn randomize(&mut self, density: f64) {
        use rand::Rng;
        let mut rng = rand::rng();
        let density = density.clamp(0.0, 1.0);

        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;

    fn bounds(xmin: i64, xmax: i64, ymin: i64, ymax: i64) -> Bounds {
        Bounds::new(xmin, xmax, ymin, ymax).unwrap()
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = BoundedGrid::empty(bounds(-3, 3, -3, 3));
        assert_eq!(grid.dimensions(), (7, 7));
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.live_cells().count(), 0);
    }

    #[test]
    fn test_new_with_live_cells() {
        let grid = BoundedGrid::new(bounds(-1, 1, -1, 1), [(-1, -1), (1, 1), (1, 1)]).unwrap();
        assert!(grid.is_alive(-1, -1).unwrap());
        assert!(grid.is_alive(1, 1).unwrap());
        assert!(!grid.is_alive(0, 0).unwrap());
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_new_rejects_cell_outside_window() {
        let err = BoundedGrid::new(bounds(0, 2, 0, 2), [(3, 0)]).unwrap_err();
        assert!(matches!(err, LifeError::OutOfBounds { x: 3, y: 0, .. }));
    }

    #[test]
    fn test_set_and_query_bounds_checked() {
        let mut grid = BoundedGrid::empty(bounds(10, 12, -5, -4));
        grid.set_alive(12, -4).unwrap();
        assert!(grid.is_alive(12, -4).unwrap());
        grid.set_dead(12, -4).unwrap();
        assert!(!grid.is_alive(12, -4).unwrap());

        assert!(grid.set_alive(9, -4).unwrap_err().is_domain());
        assert!(grid.set_dead(10, -3).is_err());
        assert!(grid.is_alive(13, -5).is_err());
    }

    #[test]
    fn test_get_local_uses_window_offset() {
        let grid = BoundedGrid::new(bounds(-2, 2, -2, 2), [(-2, -2), (0, 1)]).unwrap();
        assert_eq!(grid.get_local(0, 0), Some(Cell::Alive));
        assert_eq!(grid.get_local(2, 3), Some(Cell::Alive));
        assert_eq!(grid.get_local(2, 2), Some(Cell::Dead));
        assert_eq!(grid.get_local(5, 0), None);
    }

    #[test]
    fn test_live_cells_column_major_order() {
        let grid = BoundedGrid::new(
            bounds(-1, 1, -1, 1),
            [(1, -1), (-1, 1), (0, 0), (-1, -1), (1, 1)],
        )
        .unwrap();
        let cells: Vec<_> = grid.live_cells().collect();
        assert_eq!(cells, vec![(-1, -1), (-1, 1), (0, 0), (1, -1), (1, 1)]);
        // restartable
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), cells);
    }

    #[test]
    fn test_clear() {
        let mut grid = BoundedGrid::new(bounds(0, 4, 0, 4), [(0, 0), (4, 4)]).unwrap();
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_randomize_density_extremes() {
        let mut grid = BoundedGrid::empty(bounds(0, 9, 0, 9));
        grid.randomize(1.0);
        assert_eq!(grid.population(), 100);
        grid.randomize(0.0);
        assert_eq!(grid.population(), 0);
    }
}
