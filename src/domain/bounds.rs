//! The inclusive window onto the infinite plane and the two coordinate
//! spaces that live on it.
//!
//! World coordinates are absolute and may be negative. Local coordinates are
//! zero-based array indices: `local = world - (xmin, ymin)`.

use std::fmt;

use crate::error::{LifeError, Result};

/// Largest window a grid may be allocated for, in cells (16384 x 16384)
pub const MAX_CELLS: usize = 1 << 28;

/// Inclusive cell bounds `xmin..=xmax` by `ymin..=ymax`, in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    xmin: i64,
    xmax: i64,
    ymin: i64,
    ymax: i64,
    ncols: usize,
    nrows: usize,
}

/// Cells spanned by `min..=max`, `None` when inverted or too wide for `usize`
fn span(min: i64, max: i64) -> Option<usize> {
    if max < min {
        return None;
    }
    let extent = i128::from(max) - i128::from(min) + 1;
    usize::try_from(extent).ok()
}

impl Bounds {
    /// Validate and build a window. Fails if either axis is inverted or the
    /// window holds more than [`MAX_CELLS`] cells.
    pub fn new(xmin: i64, xmax: i64, ymin: i64, ymax: i64) -> Result<Self> {
        let invalid = || LifeError::InvalidBounds {
            xmin,
            xmax,
            ymin,
            ymax,
        };
        let ncols = span(xmin, xmax).ok_or_else(invalid)?;
        let nrows = span(ymin, ymax).ok_or_else(invalid)?;
        match ncols.checked_mul(nrows) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => return Err(invalid()),
        }
        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
            ncols,
            nrows,
        })
    }

    pub const fn xmin(&self) -> i64 {
        self.xmin
    }

    pub const fn xmax(&self) -> i64 {
        self.xmax
    }

    pub const fn ymin(&self) -> i64 {
        self.ymin
    }

    pub const fn ymax(&self) -> i64 {
        self.ymax
    }

    /// `(xmin, xmax, ymin, ymax)`
    pub const fn as_tuple(&self) -> (i64, i64, i64, i64) {
        (self.xmin, self.xmax, self.ymin, self.ymax)
    }

    /// Number of columns in the window
    pub const fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of rows in the window
    pub const fn nrows(&self) -> usize {
        self.nrows
    }

    pub const fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.xmin && x <= self.xmax && y >= self.ymin && y <= self.ymax
    }

    /// Pure translation into local space. The result may be negative or past
    /// the end when `(x, y)` is outside the window; see [`Bounds::locate`].
    pub const fn world_to_local(&self, x: i64, y: i64) -> (i64, i64) {
        (x - self.xmin, y - self.ymin)
    }

    pub const fn local_to_world(&self, i: usize, j: usize) -> (i64, i64) {
        (i as i64 + self.xmin, j as i64 + self.ymin)
    }

    /// Checked world-to-local translation yielding array indices.
    pub fn locate(&self, x: i64, y: i64) -> Result<(usize, usize)> {
        if !self.contains(x, y) {
            return Err(LifeError::OutOfBounds { x, y, bounds: *self });
        }
        let (i, j) = self.world_to_local(x, y);
        Ok((i as usize, j as usize))
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.xmin, self.xmax, self.ymin, self.ymax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let b = Bounds::new(-2, 3, -1, 0).unwrap();
        assert_eq!(b.ncols(), 6);
        assert_eq!(b.nrows(), 2);
        assert_eq!(b.as_tuple(), (-2, 3, -1, 0));
    }

    #[test]
    fn test_single_cell_window() {
        let b = Bounds::new(0, 0, 0, 0).unwrap();
        assert_eq!((b.ncols(), b.nrows()), (1, 1));
    }

    #[test]
    fn test_inverted_axes_rejected() {
        assert!(matches!(
            Bounds::new(1, 0, 0, 0),
            Err(LifeError::InvalidBounds { xmin: 1, xmax: 0, .. })
        ));
        assert!(Bounds::new(0, 0, 5, 4).unwrap_err().is_domain());
    }

    #[test]
    fn test_oversized_windows_rejected() {
        assert!(matches!(
            Bounds::new(0, i64::MAX, 0, 0),
            Err(LifeError::InvalidBounds { .. })
        ));
        assert!(Bounds::new(i64::MIN, i64::MAX, 0, 0).is_err());
        assert!(Bounds::new(0, 0, i64::MIN, 0).is_err());
        assert!(Bounds::new(0, 1 << 20, 0, 1 << 20).unwrap_err().is_domain());

        // exactly at the cap is still allowed
        let b = Bounds::new(0, (1 << 14) - 1, -(1 << 14), -1).unwrap();
        assert_eq!(b.ncols() * b.nrows(), MAX_CELLS);
    }

    #[test]
    fn test_transforms_are_inverse() {
        let b = Bounds::new(-5, 5, -3, 7).unwrap();
        assert_eq!(b.world_to_local(-5, -3), (0, 0));
        assert_eq!(b.world_to_local(0, 0), (5, 3));
        assert_eq!(b.local_to_world(5, 3), (0, 0));
        assert_eq!(b.local_to_world(10, 10), (5, 7));
    }

    #[test]
    fn test_locate_checks_window() {
        let b = Bounds::new(-1, 1, -1, 1).unwrap();
        assert_eq!(b.locate(1, -1).unwrap(), (2, 0));
        let err = b.locate(2, 0).unwrap_err();
        assert!(matches!(err, LifeError::OutOfBounds { x: 2, y: 0, .. }));
        assert!(b.locate(0, -2).is_err());
    }

    #[test]
    fn test_display_matches_native_bounds_line() {
        let b = Bounds::new(-1, 3, -1, 3).unwrap();
        assert_eq!(b.to_string(), "-1 3 -1 3");
    }
}
