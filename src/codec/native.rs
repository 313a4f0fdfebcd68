//! Line-oriented native text format.
//!
//! ```text
//! # comments and blank lines are ignored
//! <xmin> <xmax> <ymin> <ymax>
//! <x> <y>
//! <x> <y>
//! ```

use std::io::Write;

use tracing::debug;

use super::PatternCodec;
use crate::domain::{Bounds, BoundedGrid};
use crate::error::{LifeError, Result};

/// Codec for the native `.txt` format
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeText;

impl PatternCodec for NativeText {
    fn name(&self) -> &'static str {
        "native"
    }

    fn decode(&self, text: &str) -> Result<BoundedGrid> {
        let mut grid: Option<BoundedGrid> = None;

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let fields = parse_integers(trimmed, line_no)?;
            match grid.as_mut() {
                None => {
                    let &[xmin, xmax, ymin, ymax] = fields.as_slice() else {
                        return Err(LifeError::format(
                            line_no,
                            format!(
                                "expected bounds `xmin xmax ymin ymax`, found {} fields",
                                fields.len()
                            ),
                        ));
                    };
                    grid = Some(BoundedGrid::empty(Bounds::new(xmin, xmax, ymin, ymax)?));
                }
                Some(grid) => {
                    let &[x, y] = fields.as_slice() else {
                        return Err(LifeError::format(
                            line_no,
                            format!("expected live cell `x y`, found {} fields", fields.len()),
                        ));
                    };
                    grid.set_alive(x, y)?;
                }
            }
        }

        let grid = grid.ok_or_else(|| {
            LifeError::format(text.lines().count(), "missing bounds line")
        })?;
        debug!(
            bounds = %grid.bounds(),
            population = grid.population(),
            "decoded native pattern"
        );
        Ok(grid)
    }

    fn encode(&self, grid: &BoundedGrid, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "# grid view bounds, in terms of cell coordinates")?;
        writeln!(out, "# format: <xmin> <xmax> <ymin> <ymax>")?;
        writeln!(out, "{}", grid.bounds())?;
        writeln!(out)?;
        writeln!(out, "# live cells, specified by <column> <row>")?;
        for (x, y) in grid.live_cells() {
            writeln!(out, "{x} {y}")?;
        }
        Ok(())
    }
}

fn parse_integers(line: &str, line_no: usize) -> Result<Vec<i64>> {
    line.split_whitespace()
        .map(|field| {
            field
                .parse::<i64>()
                .map_err(|_| LifeError::format(line_no, format!("`{field}` is not an integer")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_to_string(grid: &BoundedGrid) -> String {
        let mut buf = Vec::new();
        NativeText.encode(grid, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_decode_skips_comments_and_blanks() {
        let text = "# a blinker\n\n   # indented comment\n-1 3 -1 3\n\n1 0\n1 1\n  1 2  \n";
        let grid = NativeText.decode(text).unwrap();
        assert_eq!(grid.bounds().as_tuple(), (-1, 3, -1, 3));
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_duplicate_cells_are_harmless() {
        let grid = NativeText.decode("0 2 0 2\n1 1\n1 1\n").unwrap();
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_encode_layout() {
        let bounds = Bounds::new(-1, 3, -1, 3).unwrap();
        let grid = BoundedGrid::new(bounds, [(2, 1), (0, 1), (1, 1)]).unwrap();
        let expected = "\
# grid view bounds, in terms of cell coordinates
# format: <xmin> <xmax> <ymin> <ymax>
-1 3 -1 3

# live cells, specified by <column> <row>
0 1
1 1
2 1
";
        assert_eq!(encode_to_string(&grid), expected);
    }

    #[test]
    fn test_round_trip() {
        let bounds = Bounds::new(-7, 4, -3, 9).unwrap();
        let cells = [(-7, -3), (4, 9), (0, 0), (-2, 5), (3, -1)];
        let grid = BoundedGrid::new(bounds, cells).unwrap();
        let decoded = NativeText.decode(&encode_to_string(&grid)).unwrap();
        assert_eq!(decoded, grid);
    }

    #[test]
    fn test_missing_bounds_is_format_error() {
        let err = NativeText.decode("# nothing here\n\n").unwrap_err();
        assert!(err.is_format());
        assert!(NativeText.decode("").unwrap_err().is_format());
    }

    #[test]
    fn test_malformed_bounds_line() {
        let err = NativeText.decode("0 1 2\n").unwrap_err();
        assert!(matches!(err, LifeError::Format { line: 1, .. }));
        let err = NativeText.decode("# c\n0 1 two 3\n").unwrap_err();
        assert!(matches!(err, LifeError::Format { line: 2, .. }));
    }

    #[test]
    fn test_inverted_bounds_is_domain_error() {
        assert!(NativeText.decode("3 0 0 3\n").unwrap_err().is_domain());
    }

    #[test]
    fn test_huge_bounds_are_rejected_not_allocated() {
        let err = NativeText.decode("0 9223372036854775807 0 0\n").unwrap_err();
        assert!(matches!(err, LifeError::InvalidBounds { .. }));
        let err = NativeText
            .decode("-9223372036854775808 9223372036854775807 0 0\n")
            .unwrap_err();
        assert!(err.is_domain());
        assert!(NativeText.decode("0 999999 0 999999\n").unwrap_err().is_domain());
    }

    #[test]
    fn test_malformed_cell_lines() {
        let err = NativeText.decode("0 2 0 2\n1\n").unwrap_err();
        assert!(matches!(err, LifeError::Format { line: 2, .. }));
        let err = NativeText.decode("0 2 0 2\n1 1 1\n").unwrap_err();
        assert!(err.is_format());
        let err = NativeText.decode("0 2 0 2\n1 x\n").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_cell_outside_window_is_domain_error() {
        let err = NativeText.decode("0 2 0 2\n3 3\n").unwrap_err();
        assert!(matches!(err, LifeError::OutOfBounds { x: 3, y: 3, .. }));
    }
}
