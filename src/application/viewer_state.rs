use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use super::load_pattern;
use crate::domain::{tick_parallel, tick_with, BoundedGrid, ConwayRule, Rule};
use crate::error::Result;

/// Windows with more cells than this are ticked on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 250 * 250;

/// ViewerState orchestrates the interactive viewer.
/// It owns the current grid; rendering and input only borrow it.
pub struct ViewerState {
    pub grid: BoundedGrid,
    pub source: Option<PathBuf>,
    pub rule: Box<dyn Rule>,
    pub is_running: bool,
    pub show_grid_lines: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_tick_ms: f32,
    /// Last cursor position while middle-dragging
    pub pan_anchor: Option<(f32, f32)>,
}

impl ViewerState {
    /// Start from an in-memory grid
    pub fn new(grid: BoundedGrid) -> Self {
        Self {
            grid,
            source: None,
            rule: Box::new(ConwayRule),
            is_running: false,
            show_grid_lines: true,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: 10.0,
            last_tick_ms: 0.0,
            pan_anchor: None,
        }
    }

    /// Start from a pattern file, honouring a rule named in an RLE header
    pub fn load(path: PathBuf) -> Result<Self> {
        let (grid, rule) = load_pattern(&path)?;
        let mut state = Self::new(grid);
        if let Some(rule) = rule {
            state.rule = Box::new(rule);
        }
        state.source = Some(path);
        Ok(state)
    }

    /// Re-read the source file, if any, picking up its grid and header rule.
    /// On failure the current grid and rule are kept.
    pub fn reload(&mut self) -> Result<()> {
        if let Some(path) = &self.source {
            let (grid, rule) = load_pattern(path)?;
            self.grid = grid;
            self.rule = match rule {
                Some(rule) => Box::new(rule),
                None => Box::new(ConwayRule),
            };
            self.generation = 0;
            self.is_running = false;
        }
        Ok(())
    }

    /// Advance exactly one generation
    pub fn step(mut self) -> Self {
        let start = Instant::now();
        let (ncols, nrows) = self.grid.dimensions();
        self.grid = if ncols * nrows > PARALLEL_THRESHOLD {
            tick_parallel(&self.grid, self.rule.as_ref())
        } else {
            tick_with(&self.grid, self.rule.as_ref())
        };
        self.last_tick_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        debug!(generation = self.generation, ms = self.last_tick_ms, "ticked");
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    pub fn toggle_grid_lines(mut self) -> Self {
        self.show_grid_lines = !self.show_grid_lines;
        self
    }

    /// Flip one cell by world coordinate; ignored outside the window
    pub fn toggle_cell(&mut self, x: i64, y: i64) {
        let toggled = self
            .grid
            .get(x, y)
            .and_then(|cell| self.grid.set(x, y, cell.toggle()));
        if let Err(err) = toggled {
            debug!(%err, "click outside the window");
        }
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Randomize grid and reset generation counter
    pub fn randomize(mut self) -> Self {
        self.grid.randomize(0.3);
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Update simulation by one frame
    pub fn advance(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= 1.0 / self.updates_per_second {
            self.update_timer = 0.0;
            self = self.step();
        }
        self
    }
}
