use macroquad::prelude::*;

use crate::application::{Camera, ViewerState};
use crate::domain::BoundedGrid;

/// Unzoomed size of one cell in pixels
pub const CELL_SIZE: f32 = 10.0;
/// Height of the status bar along the bottom edge
pub const STATUS_HEIGHT: f32 = 28.0;

const BACKGROUND_COLOR: Color = Color::new(0.8, 0.8, 0.8, 1.0);
const WINDOW_COLOR: Color = Color::new(0.9, 0.9, 0.9, 1.0);
const CELL_COLOR: Color = Color::new(0.6588, 0.4706, 0.4314, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.35, 0.35, 0.35, 1.0);
const STATUS_COLOR: Color = Color::new(0.12, 0.12, 0.12, 1.0);

/// Size of the drawable area above the status bar
pub fn grid_area() -> (f32, f32) {
    (screen_width(), screen_height() - STATUS_HEIGHT)
}

/// Draw the window, its live cells and (optionally) the cell grid.
/// Only `bounds()` and `live_cells()` are consulted.
pub fn draw_grid(grid: &BoundedGrid, camera: &Camera, show_grid_lines: bool) {
    let bounds = grid.bounds();
    let (ncols, nrows) = grid.dimensions();
    let size = CELL_SIZE * camera.zoom;
    let (area_width, area_height) = grid_area();

    clear_background(BACKGROUND_COLOR);

    // top-left corner of the window is the top row, i.e. local row nrows-1
    let (left, top) = camera.cell_to_screen(0, nrows - 1, nrows, CELL_SIZE);
    let (width, height) = (ncols as f32 * size, nrows as f32 * size);
    draw_rectangle(left, top, width, height, WINDOW_COLOR);

    for (x, y) in grid.live_cells() {
        let (i, j) = bounds.world_to_local(x, y);
        let (sx, sy) = camera.cell_to_screen(i as usize, j as usize, nrows, CELL_SIZE);

        // Skip if outside viewport
        if sx + size < 0.0 || sx > area_width || sy + size < 0.0 || sy > area_height {
            continue;
        }
        draw_rectangle(sx, sy, size, size, CELL_COLOR);
    }

    // grid lines only when cells are big enough to tell apart
    if show_grid_lines && size >= 4.0 {
        let thickness = (size / 20.0).clamp(1.0, 2.0);
        for i in 0..=ncols {
            let x = left + i as f32 * size;
            if (0.0..=area_width).contains(&x) {
                draw_line(x, top.max(0.0), x, (top + height).min(area_height), thickness, GRID_LINE_COLOR);
            }
        }
        for j in 0..=nrows {
            let y = top + j as f32 * size;
            if (0.0..=area_height).contains(&y) {
                draw_line(left.max(0.0), y, (left + width).min(area_width), y, thickness, GRID_LINE_COLOR);
            }
        }
    }
}

/// Draw the status bar: window, generation, population, rule and speed
pub fn draw_status(state: &ViewerState, camera: &Camera, message: Option<&str>) {
    let top = screen_height() - STATUS_HEIGHT;
    draw_rectangle(0.0, top, screen_width(), STATUS_HEIGHT, STATUS_COLOR);

    let text = match message {
        Some(message) => message.to_owned(),
        None => format!(
            "window {} | gen {} | pop {} | {} | {:.0} gen/s | tick {:.1}ms | zoom {:.1}x | {}",
            state.grid.bounds(),
            state.generation,
            state.grid.population(),
            state.rule.name(),
            state.updates_per_second,
            state.last_tick_ms,
            camera.zoom,
            if state.is_running { "running" } else { "paused" },
        ),
    };
    let color = if message.is_some() { ORANGE } else { LIGHTGRAY };
    draw_text(&text, 8.0, top + STATUS_HEIGHT * 0.7, 18.0, color);
}
