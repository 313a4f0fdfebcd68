use macroquad::prelude::*;

use crate::application::{Camera, ViewerState};
use crate::error::Result;
use crate::rendering::{grid_area, CELL_SIZE};

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Handle pan with middle mouse button drag
pub fn handle_pan(state: &mut ViewerState, camera: &mut Camera, mouse_pos: (f32, f32)) {
    if is_mouse_button_down(MouseButton::Middle) {
        if let Some(last) = state.pan_anchor {
            camera.pan(mouse_pos.0 - last.0, mouse_pos.1 - last.1);
        }
        state.pan_anchor = Some(mouse_pos);
    } else {
        state.pan_anchor = None;
    }
}

/// Left click flips the cell under the cursor while paused
pub fn handle_mouse_toggle(state: &mut ViewerState, camera: &Camera, mouse_pos: (f32, f32)) {
    let (_, area_height) = grid_area();
    if state.is_running || mouse_pos.1 >= area_height || !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }

    let (ncols, nrows) = state.grid.dimensions();
    let (i, j) = camera.screen_to_cell(mouse_pos.0, mouse_pos.1, nrows, CELL_SIZE);
    if i < 0 || j < 0 || i >= ncols as i64 || j >= nrows as i64 {
        return;
    }
    let (x, y) = state.grid.bounds().local_to_world(i as usize, j as usize);
    state.toggle_cell(x, y);
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: ViewerState, camera: &mut Camera) -> ViewerState {
    type KeyAction = (KeyCode, fn(ViewerState) -> ViewerState);

    let actions: [KeyAction; 8] = [
        (KeyCode::Space, ViewerState::toggle_running),
        (KeyCode::T, ViewerState::step),
        (KeyCode::Right, ViewerState::step),
        (KeyCode::G, ViewerState::toggle_grid_lines),
        (KeyCode::C, ViewerState::clear),
        (KeyCode::R, ViewerState::randomize),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Fit the window back into view with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        let (ncols, nrows) = new_state.grid.dimensions();
        camera.fit(ncols, nrows, grid_area(), CELL_SIZE);
    }

    new_state
}

/// Re-read the pattern file with 'O'
pub fn handle_reload(state: &mut ViewerState) -> Result<()> {
    if is_key_pressed(KeyCode::O) {
        state.reload()?;
    }
    Ok(())
}
