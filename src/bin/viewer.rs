//! Interactive viewer for a pattern file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use life_window::application::{Camera, ViewerState};
use life_window::{input, rendering};
use macroquad::prelude::*;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Show a pattern file and step it through generations.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct ViewerArgs {
    /// Pattern file (`.txt` native or `.rle`)
    file: PathBuf,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: 900,
        window_height: 900,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = ViewerArgs::parse();
    let state = ViewerState::load(args.file.clone())
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    macroquad::Window::from_config(window_conf(), event_loop(state));
    Ok(())
}

async fn event_loop(mut state: ViewerState) {
    let mut camera = Camera::new();
    let (ncols, nrows) = state.grid.dimensions();
    camera.fit(ncols, nrows, rendering::grid_area(), rendering::CELL_SIZE);
    let mut message: Option<String> = None;

    loop {
        let mouse_pos = mouse_position();

        input::handle_zoom(&mut camera);
        input::handle_pan(&mut state, &mut camera, mouse_pos);
        input::handle_mouse_toggle(&mut state, &camera, mouse_pos);
        if let Err(err) = input::handle_reload(&mut state) {
            warn!(%err, "reload failed");
            message = Some(format!("reload failed: {err}"));
        } else if is_key_pressed(KeyCode::O) {
            message = None;
        }
        state = input::process_keyboard_input(state, &mut camera);

        state = state.advance(get_frame_time());

        rendering::draw_grid(&state.grid, &camera, state.show_grid_lines);
        rendering::draw_status(&state, &camera, message.as_deref());

        if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
            break;
        }
        next_frame().await;
    }
}
