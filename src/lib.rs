//! Conway's Game of Life on a bounded window of the plane, with readers and
//! writers for pattern files.

// Domain layer - grid, neighbor counting, transition rules
pub mod domain;

// Pattern file codecs
pub mod codec;

pub mod error;

// Application layer - driver, viewer state, format selection
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use application::{generation_path, PatternFormat};
pub use codec::{NativeText, PatternCodec, RunLength};
pub use domain::{tick, BoundedGrid, Bounds, Cell};
pub use error::{LifeError, Result};
