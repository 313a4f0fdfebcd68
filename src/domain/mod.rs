mod bounds;
mod cell;
mod grid;
mod neighbors;
mod rules;
mod transition;

pub use bounds::{Bounds, MAX_CELLS};
pub use cell::Cell;
pub use grid::BoundedGrid;
pub use neighbors::count_live_neighbors;
pub use rules::{ConwayRule, LifeLikeRule, Rule};
pub use transition::{tick, tick_parallel, tick_with};
