mod camera;
mod driver;
mod format;
mod viewer_state;

pub use camera::Camera;
pub use driver::{generation_path, load_pattern, run, DriverConfig};
pub use format::PatternFormat;
pub use viewer_state::{ViewerState, PARALLEL_THRESHOLD};
