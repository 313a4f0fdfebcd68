//! Pattern file codecs.
//!
//! Each codec turns pattern text into a [`BoundedGrid`] and, where the format
//! allows it, writes a grid back out. Codecs know nothing about file names;
//! picking one for a path is the caller's job.

mod native;
mod rle;

pub use native::NativeText;
pub use rle::{RleHeader, RunLength};

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::BoundedGrid;
use crate::error::Result;

/// Common decode/encode contract shared by every pattern format
pub trait PatternCodec: Send + Sync {
    /// Short format name used in messages
    fn name(&self) -> &'static str;

    /// Parse pattern text into a grid. No partial grid is returned on failure.
    fn decode(&self, text: &str) -> Result<BoundedGrid>;

    /// Write a grid in this format
    fn encode(&self, grid: &BoundedGrid, out: &mut dyn Write) -> Result<()>;

    /// Read a whole file and decode it
    fn load(&self, path: &Path) -> Result<BoundedGrid> {
        let text = fs::read_to_string(path)?;
        self.decode(&text)
    }

    /// Encode into memory first so a failed encode never leaves a file behind
    fn save(&self, grid: &BoundedGrid, path: &Path) -> Result<()> {
        let mut buf = Vec::new();
        self.encode(grid, &mut buf)?;
        fs::write(path, buf)?;
        Ok(())
    }
}
