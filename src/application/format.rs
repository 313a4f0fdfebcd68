use std::path::Path;

use crate::codec::{NativeText, PatternCodec, RunLength};
use crate::error::{LifeError, Result};

/// Pattern file formats the binaries can pick by extension
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternFormat {
    /// `.txt`
    Native,
    /// `.rle`
    Rle,
}

impl PatternFormat {
    /// Select a format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("txt") => Ok(Self::Native),
            Some("rle") => Ok(Self::Rle),
            _ => Err(LifeError::UnknownFormat(path.display().to_string())),
        }
    }

    pub fn codec(self) -> &'static dyn PatternCodec {
        match self {
            Self::Native => &NativeText,
            Self::Rle => &RunLength,
        }
    }
}
