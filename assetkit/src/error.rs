use std::{io, path::PathBuf};

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Everything that can make a single asset fail. The batch driver logs it
/// and moves on to the next index.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("invalid canvas size {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("palette has no colors")]
    EmptyPalette,

    #[error("cannot create output directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot encode {}: {source}", path.display())]
    Encode { path: PathBuf, source: BoxError },

    #[error("cannot append manifest record for {}: {source}", path.display())]
    Manifest { path: PathBuf, source: io::Error },
}

impl AssetError {
    pub fn encode(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        AssetError::Encode {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub fn check_dimensions(width: u32, height: u32) -> Result<(), AssetError> {
    if width == 0 || height == 0 {
        return Err(AssetError::InvalidDimensions { width, height });
    }
    Ok(())
}
