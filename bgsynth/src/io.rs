use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use assetkit::AssetError;

use crate::record::JsonRecord;

/// Append-only JSON-lines log of written backgrounds.
pub struct Manifest {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl Manifest {
    /// Creates (truncating) the manifest file and any missing parent dirs.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let file = File::create(&path)?;
        Ok(Self {
            path,
            writer: BufWriter::with_capacity(64 << 10, file),
        })
    }

    pub fn append(&mut self, rec: &JsonRecord<'_>) -> Result<(), AssetError> {
        serde_json::to_writer(&mut self.writer, rec)
            .map_err(io::Error::from)
            .and_then(|_| writeln!(self.writer))
            .map_err(|source| AssetError::Manifest {
                path: self.path.clone(),
                source,
            })
    }

    pub fn finalize(self) -> io::Result<()> {
        self.writer.into_inner()?.sync_all()
    }
}
