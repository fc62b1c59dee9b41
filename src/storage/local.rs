use super::{Storage, parent_dir};
use crate::error::PrepError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// [`Storage`] backed by the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

/// Sibling path the output is staged at before being renamed into place.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

impl Storage for LocalStorage {
    fn read(&self, path: &Path) -> Result<Vec<u8>, PrepError> {
        fs::read(path).map_err(|e| PrepError::InputRead(path.to_path_buf(), e))
    }

    fn ensure_parent_dir(&self, path: &Path) -> Result<(), PrepError> {
        if let Some(dir) = parent_dir(path) {
            debug!(dir = %dir.display(), "Ensuring output directory");
            fs::create_dir_all(dir)
                .map_err(|e| PrepError::OutputDirCreation(dir.to_path_buf(), e))?;
        }
        Ok(())
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), PrepError> {
        let staging = staging_path(path);
        let result = fs::write(&staging, contents).and_then(|_| fs::rename(&staging, path));
        if let Err(e) = result {
            let _ = fs::remove_file(&staging);
            return Err(PrepError::OutputWrite(path.to_path_buf(), e));
        }
        Ok(())
    }
}
