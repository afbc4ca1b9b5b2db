use super::traits::DirectoryRepository;
use crate::error::StorageResult;
use crate::models::Directory;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Directory repository that keeps the snapshot in a JSON file.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the snapshot is written to before it replaces the real one.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DirectoryRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<Directory> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No snapshot found, starting empty");
                return Ok(Directory::new());
            }
            Err(e) => return Err(e.into()),
        };

        let directory: Directory = serde_json::from_str(&data)?;
        info!(
            path = %self.path.display(),
            records = directory.len(),
            "Loaded address book"
        );
        Ok(directory)
    }

    fn save(&self, directory: &Directory) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Rename is atomic, so a failed write never leaves a half-written snapshot
        let json = serde_json::to_string_pretty(directory)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;
        info!(
            path = %self.path.display(),
            records = directory.len(),
            "Saved address book"
        );
        Ok(())
    }
}
