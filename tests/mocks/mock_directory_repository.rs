use address_book::error::StorageResult;
use address_book::models::Directory;
use address_book::repositories::DirectoryRepository;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock directory repository for testing.
///
/// Keeps the snapshot in memory and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockDirectoryRepository {
    saved: RefCell<Option<Directory>>,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockDirectoryRepository {
    /// Create a new empty MockDirectoryRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds a snapshot.
    pub fn with_directory(directory: Directory) -> Self {
        let repo = Self::new();
        *repo.saved.borrow_mut() = Some(directory);
        repo
    }

    /// The last saved snapshot, if any.
    pub fn saved(&self) -> Option<Directory> {
        self.saved.borrow().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl DirectoryRepository for MockDirectoryRepository {
    fn load(&self) -> StorageResult<Directory> {
        self.track_call("load");
        Ok(self.saved.borrow().clone().unwrap_or_default())
    }

    fn save(&self, directory: &Directory) -> StorageResult<()> {
        self.track_call("save");
        *self.saved.borrow_mut() = Some(directory.clone());
        Ok(())
    }
}
