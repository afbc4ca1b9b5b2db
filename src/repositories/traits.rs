use crate::error::StorageResult;
use crate::models::Directory;

/// Repository for the directory snapshot.
///
/// Provides abstraction over where the address book is kept between runs,
/// enabling different implementations (file, in-memory mock).
pub trait DirectoryRepository {
    /// Load the saved directory, or an empty one if nothing has been saved yet.
    fn load(&self) -> StorageResult<Directory>;

    /// Replace the saved directory with `directory`.
    fn save(&self, directory: &Directory) -> StorageResult<()>;
}
