/// Filesystem helpers for resource locations
pub struct FileSystem;
