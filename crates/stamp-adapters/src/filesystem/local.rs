//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use stamp_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StampError, StampResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StampResult<()> {
        // Default mode is 0o777 masked by the process umask.
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> StampResult<()> {
        // The handle is dropped (closed) on every exit path of this scope.
        let mut file =
            std::fs::File::create(path).map_err(|e| map_io_error(path, e, "create file"))?;
        file.write_all(content)
            .map_err(|e| map_io_error(path, e, "write file"))?;
        file.flush().map_err(|e| map_io_error(path, e, "flush file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> StampResult<()> {
        match std::fs::remove_dir_all(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_error(path, e, "remove directory")),
        }
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StampError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_all_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a/b/c");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn write_file_truncates_existing_content() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("out.txt");
        let fs = LocalFilesystem::new();

        fs.write_file(&file, b"a much longer first version").unwrap();
        fs.write_file(&file, b"short").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "short");
    }

    #[test]
    fn write_file_without_parent_reports_path() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("missing/out.txt");

        let err = LocalFilesystem::new().write_file(&file, b"x").unwrap_err();
        match err {
            StampError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, file);
                assert!(reason.contains("create file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn remove_dir_all_tolerates_missing_path() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.remove_dir_all(&temp.path().join("nope")).is_ok());
    }

    #[test]
    fn remove_dir_all_is_recursive() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("svc/template");
        let fs = LocalFilesystem::new();
        fs.create_dir_all(&root.join("nested")).unwrap();
        fs.write_file(&root.join("nested/f.txt"), b"x").unwrap();

        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
        assert!(fs.exists(&temp.path().join("svc")));
    }
}
