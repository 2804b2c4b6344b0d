//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use gantry_core::{application::ports::Filesystem, error::GantryResult};

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
    fn create_dir_all(&self, path: &Path) -> GantryResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str, overwrite: bool) -> GantryResult<()> {
        if !overwrite && path.exists() {
            return Err(gantry_core::application::ApplicationError::FileExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> GantryResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> GantryResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if executable {
                let metadata =
                    std::fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
                let mut perms = metadata.permissions();
                let mode = perms.mode();
                perms.set_mode(mode | 0o111);
                std::fs::set_permissions(path, perms)
                    .map_err(|e| map_io_error(path, e, "set permissions"))?;
            }
        }
        #[cfg(windows)]
        {
            // Windows doesn't have executable bit in the same way
            let _ = executable; // Silence unused warning
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> GantryResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> gantry_core::error::GantryError {
    use gantry_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::application::ApplicationError;
    use gantry_core::error::GantryError;

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.go");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "package main\n", false).unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "package main\n");
    }

    #[test]
    fn write_refuses_to_clobber_without_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.go");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "a", false).unwrap();
        let err = fs.write_file(&path, "b", false).unwrap_err();
        assert!(matches!(
            err,
            GantryError::Application(ApplicationError::FileExists { .. })
        ));
        // Original content untouched
        assert_eq!(fs.read_to_string(&path).unwrap(), "a");
    }

    #[test]
    fn write_with_overwrite_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.go");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "a", false).unwrap();
        fs.write_file(&path, "b", true).unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "b");
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.read_to_string(&dir.path().join("nope.go")).is_err());
    }

    #[test]
    fn create_and_remove_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));
        fs.remove_dir_all(&dir.path().join("a")).unwrap();
        assert!(!fs.exists(&nested));
    }
}
