//! In-memory filesystem for tests.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use gantry_core::{
    application::{ApplicationError, ports::Filesystem},
    error::GantryResult,
};

/// Thread-safe in-memory filesystem.
///
/// Directories and files are tracked separately; parent directories are not
/// implied (mirroring how the services call `create_dir_all` explicitly).
#[derive(Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
    dirs: Arc<RwLock<HashSet<PathBuf>>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating it unconditionally. Test setup helper.
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files
            .write()
            .expect("memory filesystem lock")
            .insert(path.into(), content.into());
    }

    /// Snapshot of a file's content, if present.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .read()
            .expect("memory filesystem lock")
            .get(path.as_ref())
            .cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.read().expect("memory filesystem lock").len()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> GantryResult<()> {
        let mut dirs = self
            .dirs
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let mut current = PathBuf::new();
        for part in path.components() {
            current.push(part);
            dirs.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str, overwrite: bool) -> GantryResult<()> {
        let mut files = self
            .files
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        if !overwrite && files.contains_key(path) {
            return Err(ApplicationError::FileExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> GantryResult<String> {
        self.files
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
            .and_then(|files| {
                files.get(path).cloned().ok_or_else(|| {
                    ApplicationError::FilesystemError {
                        path: path.to_path_buf(),
                        reason: "Failed to read file: not found".into(),
                    }
                    .into()
                })
            })
    }

    fn set_permissions(&self, _path: &Path, _executable: bool) -> GantryResult<()> {
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.read().expect("memory filesystem lock");
        if files.contains_key(path) {
            return true;
        }
        let dirs = self.dirs.read().expect("memory filesystem lock");
        dirs.contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> GantryResult<()> {
        let mut files = self
            .files
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        files.retain(|p, _| !p.starts_with(path));
        let mut dirs = self
            .dirs
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        dirs.retain(|p| !p.starts_with(path));
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_and_read() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("/p/main.go", "package main\n");
        assert_eq!(
            fs.read_to_string(Path::new("/p/main.go")).unwrap(),
            "package main\n"
        );
        assert!(fs.exists(Path::new("/p/main.go")));
    }

    #[test]
    fn overwrite_semantics_match_local() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("/a"), "1", false).unwrap();
        assert!(fs.write_file(Path::new("/a"), "2", false).is_err());
        fs.write_file(Path::new("/a"), "2", true).unwrap();
        assert_eq!(fs.file("/a").as_deref(), Some("2"));
    }

    #[test]
    fn remove_dir_all_drops_subtree() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p/internal")).unwrap();
        fs.seed_file("/p/internal/x.go", "x");
        fs.seed_file("/q/y.go", "y");
        fs.remove_dir_all(Path::new("/p")).unwrap();
        assert!(!fs.exists(Path::new("/p/internal/x.go")));
        assert!(fs.exists(Path::new("/q/y.go")));
    }
}
