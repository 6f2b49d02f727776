//! Test utilities: an in-memory directory lister and a temporary directory
//! builder.
//!
//! This module is only compiled for tests, benchmarks, and the `test-utils`
//! feature.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::listing::{DirLister, Entry, EntryKind, base_name};

/// In-memory `DirLister` that counts and records every listing call.
///
/// Entries are returned in insertion order, not sorted, so consumers have to
/// do their own ordering.
#[derive(Debug, Default)]
pub struct MockLister {
    dirs: BTreeMap<PathBuf, Vec<Entry>>,
    denied: BTreeSet<PathBuf>,
    calls: Cell<usize>,
    listed: RefCell<Vec<PathBuf>>,
}

impl MockLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating any missing parent directories.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), EntryKind::File);
        self
    }

    /// Add a directory (possibly empty), creating any missing parents.
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), EntryKind::Directory);
        self
    }

    /// Make listing `path` fail with `PermissionDenied`.
    pub fn deny(mut self, path: impl AsRef<Path>) -> Self {
        self.denied.insert(path.as_ref().to_path_buf());
        self
    }

    /// Total number of `list_entries` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Every path passed to `list_entries`, in call order.
    pub fn listed(&self) -> Vec<PathBuf> {
        self.listed.borrow().clone()
    }

    fn insert(&mut self, path: &Path, kind: EntryKind) {
        if kind.is_dir() {
            self.dirs.entry(path.to_path_buf()).or_default();
        }

        let mut child = path;
        let mut child_kind = kind;
        while let Some(parent) = child.parent() {
            if parent.as_os_str().is_empty() {
                break;
            }
            let name = base_name(child);
            let siblings = self.dirs.entry(parent.to_path_buf()).or_default();
            if !siblings.iter().any(|e| e.name == name) {
                siblings.push(Entry {
                    name,
                    kind: child_kind,
                });
            }
            child = parent;
            child_kind = EntryKind::Directory;
        }
    }
}

impl DirLister for MockLister {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        self.calls.set(self.calls.get() + 1);
        self.listed.borrow_mut().push(path.to_path_buf());

        if self.denied.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such directory"))
    }
}

/// A temporary directory on disk for tests.
///
/// Removed automatically when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a temporary directory holding a single (empty) folder named
    /// `root`, so rendered headers are predictable.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("root")).expect("Failed to create root dir");
        Self { dir }
    }

    /// Path of the `root` folder.
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("root")
    }

    /// Add a file below `root`, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory below `root`.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
