//! Directory listing capability shared by the lazy tree and the renderer
//!
//! Both consumers only ever need "what is directly inside this directory, and
//! which of those are directories". That capability is the `DirLister` trait,
//! so the real filesystem (`FsLister`) and in-memory fixtures are
//! interchangeable.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;

use serde::Serialize;

/// Whether an entry is a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// One filesystem object returned by listing a directory.
///
/// `name` is the raw OS name, so names that are not valid UTF-8 still join
/// back into a real path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl Entry {
    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Name for display; invalid UTF-8 is replaced.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// Lists the immediate entries of a directory.
///
/// Implementations return an error when the directory cannot be read
/// (permission denied being the common case). Callers in this crate treat
/// any error as "no children".
pub trait DirLister {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>>;
}

impl<L: DirLister + ?Sized> DirLister for &L {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        (**self).list_entries(path)
    }
}

/// `DirLister` backed by `std::fs::read_dir`.
///
/// Directory classification follows symlinks, so a link to a directory is
/// listed as a directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        let entries = std::fs::read_dir(path)?;

        Ok(entries
            .filter_map(|e| e.ok())
            .map(|entry| {
                let name = entry.file_name();
                let kind = if entry.path().is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                };
                Entry { name, kind }
            })
            .collect())
    }
}

/// Ordering used everywhere entries are displayed: directories first, then
/// case-insensitive by name.
///
/// Names equal ignoring case fall back to a byte-wise comparison so the
/// result never depends on the order the OS returned entries in.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => sort_key(&a.name)
            .cmp(&sort_key(&b.name))
            .then_with(|| a.name.cmp(&b.name)),
    }
}

fn sort_key(name: &OsStr) -> String {
    name.to_string_lossy().to_lowercase()
}

pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_entries);
}

/// List and sort a directory, swallowing any listing error.
///
/// Returns `None` when the listing failed so callers that care (the renderer
/// drops the header for an unreadable root) can tell "empty" from "denied".
pub fn read_sorted<L: DirLister>(lister: &L, path: &Path) -> Option<Vec<Entry>> {
    match lister.list_entries(path) {
        Ok(mut entries) => {
            sort_entries(&mut entries);
            Some(entries)
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "skipping unreadable directory");
            None
        }
    }
}

/// Get the name of a path, falling back to the whole path for roots like `/`.
pub fn base_name(path: &Path) -> OsString {
    path.file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| path.as_os_str().to_os_string())
}
