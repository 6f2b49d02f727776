//! JSON output formatting

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::listing::{DirLister, base_name, read_sorted};

use super::text::TreeRenderer;

/// Fully materialised tree for JSON output.
///
/// Names and paths are converted lossily; invalid UTF-8 is replaced.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Snapshot {
    File {
        name: String,
        path: String,
    },
    Dir {
        name: String,
        path: String,
        /// Set when the directory could not be listed.
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        unreadable: bool,
        children: Vec<Snapshot>,
    },
}

impl<L: DirLister> TreeRenderer<L> {
    /// Walk `path` with the same ordering and limits as `render`, keeping the
    /// structure instead of flattening it to text.
    ///
    /// Returns `None` when `path` itself cannot be listed.
    pub fn snapshot(&self, path: &Path) -> Option<Snapshot> {
        let mut emitted = 0;
        let children = self.snapshot_children(path, 1, &mut emitted)?;
        Some(Snapshot::Dir {
            name: base_name(path).to_string_lossy().into_owned(),
            path: path.to_string_lossy().into_owned(),
            unreadable: false,
            children,
        })
    }

    fn snapshot_children(
        &self,
        path: &Path,
        depth: usize,
        emitted: &mut usize,
    ) -> Option<Vec<Snapshot>> {
        let entries = read_sorted(self.lister(), path)?;
        let mut children = Vec::with_capacity(entries.len());

        for entry in entries {
            if self.config().entries_exhausted(*emitted) {
                break;
            }
            *emitted += 1;
            let entry_path = path.join(&entry.name);
            let name = entry.display_name().into_owned();

            if !entry.is_dir() {
                children.push(Snapshot::File {
                    name,
                    path: entry_path.to_string_lossy().into_owned(),
                });
                continue;
            }

            let (unreadable, grandchildren) = if self.config().at_max_depth(depth) {
                (false, Vec::new())
            } else {
                match self.snapshot_children(&entry_path, depth + 1, emitted) {
                    Some(c) => (false, c),
                    None => (true, Vec::new()),
                }
            };
            children.push(Snapshot::Dir {
                name,
                path: entry_path.to_string_lossy().into_owned(),
                unreadable,
                children: grandchildren,
            });
        }

        Some(children)
    }
}

/// Serialize a snapshot as pretty-printed JSON.
pub fn to_json(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

/// Print a snapshot as pretty-printed JSON to stdout.
pub fn print_json(snapshot: &Snapshot) -> io::Result<()> {
    let json = to_json(snapshot).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
