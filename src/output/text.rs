//! ASCII tree rendering
//!
//! `TreeRenderer` walks a directory eagerly and produces the classic
//! `tree`-style text with box-drawing connectors.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::listing::{DirLister, Entry, base_name, read_sorted};

use super::config::RenderConfig;

/// Connector for an entry that has siblings after it.
pub const TEE: &str = "├── ";
/// Connector for the last entry in its sibling group.
pub const ELBOW: &str = "└── ";
/// Prefix continuation below a non-last entry.
pub const PIPE: &str = "│   ";
/// Prefix continuation below a last entry.
pub const BLANK: &str = "    ";

/// Calculate the prefix for an entry's children.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, BLANK)
    } else {
        format!("{}{}", current_prefix, PIPE)
    }
}

/// Result of rendering a readable root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Set when the entry limit cut off at least one entry.
    pub truncated: bool,
}

/// Renders whole directory trees as text.
pub struct TreeRenderer<L> {
    lister: L,
    config: RenderConfig,
}

impl<L: DirLister> TreeRenderer<L> {
    pub fn new(lister: L) -> Self {
        Self {
            lister,
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub(crate) fn lister(&self) -> &L {
        &self.lister
    }

    /// Render the tree rooted at `path`.
    ///
    /// The first line is `<name>/`, followed by one line per entry. Lines are
    /// joined with `\n` and there is no trailing newline. If `path` itself
    /// cannot be listed the result is empty; unreadable subdirectories show
    /// only their own connector line.
    pub fn render(&self, path: &Path) -> String {
        self.render_report(path)
            .map(|rendered| rendered.text)
            .unwrap_or_default()
    }

    /// Like `render`, but returns `None` when `path` cannot be listed and
    /// reports whether the entry limit dropped anything.
    pub fn render_report(&self, path: &Path) -> Option<Rendered> {
        let entries = read_sorted(&self.lister, path)?;

        let mut lines = vec![header(path)];
        let mut emitted = 0;
        let truncated = self.render_entries(path, entries, "", 1, &mut lines, &mut emitted);

        if truncated {
            tracing::warn!(
                root = %path.display(),
                limit = emitted,
                "export truncated at entry limit"
            );
        }
        Some(Rendered {
            text: lines.join("\n"),
            truncated,
        })
    }

    /// Returns true if an entry was left out because the limit was reached.

    fn render_entries(
        &self,
        path: &Path,
        entries: Vec<Entry>,
        prefix: &str,
        depth: usize,
        lines: &mut Vec<String>,
        emitted: &mut usize,
    ) -> bool {
        let count = entries.len();
        for (idx, entry) in entries.into_iter().enumerate() {
            if self.config.entries_exhausted(*emitted) {
                return true;
            }
            let is_last = idx + 1 == count;
            let connector = if is_last { ELBOW } else { TEE };
            lines.push(format!("{}{}{}", prefix, connector, entry.display_name()));
            *emitted += 1;

            if !entry.is_dir() || self.config.at_max_depth(depth) {
                continue;
            }
            let entry_path = path.join(&entry.name);
            if let Some(children) = read_sorted(&self.lister, &entry_path) {
                let next_prefix = child_prefix(prefix, is_last);
                let truncated = self.render_entries(
                    &entry_path,
                    children,
                    &next_prefix,
                    depth + 1,
                    lines,
                    emitted,
                );
                if truncated {
                    return true;
                }
            }
        }
        false
    }

    /// Render `path` and write the text to `dest` as UTF-8.
    ///
    /// Fails with `Error::Unreadable` if `path` cannot be listed; nothing is
    /// written in that case.
    pub fn render_to_file(&self, path: &Path, dest: &Path) -> Result<()> {
        let rendered = self
            .render_report(path)
            .ok_or_else(|| Error::Unreadable(path.to_path_buf()))?;
        fs::write(dest, rendered.text)?;
        tracing::info!(dest = %dest.display(), "saved tree export");
        Ok(())
    }
}

fn header(path: &Path) -> String {
    let name = base_name(path).to_string_lossy().into_owned();
    if name.ends_with(std::path::MAIN_SEPARATOR) {
        name
    } else {
        format!("{}/", name)
    }
}
