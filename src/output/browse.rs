//! Formatter for the rows a tree widget would display
//!
//! Unlike `TreeRenderer`, this never touches the filesystem: it only prints
//! what the `LazyTree` has already loaded and opened.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::decor;
use crate::listing::DirLister;
use crate::tree::LazyTree;

use super::config::OutputConfig;

const INDENT: &str = "  ";
const OPEN: &str = "▾ ";
const CLOSED: &str = "▸ ";
const LEAF: &str = "  ";

pub struct BrowseFormatter {
    config: OutputConfig,
}

impl BrowseFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write every visible row: indentation, disclosure marker, optional
    /// icon, then the name. Directories are highlighted.
    pub fn write_rows<L: DirLister, W: WriteColor>(
        &self,
        tree: &LazyTree<L>,
        out: &mut W,
    ) -> io::Result<()> {
        for row in tree.visible_rows() {
            let Some(node) = tree.node(row.id) else {
                continue;
            };
            let marker = if !node.is_dir() {
                LEAF
            } else if node.is_open() {
                OPEN
            } else if node.is_expandable() {
                CLOSED
            } else {
                LEAF
            };
            write!(out, "{}{}", INDENT.repeat(row.depth), marker)?;
            if self.config.icons {
                write!(out, "{} ", decor::icon_for(node.name(), node.kind()))?;
            }

            if node.is_dir() {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            write!(out, "{}", node.display_name())?;
            out.reset()?;
            writeln!(out)?;
        }
        Ok(())
    }

    /// Plain-text rows, no colour codes.
    pub fn format<L: DirLister>(&self, tree: &LazyTree<L>) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writing to a Vec cannot fail.
        let _ = self.write_rows(tree, &mut out);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    pub fn print<L: DirLister>(&self, tree: &LazyTree<L>) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_rows(tree, &mut stdout)?;
        stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::test_utils::MockLister;

    fn plain(icons: bool) -> BrowseFormatter {
        BrowseFormatter::new(OutputConfig {
            use_color: false,
            icons,
        })
    }

    #[test]
    fn test_rows_reflect_open_state() {
        let lister = MockLister::new()
            .with_file("/r/src/main.py")
            .with_dir("/r/empty")
            .with_file("/r/notes.txt");
        let mut tree = LazyTree::new(&lister);
        let root = tree.load_root(Path::new("/r"));
        let src = tree.find_child(root, "src").unwrap();
        let empty = tree.find_child(root, "empty").unwrap();
        tree.expand(src);
        tree.expand(empty);
        tree.collapse(empty);

        let out = plain(false).format(&tree);
        // `empty` was loaded with no children, so it has no disclosure marker.
        assert_eq!(out, "▾ r\n    empty\n  ▾ src\n      main.py\n    notes.txt\n");
    }

    #[test]
    fn test_rows_with_icons() {
        let lister = MockLister::new().with_file("/r/main.py").with_dir("/r/lib");
        let mut tree = LazyTree::new(&lister);
        tree.load_root(Path::new("/r"));

        let out = plain(true).format(&tree);
        assert_eq!(out, "▾ 📁 r\n  ▸ 📁 lib\n    🐍 main.py\n");
    }
}
