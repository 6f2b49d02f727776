//! fsview - browse a folder lazily and export its structure as an ASCII tree

pub mod decor;
pub mod error;
pub mod listing;
pub mod logging;
pub mod output;
pub mod session;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use listing::{DirLister, Entry, EntryKind, FsLister};
pub use output::{
    BrowseFormatter, OutputConfig, RenderConfig, Rendered, Snapshot, StatusReporter,
    TreeRenderer, print_json,
};
pub use session::Session;
pub use tree::{LazyTree, LoadState, NodeId, NodeKind, TreeNode, VisibleRow};
