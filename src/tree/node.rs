//! Node types for the lazily loaded tree

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

/// Handle to a node in a `LazyTree`.
///
/// Ids are positional: an index into the tree's arena, stamped with the
/// generation of the root load that created it. Loading a new root bumps the
/// generation, so ids from a previous tree no longer resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

/// Whether a directory's children have been fetched yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory(LoadState),
}

/// One filesystem entry in the tree.
///
/// `name` is the raw OS entry name with no decoration; paths are never
/// stored and are rebuilt from the ancestor chain on demand.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub(crate) name: OsString,
    pub(crate) kind: NodeKind,
    pub(crate) open: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl TreeNode {
    pub(crate) fn new(name: OsString, kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            name,
            kind,
            open: false,
            parent,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Name for display; invalid UTF-8 is replaced.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory(_))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.kind, NodeKind::Directory(LoadState::Loaded))
    }

    pub fn is_unloaded(&self) -> bool {
        matches!(self.kind, NodeKind::Directory(LoadState::Unloaded))
    }

    /// Widget open flag: children are displayed when set.
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// A widget shows an expand affordance for any directory that is
    /// unloaded or has children.
    pub fn is_expandable(&self) -> bool {
        self.is_unloaded() || !self.children.is_empty()
    }
}
