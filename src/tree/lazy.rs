//! LazyTree - loads one directory level at a time as nodes are expanded

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::listing::{DirLister, EntryKind, base_name, read_sorted};

use super::node::{LoadState, NodeId, NodeKind, TreeNode};

/// A row a tree widget would display: the node and its depth below the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow {
    pub id: NodeId,
    pub depth: usize,
}

/// Tree model that lists directories only when they are first expanded.
///
/// After `load_root`, only the root directory has been listed. Every other
/// directory sits in `LoadState::Unloaded` until `expand` is called on it.
pub struct LazyTree<L> {
    lister: L,
    root_path: Option<PathBuf>,
    nodes: Vec<TreeNode>,
    generation: u64,
}

impl<L: DirLister> LazyTree<L> {
    pub fn new(lister: L) -> Self {
        Self {
            lister,
            root_path: None,
            nodes: Vec::new(),
            generation: 0,
        }
    }

    pub fn lister(&self) -> &L {
        &self.lister
    }

    /// Replace the whole tree with a fresh root for `path` and list its
    /// immediate entries.
    pub fn load_root(&mut self, path: &Path) -> NodeId {
        self.nodes.clear();
        self.generation += 1;
        self.root_path = Some(path.to_path_buf());

        let mut root = TreeNode::new(
            base_name(path),
            NodeKind::Directory(LoadState::Unloaded),
            None,
        );
        root.open = true;
        let id = self.push(root);

        tracing::debug!(root = %path.display(), "loading tree root");
        self.populate(id, path);
        id
    }

    /// List `path` and attach its entries as children of `id`.
    ///
    /// Directories become `Unloaded` nodes, files become leaves. An
    /// unreadable directory simply ends up with no children. Only unloaded
    /// directories are populated; anything else is left untouched.
    pub fn populate(&mut self, id: NodeId, path: &Path) {
        if !self.node(id).is_some_and(TreeNode::is_unloaded) {
            return;
        }

        let entries = read_sorted(&self.lister, path).unwrap_or_default();
        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            let kind = match entry.kind {
                EntryKind::Directory => NodeKind::Directory(LoadState::Unloaded),
                EntryKind::File => NodeKind::File,
            };
            children.push(self.push(TreeNode::new(entry.name, kind, Some(id))));
        }

        let node = &mut self.nodes[id.index];
        node.children = children;
        node.kind = NodeKind::Directory(LoadState::Loaded);
    }

    /// Open a directory node, loading its children on first expansion.
    ///
    /// Calling this again on a loaded node does not list the directory
    /// again. Files are ignored.
    pub fn expand(&mut self, id: NodeId) {
        let Some(node) = self.node(id) else {
            return;
        };
        if !node.is_dir() {
            return;
        }
        if node.is_unloaded() {
            if let Some(path) = self.resolved_path(id) {
                self.populate(id, &path);
            }
        }
        self.nodes[id.index].open = true;
    }

    /// Close a directory node in the widget. Children stay loaded.
    pub fn collapse(&mut self, id: NodeId) {
        if let Some(node) = self.node_mut(id) {
            node.open = false;
        }
    }

    /// Set the open flag on `id` and every existing descendant.
    ///
    /// This never lists anything: unloaded directories stay unloaded and
    /// just show as open with no children. Use `materialize` first for a
    /// fully loaded tree.
    pub fn expand_all(&mut self, id: NodeId) {
        self.set_open_recursive(id, true);
    }

    /// Clear the open flag on `id` and every existing descendant.
    pub fn collapse_all(&mut self, id: NodeId) {
        self.set_open_recursive(id, false);
    }

    fn set_open_recursive(&mut self, id: NodeId, open: bool) {
        if self.node(id).is_none() {
            return;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = &mut self.nodes[current.index];
            node.open = open;
            stack.extend(node.children.iter().copied());
        }
    }

    /// Load every unloaded directory below `id`, down to `max_depth` levels
    /// beneath it (unbounded when `None`). Open flags are not changed.
    pub fn materialize(&mut self, id: NodeId, max_depth: Option<usize>) {
        if self.node(id).is_none() {
            return;
        }
        let mut stack = vec![(id, 0usize)];
        while let Some((current, depth)) = stack.pop() {
            if self.nodes[current.index].is_unloaded() {
                if let Some(path) = self.resolved_path(current) {
                    self.populate(current, &path);
                }
            }
            if max_depth.is_some_and(|max| depth >= max) {
                continue;
            }
            for &child in self.nodes[current.index].children.iter().rev() {
                if self.nodes[child.index].is_dir() {
                    stack.push((child, depth + 1));
                }
            }
        }
    }

    /// Native path of `id`: the root's stored path with every name below
    /// the root appended in order.
    pub fn resolved_path(&self, id: NodeId) -> Option<PathBuf> {
        let root_path = self.root_path.as_ref()?;
        let mut names = Vec::new();
        let mut current = self.node(id)?;
        while let Some(parent) = current.parent {
            names.push(current.name.as_os_str());
            current = &self.nodes[parent.index];
        }

        let mut path = root_path.clone();
        for name in names.iter().rev() {
            path.push(name);
        }
        Some(path)
    }

    /// Walk `rel` one name at a time from the root, expanding each
    /// directory on the way.
    pub fn resolve_relative(&mut self, rel: &Path) -> Option<NodeId> {
        let mut current = self.root()?;
        for component in rel.components() {
            match component {
                Component::CurDir => continue,
                Component::Normal(name) => {
                    self.expand(current);
                    current = self.find_child(current, name)?;
                }
                _ => return None,
            }
        }
        Some(current)
    }

    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId {
            index: 0,
            generation: self.generation,
        })
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        if id.generation != self.generation {
            return None;
        }
        self.nodes.get(id.index)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        if id.generation != self.generation {
            return None;
        }
        self.nodes.get_mut(id.index)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(TreeNode::children).unwrap_or_default()
    }

    /// Child of `id` whose raw name is exactly `name`.
    pub fn find_child(&self, id: NodeId, name: impl AsRef<OsStr>) -> Option<NodeId> {
        let name = name.as_ref();
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.nodes[child.index].name.as_os_str() == name)
    }

    /// Rows a widget would show: depth-first, descending only into open
    /// nodes. The root is always the first row.
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        let Some(root) = self.root() else {
            return rows;
        };
        let mut stack = vec![VisibleRow { id: root, depth: 0 }];
        while let Some(row) = stack.pop() {
            rows.push(row);
            let node = &self.nodes[row.id.index];
            if node.open {
                for &child in node.children.iter().rev() {
                    stack.push(VisibleRow {
                        id: child,
                        depth: row.depth + 1,
                    });
                }
            }
        }
        rows
    }

    /// Number of nodes in the current tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: TreeNode) -> NodeId {
        let id = NodeId {
            index: self.nodes.len(),
            generation: self.generation,
        };
        self.nodes.push(node);
        id
    }
}
