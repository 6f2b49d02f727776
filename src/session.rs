//! Viewer session: the state a front end carries between user actions
//!
//! Holds the chosen folder, its lazily loaded tree, and the current
//! selection. Every handler works through a `Session` instead of shared
//! globals.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::listing::DirLister;
use crate::output::{RenderConfig, TreeRenderer};
use crate::tree::{LazyTree, NodeId};

pub struct Session<L> {
    tree: LazyTree<L>,
    current_folder: Option<PathBuf>,
    selected: Option<NodeId>,
    render_config: RenderConfig,
}

impl<L: DirLister> Session<L> {
    pub fn new(lister: L) -> Self {
        Self {
            tree: LazyTree::new(lister),
            current_folder: None,
            selected: None,
            render_config: RenderConfig::default(),
        }
    }

    pub fn with_render_config(mut self, config: RenderConfig) -> Self {
        self.render_config = config;
        self
    }

    /// Make `path` the current folder and reload the tree from it.
    pub fn open_folder(&mut self, path: &Path) -> NodeId {
        self.current_folder = Some(path.to_path_buf());
        self.selected = None;
        self.tree.load_root(path)
    }

    pub fn current_folder(&self) -> Option<&Path> {
        self.current_folder.as_deref()
    }

    pub fn tree(&self) -> &LazyTree<L> {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut LazyTree<L> {
        &mut self.tree
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn select(&mut self, id: NodeId) -> Result<()> {
        if self.tree.node(id).is_none() {
            return Err(Error::UnknownNode);
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Select the entry at `rel` below the current folder, loading
    /// directories along the way.
    pub fn select_path(&mut self, rel: &Path) -> Result<NodeId> {
        if self.current_folder.is_none() {
            return Err(Error::NoFolderSelected);
        }
        let id = self
            .tree
            .resolve_relative(rel)
            .ok_or_else(|| Error::NotFound(rel.to_path_buf()))?;
        self.selected = Some(id);
        Ok(id)
    }

    /// Name of the selected entry, with invalid UTF-8 replaced.
    pub fn copy_name(&self) -> Result<String> {
        let id = self.selected.ok_or(Error::NothingSelected)?;
        let node = self.tree.node(id).ok_or(Error::UnknownNode)?;
        Ok(node.display_name().into_owned())
    }

    /// Full native path of the selected entry.
    pub fn copy_full_path(&self) -> Result<PathBuf> {
        let id = self.selected.ok_or(Error::NothingSelected)?;
        self.tree.resolved_path(id).ok_or(Error::UnknownNode)
    }

    pub fn expand_all(&mut self) {
        if let Some(root) = self.tree.root() {
            self.tree.expand_all(root);
        }
    }

    pub fn collapse_all(&mut self) {
        if let Some(root) = self.tree.root() {
            self.tree.collapse_all(root);
        }
    }

    /// ASCII tree of the current folder.
    pub fn export_text(&self) -> Result<String> {
        let folder = self.current_folder.as_deref().ok_or(Error::NoFolderSelected)?;
        Ok(self.renderer().render(folder))
    }

    /// Write the export of the current folder to `dest`.
    pub fn save_export(&self, dest: &Path) -> Result<()> {
        let folder = self.current_folder.as_deref().ok_or(Error::NoFolderSelected)?;
        self.renderer().render_to_file(folder, dest)
    }

    fn renderer(&self) -> TreeRenderer<&L> {
        TreeRenderer::new(self.tree.lister()).with_config(self.render_config)
    }
}
