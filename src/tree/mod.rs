//! Lazily loaded directory tree
//!
//! `LazyTree` is the model behind a tree widget: the root's entries are
//! listed up front, every other directory is listed the first time it is
//! expanded. Nodes live in an arena and are addressed by `NodeId`.

mod lazy;
mod node;

pub use lazy::{LazyTree, VisibleRow};
pub use node::{LoadState, NodeId, NodeKind, TreeNode};
