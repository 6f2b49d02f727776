//! Error type for session and export operations
//!
//! Directory listing failures never show up here: the tree and the renderer
//! recover from them locally.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no folder selected")]
    NoFolderSelected,
    #[error("no entry selected")]
    NothingSelected,
    #[error("node does not belong to the current tree")]
    UnknownNode,
    #[error("cannot access '{}': no such directory", .0.display())]
    MissingFolder(PathBuf),
    #[error("cannot read '{}'", .0.display())]
    Unreadable(PathBuf),
    #[error("'{}' is not in the tree", .0.display())]
    NotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to serialize tree: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
