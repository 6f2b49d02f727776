//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `config` - Render limits and terminal output configuration
//! - `text` - Eager ASCII tree renderer (the export format)
//! - `json` - JSON snapshot of a fully walked tree
//! - `browse` - Rows of a lazily loaded tree, as a widget would show them
//! - `status` - Coloured confirmation messages

mod browse;
mod config;
mod json;
mod status;
mod text;

pub use browse::BrowseFormatter;
pub use config::{OutputConfig, RenderConfig};
pub use json::{Snapshot, print_json, to_json};
pub use status::StatusReporter;
pub use text::{BLANK, ELBOW, PIPE, Rendered, TEE, TreeRenderer, child_prefix};
