//! Icon decoration for displayed entries
//!
//! Icons are purely presentational. Names stored in the tree are always the
//! raw entry names, so nothing ever has to strip an icon back off.

use std::ffi::OsStr;
use std::path::Path;

use crate::tree::NodeKind;

pub const FOLDER: &str = "📁";
pub const DOCUMENT: &str = "📄";

/// Icon for a file extension (without the dot), or `None` for the generic
/// document icon.
///
/// # Examples
///
/// ```
/// use fsview::decor::icon_for_extension;
///
/// assert_eq!(icon_for_extension("py"), Some("🐍"));
/// assert_eq!(icon_for_extension("PNG"), Some("🖼️"));
/// assert_eq!(icon_for_extension("rs"), None);
/// ```
pub fn icon_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "py" => Some("🐍"),
        "txt" => Some("📝"),
        "pdf" => Some(DOCUMENT),
        "mp3" | "wav" => Some("🎵"),
        "jpg" | "png" | "gif" => Some("🖼️"),
        "exe" => Some("⚙️"),
        "zip" => Some("🔗"),
        _ => None,
    }
}

/// Icon for an entry with the given raw name and kind.
pub fn icon_for(name: &OsStr, kind: NodeKind) -> &'static str {
    if matches!(kind, NodeKind::Directory(_)) {
        return FOLDER;
    }
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(icon_for_extension)
        .unwrap_or(DOCUMENT)
}
