//! Output configuration types

/// Limits applied while rendering a whole tree eagerly.
///
/// Both default to unbounded, which renders every reachable entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Descend only this many levels below the root. Directories at the
    /// limit are shown with their connector line only.
    pub max_depth: Option<usize>,
    /// Stop after emitting this many entry lines in total.
    pub max_entries: Option<usize>,
}

impl RenderConfig {
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }

    pub fn entries_exhausted(&self, emitted: usize) -> bool {
        self.max_entries.is_some_and(|max| emitted >= max)
    }
}

/// Configuration for terminal output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Prefix browse rows with an icon for their kind/extension.
    pub icons: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            icons: false,
        }
    }
}
