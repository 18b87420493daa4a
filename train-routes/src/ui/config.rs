//! Interactive session options.

/// Configuration for a command-line session.
#[derive(Debug, Clone, Default)]
pub struct UiConfig {
    /// Print every station on the route after the summary line.
    pub show_path: bool,

    /// Keep asking for routes until input ends.
    pub repeat: bool,
}
