//! Logging facilities for Cellcode.
//!
//! Cellcode uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("cellcode=debug"))
//!         .init();
//! }
//! ```
//!
//! Rejected keystrokes and pastes are not errors; they are reported at
//! `trace` level under [`targets::ROUTER`] so they can be inspected without
//! surfacing anything to the user.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "cellcode_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "cellcode_core::signal";
    /// Event router target.
    pub const ROUTER: &str = "cellcode::router";
    /// Effect executor target.
    pub const EFFECTS: &str = "cellcode::effects";
    /// Focus registry target.
    pub const FOCUS: &str = "cellcode::focus";
    /// Clipboard integration target.
    pub const CLIPBOARD: &str = "cellcode::clipboard";
    /// Configuration loading target.
    pub const CONFIG: &str = "cellcode::config";
}
