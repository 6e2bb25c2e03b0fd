//! Core primitives for Cellcode.
//!
//! This crate provides the pieces of the Cellcode widget stack that do not
//! know anything about code entry itself:
//!
//! - **Signal/Slot System**: Type-safe change notification, used by the
//!   widget to hand new values and completed codes back to its owner
//! - **Logging**: Target and span names for filtering `tracing` output
//!
//! # Signal/Slot Example
//!
//! ```
//! use cellcode_core::Signal;
//!
//! // Create a signal that notifies when the code changes
//! let value_changed = Signal::<String>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Code is now: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit("12".to_string());
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
