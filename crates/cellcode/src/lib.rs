//! Cellcode: a segmented code entry widget.
//!
//! Cellcode renders a fixed number of single-character cells that together
//! hold one logical string, such as a one-time password or a verification
//! code. It keeps keystrokes, deletions, arrow navigation and clipboard paste
//! consistent with that string, validates each character against a
//! configurable policy, and reports completion once every cell is filled.
//!
//! The widget is *controlled*: it never stores the code. Every accepted
//! change is emitted through [`CodeInput::value_changed`](widget::CodeInput)
//! and the owner passes it back as `value` on the next call.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use cellcode::prelude::*;
//!
//! let config = CodeInputConfig::new(4).with_condition(Condition::Numbers);
//! let mut input = CodeInput::new(config);
//!
//! let value = Arc::new(Mutex::new(String::new()));
//! let sink = value.clone();
//! input.value_changed.connect(move |v| *sink.lock().unwrap() = v.clone());
//!
//! for (index, ch) in "1234".chars().enumerate() {
//!     let current = value.lock().unwrap().clone();
//!     input.key_press(&current, index, &mut KeyPressEvent::character(ch));
//! }
//!
//! assert_eq!(*value.lock().unwrap(), "1234");
//! assert!(input.is_complete(&value.lock().unwrap()));
//! ```

pub mod config;
mod error;
pub mod platform;
pub mod prelude;
pub mod widget;

pub use config::CodeInputConfig;
pub use error::{CodeInputError, Result};
