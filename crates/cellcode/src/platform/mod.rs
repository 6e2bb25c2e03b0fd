//! Platform services used by the code entry widget.
//!
//! # Clipboard
//!
//! Pasting a whole code is the most common way users fill a code field. The
//! widget reads pasted text through the [`PasteSource`] trait; with the
//! `clipboard` feature enabled, [`Clipboard`] implements it on top of the
//! system clipboard:
//!
//! ```ignore
//! use cellcode::platform::Clipboard;
//! use cellcode::widget::CodeInput;
//!
//! let input = CodeInput::new(config).with_paste_source(Clipboard::new()?);
//! ```

mod clipboard;

#[cfg(feature = "clipboard")]
pub use clipboard::Clipboard;
pub use clipboard::{ClipboardError, PasteSource};
