//! Commonly used types, re-exported for glob import.
//!
//! ```
//! use cellcode::prelude::*;
//! ```

pub use cellcode_core::{ConnectionGuard, ConnectionId, Signal};

pub use crate::config::CodeInputConfig;
pub use crate::error::{CodeInputError, Result};
pub use crate::platform::{ClipboardError, PasteSource};
pub use crate::widget::{
    Cell, CellArray, CellHandle, CellId, CellView, CodeInput, CodeInputView, Condition, Effect,
    FocusRegistry, InputEvent, Key, KeyPressEvent, KeyboardModifiers, LetterCase, PasteEvent,
    Transition, ValidationPolicy,
};

#[cfg(feature = "clipboard")]
pub use crate::platform::Clipboard;
