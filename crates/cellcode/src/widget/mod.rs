//! The code input widget and its building blocks.
//!
//! - [`cells`](CellArray): projection of the logical value onto cells
//! - [`ValidationPolicy`]: which characters are accepted, and their case
//! - [`route`]: the pure input state machine
//! - [`EffectExecutor`]: performs routed effects on focus and signals
//! - [`CodeInput`]: the widget tying them together

mod cells;
mod code_input;
mod effects;
mod events;
mod focus;
mod policy;
mod router;
pub mod view;

pub use cells::{truncate_value, Cell, CellArray, CellId, BLANK};
pub use code_input::CodeInput;
pub use effects::{Effect, EffectExecutor};
pub use events::{EventBase, Key, KeyPressEvent, KeyboardModifiers, PasteEvent};
pub use focus::{CellHandle, FocusRegistry};
pub use policy::{Condition, LetterCase, ValidationPolicy};
pub use router::{route, InputEvent, Transition};
pub use view::{Attributes, CellView, CodeInputView, WrapperView};
