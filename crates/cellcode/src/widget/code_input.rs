//! The segmented code entry widget.
//!
//! [`CodeInput`] shows a fixed number of single-character cells that
//! together hold one code, such as a one-time password.
//!
//! # Controlled Value
//!
//! The widget never stores the code. Every handler takes the owner's current
//! `value`, and every accepted change comes back through
//! [`value_changed`](CodeInput::value_changed). The owner is expected to
//! store it and pass it in on the next call; if it does not, what the cells
//! show and what the owner holds drift apart.
//!
//! # Example
//!
//! ```ignore
//! use cellcode::prelude::*;
//!
//! let mut input = CodeInput::new(
//!     CodeInputConfig::new(6)
//!         .with_condition(Condition::Numbers)
//!         .with_placeholder("······"),
//! );
//!
//! input.value_changed.connect(|value| store.set(value.clone()));
//! input.code_completed.connect(|code| submit(code));
//!
//! // For each rendered cell:
//! input.register_cell(index, Box::new(cell_handle));
//!
//! // On key down in cell `index`:
//! input.key_press(&store.get(), index, &mut event);
//! ```
//!
//! # Signals
//!
//! - `value_changed`: Emitted with the new full value on every accepted edit
//! - `code_completed`: Emitted with the full code when typing fills the last
//!   cell with every cell filled, or when a paste fills every cell
//!
//! # Keyboard
//!
//! - Printable keys: type into the cell and advance
//! - Backspace: clear the cell, or step back when it is already empty
//! - Left/Right arrows: select the neighbouring cell
//! - Ctrl/Cmd+V: paste from the configured [`PasteSource`]

use std::fmt;

use cellcode_core::Signal;
use cellcode_core::logging::targets;

use super::cells::{truncate_value, CellArray};
use super::effects::EffectExecutor;
use super::events::{EventBase, KeyPressEvent, PasteEvent};
use super::focus::{CellHandle, FocusRegistry};
use super::policy::{Condition, LetterCase, ValidationPolicy};
use super::router::{route, InputEvent, Transition};
use super::view::CodeInputView;
use crate::config::CodeInputConfig;
use crate::platform::PasteSource;

/// A segmented, one-character-per-cell code entry widget.
pub struct CodeInput {
    /// Shape and policy configuration.
    config: CodeInputConfig,

    /// Policy resolved from the configuration.
    policy: ValidationPolicy,

    /// Handles of the mounted cells.
    focus: FocusRegistry,

    /// Where the paste shortcut reads from.
    paste_source: Option<Box<dyn PasteSource>>,

    // Signals

    /// Signal emitted with the new value on every accepted change.
    pub value_changed: Signal<String>,

    /// Signal emitted with the full code when every cell is filled.
    pub code_completed: Signal<String>,
}

impl fmt::Debug for CodeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeInput")
            .field("config", &self.config)
            .field("focus", &self.focus)
            .field("has_paste_source", &self.paste_source.is_some())
            .finish()
    }
}

impl CodeInput {
    /// Create a code input from a configuration.
    pub fn new(config: CodeInputConfig) -> Self {
        let policy = config.policy();
        Self {
            config,
            policy,
            focus: FocusRegistry::new(),
            paste_source: None,
            value_changed: Signal::new(),
            code_completed: Signal::new(),
        }
    }

    /// Use `source` for the Ctrl/Cmd+V shortcut.
    pub fn with_paste_source(mut self, source: impl PasteSource + 'static) -> Self {
        self.set_paste_source(source);
        self
    }

    /// Use `source` for the Ctrl/Cmd+V shortcut.
    pub fn set_paste_source(&mut self, source: impl PasteSource + 'static) {
        self.paste_source = Some(Box::new(source));
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The current configuration.
    pub fn config(&self) -> &CodeInputConfig {
        &self.config
    }

    /// The number of cells.
    pub fn fields(&self) -> usize {
        self.config.fields
    }

    /// The resolved validation policy.
    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Change the acceptance condition.
    pub fn set_condition(&mut self, condition: Condition) {
        self.config.condition = condition;
        self.policy = self.config.policy();
    }

    /// Change the case conversion.
    pub fn set_letter_case(&mut self, case: LetterCase) {
        self.config.type_letter_case = case;
        self.policy = self.config.policy();
    }

    /// Set the placeholder glyphs.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.config.placeholder = placeholder.into();
    }

    /// Bring the owner's value in line with the field count.
    ///
    /// Call once when the widget is first shown. Emits `value_changed` with
    /// `value` truncated to the field count.
    pub fn mount(&mut self, value: &str) {
        self.value_changed.emit(truncate_value(value, self.config.fields));
    }

    /// Change the number of cells.
    ///
    /// Emits `value_changed` with `value` truncated to the new count and drops
    /// the handles of cells that no longer exist. Setting the current count
    /// again does nothing.
    pub fn set_fields(&mut self, value: &str, fields: usize) {
        if fields == self.config.fields {
            return;
        }
        tracing::debug!(target: targets::ROUTER, from = self.config.fields, to = fields, "field count changed");
        self.config.fields = fields;
        self.focus.truncate(fields);
        self.value_changed.emit(truncate_value(value, fields));
    }

    // =========================================================================
    // Cells and Focus
    // =========================================================================

    /// Register the host handle of the cell at `index`.
    ///
    /// Returns `false` and drops `handle` when `index` is outside the field
    /// count.
    pub fn register_cell(&mut self, index: usize, handle: Box<dyn CellHandle>) -> bool {
        if index >= self.config.fields {
            tracing::debug!(target: targets::FOCUS, index, fields = self.config.fields, "cell index past the last cell, not registered");
            return false;
        }
        self.focus.register(index, handle)
    }

    /// Remove the host handle of the cell at `index`.
    pub fn unregister_cell(&mut self, index: usize) -> Option<Box<dyn CellHandle>> {
        self.focus.unregister(index)
    }

    /// The focus registry.
    pub fn focus_registry(&self) -> &FocusRegistry {
        &self.focus
    }

    /// Mutable access to the focus registry.
    pub fn focus_registry_mut(&mut self) -> &mut FocusRegistry {
        &mut self.focus
    }

    /// The cell that currently has focus.
    pub fn focused_cell(&self) -> Option<usize> {
        self.focus.focused_cell()
    }

    /// The cells `value` projects onto.
    pub fn cells(&self, value: &str) -> CellArray {
        CellArray::project(value, self.config.fields)
    }

    /// Whether `value` fills every cell.
    pub fn is_complete(&self, value: &str) -> bool {
        self.cells(value).is_complete()
    }

    /// Describe what to render for `value`.
    ///
    /// Returns `None` when the field count is zero: nothing is rendered.
    pub fn view(&self, value: &str) -> Option<CodeInputView> {
        if self.config.fields == 0 {
            return None;
        }
        Some(CodeInputView::build(
            &self.cells(value),
            &self.config,
            self.focus.focused_cell(),
        ))
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a key press in the cell at `index`.
    ///
    /// The event is accepted when the host's default action must be
    /// suppressed (Backspace, arrows, the paste shortcut).
    pub fn key_press(&mut self, value: &str, index: usize, event: &mut KeyPressEvent) {
        if event.is_paste_shortcut() && self.paste_source.is_some() {
            // A source that fails to read counts as a rejected paste.
            event.base.accept();
            if let Some(text) = self.read_paste_source() {
                let transition = route(value, self.config.fields, &self.policy, &InputEvent::Paste { text });
                self.apply(transition, &mut event.base);
            }
            return;
        }

        let Some(input) = InputEvent::from_key(index, event) else {
            return;
        };
        let transition = route(value, self.config.fields, &self.policy, &input);
        self.apply(transition, &mut event.base);
    }

    /// Handle a paste onto the widget.
    pub fn paste(&mut self, value: &str, event: &mut PasteEvent) {
        let input = InputEvent::Paste {
            text: event.text.clone(),
        };
        let transition = route(value, self.config.fields, &self.policy, &input);
        self.apply(transition, &mut event.base);
    }

    /// Handle text the host entered into the cell at `index` directly
    /// (for example through an input method). Empty text clears the cell.
    pub fn cell_input(&mut self, value: &str, index: usize, text: &str) {
        let transition = route(
            value,
            self.config.fields,
            &self.policy,
            &InputEvent::from_text(index, text),
        );
        let mut base = EventBase::new();
        self.apply(transition, &mut base);
    }

    /// Route an already-translated input event and perform its effects.
    ///
    /// Returns the transition that was applied.
    pub fn dispatch(&mut self, value: &str, input: &InputEvent) -> Transition {
        let transition = route(value, self.config.fields, &self.policy, input);
        let mut base = EventBase::new();
        self.apply(transition.clone(), &mut base);
        transition
    }

    #[tracing::instrument(skip_all, target = "cellcode::router", level = "trace")]
    fn apply(&mut self, transition: Transition, base: &mut EventBase) {
        if transition.prevent_default {
            base.accept();
        }
        EffectExecutor::new(&mut self.focus, &self.value_changed, &self.code_completed)
            .execute(transition.effects);
    }

    fn read_paste_source(&mut self) -> Option<String> {
        let source = self.paste_source.as_mut()?;
        match source.paste_text() {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::warn!(target: targets::CLIPBOARD, error = %err, "failed to read paste source");
                None
            }
        }
    }
}
