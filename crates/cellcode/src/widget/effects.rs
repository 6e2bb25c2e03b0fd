//! Side effects produced by the event router, and their executor.
//!
//! The router is pure: it describes what should happen as an ordered list of
//! [`Effect`]s. The [`EffectExecutor`] performs them against the focus
//! registry and the widget's signals, in order.

use cellcode_core::Signal;
use cellcode_core::logging::targets;

use super::focus::FocusRegistry;

/// One side effect of handling an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emit the new logical value through `value_changed`.
    Change(String),
    /// Move keyboard focus to the cell at the index.
    Focus(usize),
    /// Focus the cell at the index and select its contents.
    Select(usize),
    /// Remove focus from the cell at the index.
    Blur(usize),
    /// Emit the completed code through `code_completed`.
    Complete(String),
}

/// Performs [`Effect`]s against a focus registry and a pair of signals.
pub struct EffectExecutor<'a> {
    focus: &'a mut FocusRegistry,
    value_changed: &'a Signal<String>,
    code_completed: &'a Signal<String>,
}

impl<'a> EffectExecutor<'a> {
    /// Create an executor over the given targets.
    pub fn new(
        focus: &'a mut FocusRegistry,
        value_changed: &'a Signal<String>,
        code_completed: &'a Signal<String>,
    ) -> Self {
        Self {
            focus,
            value_changed,
            code_completed,
        }
    }

    /// Execute `effects` in order.
    #[tracing::instrument(skip_all, target = "cellcode::effects", level = "trace", fields(count = effects.len()))]
    pub fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.execute_one(effect);
        }
    }

    fn execute_one(&mut self, effect: Effect) {
        tracing::trace!(target: targets::EFFECTS, ?effect, "executing");
        match effect {
            Effect::Change(value) => self.value_changed.emit(value),
            Effect::Focus(index) => {
                self.focus.focus(index);
            }
            Effect::Select(index) => {
                self.focus.select(index);
            }
            Effect::Blur(index) => {
                self.focus.blur(index);
            }
            Effect::Complete(code) => {
                tracing::debug!(target: targets::EFFECTS, len = code.chars().count(), "code completed");
                self.code_completed.emit(code);
            }
        }
    }
}
