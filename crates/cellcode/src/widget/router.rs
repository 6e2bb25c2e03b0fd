//! The input state machine.
//!
//! [`route`] is a pure function from the current state (the caller-owned
//! value and the field count), the validation policy and one input event to
//! a [`Transition`]: the ordered effects to perform and whether the host's
//! default action must be suppressed. Nothing here touches focus or signals;
//! see [`EffectExecutor`](super::effects::EffectExecutor) for that.
//!
//! # Transitions
//!
//! | Event | Effects |
//! |-------|---------|
//! | character at `i` | rejected if it fails the policy; otherwise change, then focus `i+1`, or blur + complete on the last cell when all cells are filled |
//! | clear at `i` | change |
//! | Backspace at `i` | filled: change (cell cleared); empty: focus `i-1` |
//! | ArrowLeft / ArrowRight at `i` | select `i-1` / `i+1` |
//! | paste | rejected if it fails the policy; otherwise change, focus, and blur + complete when it fills every cell |
//!
//! Rejected input produces no effects at all.

use cellcode_core::logging::targets;

use super::cells::{Cell, CellArray};
use super::effects::Effect;
use super::events::{Key, KeyPressEvent};
use super::policy::ValidationPolicy;

/// An input event, addressed to a cell by index where it applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A character typed into the cell at `index`.
    Character {
        /// Target cell.
        index: usize,
        /// The typed character.
        ch: char,
    },
    /// The contents of the cell at `index` were deleted by the host.
    Clear {
        /// Target cell.
        index: usize,
    },
    /// Backspace pressed in the cell at `index`.
    Backspace {
        /// Target cell.
        index: usize,
    },
    /// Left arrow pressed in the cell at `index`.
    ArrowLeft {
        /// Target cell.
        index: usize,
    },
    /// Right arrow pressed in the cell at `index`.
    ArrowRight {
        /// Target cell.
        index: usize,
    },
    /// Plain text pasted anywhere in the widget.
    Paste {
        /// The clipboard payload.
        text: String,
    },
}

impl InputEvent {
    /// Translate a key press in the cell at `index`.
    ///
    /// Returns `None` for keys the widget does not handle (Tab, Enter,
    /// shortcuts, ...), which the host should process normally.
    pub fn from_key(index: usize, event: &KeyPressEvent) -> Option<Self> {
        if let Some(ch) = event.typed_char() {
            return Some(InputEvent::Character { index, ch });
        }
        match event.key {
            Key::Backspace => Some(InputEvent::Backspace { index }),
            Key::ArrowLeft => Some(InputEvent::ArrowLeft { index }),
            Key::ArrowRight => Some(InputEvent::ArrowRight { index }),
            _ => None,
        }
    }

    /// Translate the host's text input for the cell at `index`.
    ///
    /// Empty text clears the cell. Otherwise the first character counts as
    /// typed; a cell never takes more than one.
    pub fn from_text(index: usize, text: &str) -> Self {
        match text.chars().next() {
            Some(ch) => InputEvent::Character { index, ch },
            None => InputEvent::Clear { index },
        }
    }

    /// The cell this event is addressed to, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            InputEvent::Character { index, .. }
            | InputEvent::Clear { index }
            | InputEvent::Backspace { index }
            | InputEvent::ArrowLeft { index }
            | InputEvent::ArrowRight { index } => Some(*index),
            InputEvent::Paste { .. } => None,
        }
    }
}

/// The outcome of routing one input event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transition {
    /// Effects to perform, in order.
    pub effects: Vec<Effect>,
    /// Whether the host's default action for the event must be suppressed.
    pub prevent_default: bool,
}

impl Transition {
    /// A transition with no effects that leaves the host's default alone.
    pub fn ignored() -> Self {
        Self::default()
    }

    /// A transition with no effects that suppresses the host's default.
    pub fn suppressed() -> Self {
        Self {
            effects: Vec::new(),
            prevent_default: true,
        }
    }

    /// Whether this transition does nothing at all.
    pub fn is_noop(&self) -> bool {
        self.effects.is_empty()
    }

    /// The new logical value, if the transition changes it.
    pub fn changed_value(&self) -> Option<&str> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Change(value) => Some(value.as_str()),
            _ => None,
        })
    }

    /// The completed code, if the transition completes it.
    pub fn completed_code(&self) -> Option<&str> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Complete(code) => Some(code.as_str()),
            _ => None,
        })
    }
}

/// Route one input event.
///
/// `value` is the caller-owned logical value and `fields` the field count.
/// With `fields == 0` there are no cells and every event is ignored; events
/// addressed to a cell index outside `0..fields` are ignored as well.
pub fn route(value: &str, fields: usize, policy: &ValidationPolicy, event: &InputEvent) -> Transition {
    if fields == 0 {
        return Transition::ignored();
    }
    if event.index().is_some_and(|index| index >= fields) {
        tracing::debug!(target: targets::ROUTER, ?event, fields, "event addressed past the last cell");
        return Transition::ignored();
    }

    let cells = CellArray::project(value, fields);
    let transition = match event {
        InputEvent::Character { index, ch } => type_character(cells, policy, *index, *ch),
        InputEvent::Clear { index } => clear_cell(cells, *index),
        InputEvent::Backspace { index } => backspace(cells, *index),
        InputEvent::ArrowLeft { index } => select(index.checked_sub(1), fields),
        InputEvent::ArrowRight { index } => select(index.checked_add(1), fields),
        InputEvent::Paste { text } => paste(text, fields, policy),
    };

    tracing::trace!(target: targets::ROUTER, ?event, ?transition, "routed");
    transition
}

fn type_character(mut cells: CellArray, policy: &ValidationPolicy, index: usize, ch: char) -> Transition {
    if ch.is_whitespace() || !policy.accepts_char(ch) {
        tracing::trace!(target: targets::ROUTER, %ch, index, "character rejected");
        return Transition::ignored();
    }

    let normalized = policy.normalize_char(ch);
    cells.set(index, Cell::from_char(normalized));
    let value = cells.to_value();

    let mut effects = vec![Effect::Change(value.clone())];
    let last = cells.len() - 1;
    if index < last {
        effects.push(Effect::Focus(index + 1));
    } else if cells.is_complete() {
        effects.push(Effect::Blur(last));
        effects.push(Effect::Complete(value));
    }

    Transition {
        effects,
        prevent_default: false,
    }
}

fn clear_cell(mut cells: CellArray, index: usize) -> Transition {
    cells.set(index, Cell::Empty);
    Transition {
        effects: vec![Effect::Change(cells.to_value())],
        prevent_default: false,
    }
}

fn backspace(mut cells: CellArray, index: usize) -> Transition {
    let filled = cells.get(index).is_some_and(|cell| cell.is_filled());
    let effects = if filled {
        cells.set(index, Cell::Empty);
        vec![Effect::Change(cells.to_value())]
    } else {
        index.checked_sub(1).map(Effect::Focus).into_iter().collect()
    };

    Transition {
        effects,
        prevent_default: true,
    }
}

fn select(target: Option<usize>, fields: usize) -> Transition {
    Transition {
        effects: target
            .filter(|&index| index < fields)
            .map(Effect::Select)
            .into_iter()
            .collect(),
        prevent_default: true,
    }
}

fn paste(text: &str, fields: usize, policy: &ValidationPolicy) -> Transition {
    if !policy.accepts(text) {
        tracing::trace!(target: targets::ROUTER, len = text.chars().count(), "paste rejected");
        return Transition::suppressed();
    }

    let code: String = policy
        .normalize(text)
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(fields)
        .collect();
    let len = code.chars().count();
    let target = len.min(fields - 1);

    let mut effects = vec![Effect::Change(code.clone()), Effect::Focus(target)];
    if len == fields {
        effects.push(Effect::Blur(target));
        effects.push(Effect::Complete(code));
    }

    Transition {
        effects,
        prevent_default: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::policy::{Condition, LetterCase};

    fn numbers() -> ValidationPolicy {
        ValidationPolicy::resolve(&Condition::Numbers, LetterCase::Unchanged)
    }

    fn any() -> ValidationPolicy {
        ValidationPolicy::resolve(&Condition::Any, LetterCase::Unchanged)
    }

    fn typed(index: usize, ch: char) -> InputEvent {
        InputEvent::Character { index, ch }
    }

    #[test]
    fn test_type_moves_focus_forward() {
        let t = route("", 4, &numbers(), &typed(0, '1'));
        assert_eq!(t.effects, vec![Effect::Change("1".into()), Effect::Focus(1)]);
        assert!(!t.prevent_default);
    }

    #[test]
    fn test_type_rejected_character() {
        let t = route("12", 4, &numbers(), &typed(2, 'x'));
        assert!(t.is_noop());
        assert!(!t.prevent_default);
    }

    #[test]
    fn test_type_whitespace_rejected_even_when_unrestricted() {
        let t = route("12", 4, &any(), &typed(2, ' '));
        assert!(t.is_noop());
    }

    #[test]
    fn test_type_last_cell_completes() {
        let t = route("123", 4, &numbers(), &typed(3, '4'));
        assert_eq!(
            t.effects,
            vec![
                Effect::Change("1234".into()),
                Effect::Blur(3),
                Effect::Complete("1234".into()),
            ]
        );
    }

    #[test]
    fn test_type_last_cell_with_gap_does_not_complete() {
        let t = route("1 3", 4, &numbers(), &typed(3, '4'));
        assert_eq!(t.effects, vec![Effect::Change("1 34".into())]);
        assert_eq!(t.completed_code(), None);
    }

    #[test]
    fn test_type_into_gap_before_last_cell_moves_focus() {
        // Filling the last gap from a middle cell moves on rather than completing.
        let t = route("1 34", 4, &numbers(), &typed(1, '2'));
        assert_eq!(t.effects, vec![Effect::Change("1234".into()), Effect::Focus(2)]);
    }

    #[test]
    fn test_type_overwrites_and_normalizes() {
        let upper = ValidationPolicy::resolve(&Condition::Letters, LetterCase::Upper);
        let t = route("AB", 3, &upper, &typed(0, 'z'));
        assert_eq!(t.changed_value(), Some("ZB"));
    }

    #[test]
    fn test_type_ahead_of_filled_cells_keeps_positions() {
        let t = route("", 4, &numbers(), &typed(2, '7'));
        assert_eq!(t.changed_value(), Some("  7"));
        assert_eq!(CellArray::project("  7", 4).get(2), Some(Cell::Filled('7')));
    }

    #[test]
    fn test_single_field() {
        let t = route("", 1, &numbers(), &typed(0, '9'));
        assert_eq!(
            t.effects,
            vec![Effect::Change("9".into()), Effect::Blur(0), Effect::Complete("9".into())]
        );
    }

    #[test]
    fn test_clear_cell() {
        let t = route("1234", 4, &numbers(), &InputEvent::Clear { index: 1 });
        assert_eq!(t.effects, vec![Effect::Change("1 34".into())]);
    }

    #[test]
    fn test_backspace_filled_clears_in_place() {
        let t = route("1234", 4, &numbers(), &InputEvent::Backspace { index: 3 });
        assert_eq!(t.effects, vec![Effect::Change("123".into())]);
        assert!(t.prevent_default);
    }

    #[test]
    fn test_backspace_empty_moves_back() {
        let t = route("12", 4, &numbers(), &InputEvent::Backspace { index: 2 });
        assert_eq!(t.effects, vec![Effect::Focus(1)]);
        assert!(t.prevent_default);
    }

    #[test]
    fn test_backspace_empty_first_cell_is_noop() {
        let t = route("", 4, &numbers(), &InputEvent::Backspace { index: 0 });
        assert!(t.is_noop());
        assert!(t.prevent_default);
    }

    #[test]
    fn test_arrows() {
        let right = route("12", 4, &numbers(), &InputEvent::ArrowRight { index: 1 });
        assert_eq!(right.effects, vec![Effect::Select(2)]);
        assert!(right.prevent_default);

        let left = route("12", 4, &numbers(), &InputEvent::ArrowLeft { index: 1 });
        assert_eq!(left.effects, vec![Effect::Select(0)]);

        let past_end = route("12", 4, &numbers(), &InputEvent::ArrowRight { index: 3 });
        assert!(past_end.is_noop());
        assert!(past_end.prevent_default);

        let before_start = route("12", 4, &numbers(), &InputEvent::ArrowLeft { index: 0 });
        assert!(before_start.is_noop());
        assert!(before_start.prevent_default);
    }

    #[test]
    fn test_paste_full_code() {
        let policy = ValidationPolicy::resolve(&Condition::Alphanumeric, LetterCase::Upper);
        let t = route("", 6, &policy, &InputEvent::Paste { text: "ab12cd".into() });
        assert_eq!(
            t.effects,
            vec![
                Effect::Change("AB12CD".into()),
                Effect::Focus(5),
                Effect::Blur(5),
                Effect::Complete("AB12CD".into()),
            ]
        );
        assert!(t.prevent_default);
    }

    #[test]
    fn test_paste_truncates() {
        let t = route("", 4, &any(), &InputEvent::Paste { text: "abcdef".into() });
        assert_eq!(t.changed_value(), Some("abcd"));
        assert!(t.effects.contains(&Effect::Focus(3)));
        assert_eq!(t.completed_code(), Some("abcd"));
    }

    #[test]
    fn test_paste_partial_focuses_next_empty_cell() {
        let t = route("9999", 6, &numbers(), &InputEvent::Paste { text: "12".into() });
        assert_eq!(t.effects, vec![Effect::Change("12".into()), Effect::Focus(2)]);
    }

    #[test]
    fn test_paste_strips_whitespace_after_validation() {
        let t = route("", 4, &any(), &InputEvent::Paste { text: " 12\t3 4\n".into() });
        assert_eq!(t.changed_value(), Some("1234"));
        assert_eq!(t.completed_code(), Some("1234"));

        // Whitespace is validated before it is stripped.
        let rejected = route("", 4, &numbers(), &InputEvent::Paste { text: "12 34".into() });
        assert!(rejected.is_noop());
        assert!(rejected.prevent_default);
    }

    #[test]
    fn test_paste_rejected() {
        let t = route("12", 4, &numbers(), &InputEvent::Paste { text: "12ab".into() });
        assert!(t.is_noop());
        assert!(t.prevent_default);
    }

    #[test]
    fn test_paste_empty_clears_value() {
        let t = route("12", 4, &any(), &InputEvent::Paste { text: String::new() });
        assert_eq!(t.effects, vec![Effect::Change(String::new()), Effect::Focus(0)]);
        assert!(t.prevent_default);

        let t = route("12", 4, &numbers(), &InputEvent::Paste { text: String::new() });
        assert_eq!(t.changed_value(), Some(""));
    }

    #[test]
    fn test_paste_only_whitespace() {
        let t = route("12", 4, &any(), &InputEvent::Paste { text: "   ".into() });
        assert_eq!(t.effects, vec![Effect::Change(String::new()), Effect::Focus(0)]);
    }

    #[test]
    fn test_zero_fields_ignores_everything() {
        for event in [
            typed(0, '1'),
            InputEvent::Backspace { index: 0 },
            InputEvent::Paste { text: "1234".into() },
        ] {
            let t = route("", 0, &numbers(), &event);
            assert_eq!(t, Transition::ignored());
        }
    }

    #[test]
    fn test_index_past_last_cell_ignored() {
        let t = route("", 4, &numbers(), &typed(4, '1'));
        assert_eq!(t, Transition::ignored());
    }

    #[test]
    fn test_from_key() {
        assert_eq!(
            InputEvent::from_key(2, &KeyPressEvent::character('5')),
            Some(typed(2, '5'))
        );
        assert_eq!(
            InputEvent::from_key(2, &KeyPressEvent::key(Key::Backspace)),
            Some(InputEvent::Backspace { index: 2 })
        );
        assert_eq!(InputEvent::from_key(2, &KeyPressEvent::key(Key::Tab)), None);
        assert_eq!(InputEvent::from_key(2, &KeyPressEvent::key(Key::Delete)), None);
    }

    #[test]
    fn test_from_text() {
        assert_eq!(InputEvent::from_text(1, ""), InputEvent::Clear { index: 1 });
        assert_eq!(InputEvent::from_text(1, "78"), typed(1, '7'));
    }
}
