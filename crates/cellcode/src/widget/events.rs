//! Input events delivered to the code entry widget.
//!
//! The host translates its native keyboard and clipboard events into
//! [`KeyPressEvent`] and [`PasteEvent`] before handing them to
//! [`CodeInput`](super::CodeInput). After handling, [`EventBase::is_accepted`]
//! tells the host whether its default action for the event (inserting the
//! character natively, moving a text caret, pasting) must be suppressed.

use std::fmt;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Meta modifier only.
    pub const META: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: true,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Whether a modifier that turns a printable key into a shortcut is held.
    ///
    /// Shift alone does not count: it only selects the shifted glyph.
    pub fn is_shortcut(&self) -> bool {
        self.control || self.alt || self.meta
    }
}

/// Keys the code entry widget distinguishes.
///
/// Printable keys arrive as [`Key::Character`] carrying the produced
/// character (already shifted by the platform).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key that produces a single printable character.
    Character(char),

    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,

    // Editing
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,

    /// Any key the widget has no use for.
    Unidentified,
}

impl Key {
    /// Parse a key name as reported by web-style keyboard events.
    ///
    /// A name consisting of exactly one character is a [`Key::Character`];
    /// `"Spacebar"` and `" "` both map to a space character. Unknown names map
    /// to [`Key::Unidentified`].
    ///
    /// ```
    /// use cellcode::widget::Key;
    ///
    /// assert_eq!(Key::from_name("7"), Key::Character('7'));
    /// assert_eq!(Key::from_name("Backspace"), Key::Backspace);
    /// assert_eq!(Key::from_name("F13"), Key::Unidentified);
    /// ```
    pub fn from_name(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Key::Character(ch);
        }
        match name {
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            "Backspace" => Key::Backspace,
            "Delete" | "Del" => Key::Delete,
            "Enter" | "Return" => Key::Enter,
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            "Spacebar" => Key::Character(' '),
            _ => Key::Unidentified,
        }
    }

    /// The printable character produced by this key, if any.
    pub fn to_char(self) -> Option<char> {
        match self {
            Key::Character(ch) => Some(ch),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Character(ch) => write!(f, "{ch}"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    ///
    /// An accepted event must not trigger the host's default action.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, suppressing the host's default action.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, letting the host run its default action.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Key press event, delivered to the cell that has keyboard focus.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            is_repeat: false,
        }
    }

    /// A plain key press without modifiers.
    pub fn key(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE)
    }

    /// A printable character typed without modifiers.
    pub fn character(ch: char) -> Self {
        Self::key(Key::Character(ch))
    }

    /// Mark this event as an auto-repeat.
    pub fn repeated(mut self) -> Self {
        self.is_repeat = true;
        self
    }

    /// The text this key press would type, if it types anything at all.
    ///
    /// Printable keys held together with Ctrl, Alt or Meta are shortcuts and
    /// type nothing.
    pub fn typed_char(&self) -> Option<char> {
        if self.modifiers.is_shortcut() {
            return None;
        }
        self.key.to_char()
    }

    /// Whether this is the platform paste shortcut (Ctrl+V, or Cmd+V on macOS).
    pub fn is_paste_shortcut(&self) -> bool {
        matches!(self.key, Key::Character('v' | 'V'))
            && (self.modifiers.control || self.modifiers.meta)
            && !self.modifiers.alt
    }
}

/// Paste event, delivered to the widget's wrapper.
#[derive(Debug, Clone)]
pub struct PasteEvent {
    /// Base event data.
    pub base: EventBase,
    /// The plain-text payload of the clipboard.
    pub text: String,
}

impl PasteEvent {
    /// Create a paste event carrying the given plain text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: EventBase::new(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("a"), Key::Character('a'));
        assert_eq!(Key::from_name(" "), Key::Character(' '));
        assert_eq!(Key::from_name("é"), Key::Character('é'));
        assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_name("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_name("Shift"), Key::Unidentified);
        assert_eq!(Key::from_name(""), Key::Unidentified);
    }

    #[test]
    fn test_typed_char_ignores_shortcuts() {
        assert_eq!(KeyPressEvent::character('v').typed_char(), Some('v'));

        let shifted = KeyPressEvent::new(Key::Character('V'), KeyboardModifiers::SHIFT);
        assert_eq!(shifted.typed_char(), Some('V'));

        let ctrl = KeyPressEvent::new(Key::Character('v'), KeyboardModifiers::CTRL);
        assert_eq!(ctrl.typed_char(), None);
        assert!(ctrl.is_paste_shortcut());

        let cmd = KeyPressEvent::new(Key::Character('v'), KeyboardModifiers::META);
        assert!(cmd.is_paste_shortcut());

        assert!(!KeyPressEvent::key(Key::Backspace).is_paste_shortcut());
        assert_eq!(KeyPressEvent::key(Key::Backspace).typed_char(), None);
    }

    #[test]
    fn test_event_accept_ignore() {
        let mut event = PasteEvent::new("1234");
        assert!(!event.base.is_accepted());
        event.base.accept();
        assert!(event.base.is_accepted());
        event.base.ignore();
        assert!(!event.base.is_accepted());
    }
}
