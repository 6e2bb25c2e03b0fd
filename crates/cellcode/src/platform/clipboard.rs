//! Clipboard access for the paste shortcut.
//!
//! This module provides a thin wrapper around the `arboard` crate, plus the
//! [`PasteSource`] abstraction the widget reads from. Anything that can hand
//! back a string can act as a paste source, which keeps the widget testable
//! without a display server.
//!
//! # Platform Notes
//!
//! - **Windows**: Uses the Win32 clipboard API
//! - **macOS**: Uses NSPasteboard
//! - **Linux**: Uses X11 selections or Wayland data-control protocol

use thiserror::Error;

/// Error type for clipboard operations.
#[derive(Debug, Clone, Error)]
#[error("clipboard error: {message}")]
pub struct ClipboardError {
    message: String,
}

impl ClipboardError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The underlying error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(feature = "clipboard")]
impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// A source of plain text for paste operations.
///
/// Implemented by [`Clipboard`] and by any `FnMut() -> Result<String, ClipboardError>`
/// closure.
pub trait PasteSource {
    /// Read the current plain-text payload.
    fn paste_text(&mut self) -> Result<String, ClipboardError>;
}

impl<F> PasteSource for F
where
    F: FnMut() -> Result<String, ClipboardError>,
{
    fn paste_text(&mut self) -> Result<String, ClipboardError> {
        self()
    }
}

/// Cross-platform system clipboard access.
///
/// Clipboard operations should be performed on the main/UI thread for best
/// compatibility across platforms.
#[cfg(feature = "clipboard")]
pub struct Clipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl Clipboard {
    /// Create a new clipboard instance.
    ///
    /// # Errors
    ///
    /// Returns [`CodeInputError::Clipboard`](crate::CodeInputError::Clipboard)
    /// if the system clipboard is unavailable or locked by another process.
    pub fn new() -> crate::Result<Self> {
        let inner = arboard::Clipboard::new().map_err(ClipboardError::from)?;
        Ok(Self { inner })
    }

    /// Get the current text content from the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is empty, holds non-text data, or
    /// cannot be accessed.
    pub fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.inner.get_text().map_err(Into::into)
    }

    /// Replace the clipboard contents with the given text.
    pub fn set_text(&mut self, text: impl AsRef<str>) -> Result<(), ClipboardError> {
        self.inner.set_text(text.as_ref()).map_err(Into::into)
    }
}

#[cfg(feature = "clipboard")]
impl PasteSource for Clipboard {
    fn paste_text(&mut self) -> Result<String, ClipboardError> {
        self.get_text()
    }
}

#[cfg(feature = "clipboard")]
impl std::fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clipboard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_paste_source() {
        let mut calls = 0;
        let mut source = || {
            calls += 1;
            Ok::<_, ClipboardError>("482913".to_string())
        };
        assert_eq!(source.paste_text().unwrap(), "482913");
        assert_eq!(source.paste_text().unwrap(), "482913");
        drop(source);
        assert_eq!(calls, 2);
    }

    #[cfg(feature = "clipboard")]
    #[test]
    fn test_clipboard_unavailable_reports_crate_error() {
        // Headless machines have no clipboard; either outcome is valid here.
        if let Err(err) = Clipboard::new() {
            assert!(matches!(err, crate::CodeInputError::Clipboard(_)), "{err:?}");
        }
    }

    #[test]
    fn test_clipboard_error_display() {
        let err = ClipboardError::new("no text available");
        assert_eq!(err.to_string(), "clipboard error: no text available");
        assert_eq!(err.message(), "no text available");
    }
}
