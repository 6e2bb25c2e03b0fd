//! Index-addressed focus registry for code cells.
//!
//! Each rendered cell registers a [`CellHandle`] when it is mounted. The
//! widget moves focus by cell index only; an index with no registered handle
//! (out of range, or not mounted yet) is a silent no-op.
//!
//! # Usage
//!
//! ```ignore
//! use cellcode::widget::{CellHandle, FocusRegistry};
//!
//! let mut registry = FocusRegistry::new();
//! registry.register(0, Box::new(first_cell));
//! registry.register(1, Box::new(second_cell));
//!
//! registry.focus(1); // second cell focused
//! registry.focus(7); // no such cell, nothing happens
//! ```

use std::fmt;

use cellcode_core::logging::targets;

/// Host-side handle to one rendered cell.
///
/// The host implements this for whatever object backs a cell on screen.
pub trait CellHandle {
    /// Give keyboard focus to the cell.
    fn focus(&mut self);

    /// Focus the cell and select (highlight) its contents.
    fn select(&mut self);

    /// Remove keyboard focus from the cell.
    fn blur(&mut self);
}

/// Tracks the cell handles of one code input and which cell has focus.
#[derive(Default)]
pub struct FocusRegistry {
    handles: Vec<Option<Box<dyn CellHandle>>>,
    focused: Option<usize>,
}

impl fmt::Debug for FocusRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered: Vec<usize> = self
            .handles
            .iter()
            .enumerate()
            .filter_map(|(i, h)| h.as_ref().map(|_| i))
            .collect();
        f.debug_struct("FocusRegistry")
            .field("registered", &registered)
            .field("focused", &self.focused)
            .finish()
    }
}

impl FocusRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
            focused: None,
        }
    }

    /// Register the handle for the cell at `index`, replacing any previous one.
    ///
    /// Returns `false` (and drops `handle`) if `index` cannot be addressed.
    pub fn register(&mut self, index: usize, handle: Box<dyn CellHandle>) -> bool {
        let Some(len) = index.checked_add(1) else {
            tracing::debug!(target: targets::FOCUS, index, "cell index out of range, not registered");
            return false;
        };
        if self.handles.len() < len {
            self.handles.resize_with(len, || None);
        }
        self.handles[index] = Some(handle);
        true
    }

    /// Remove the handle for the cell at `index`.
    pub fn unregister(&mut self, index: usize) -> Option<Box<dyn CellHandle>> {
        let handle = self.handles.get_mut(index)?.take();
        if self.focused == Some(index) {
            self.focused = None;
        }
        handle
    }

    /// Drop every handle at or beyond `len`.
    pub fn truncate(&mut self, len: usize) {
        self.handles.truncate(len);
        if self.focused.is_some_and(|i| i >= len) {
            self.focused = None;
        }
    }

    /// Whether a handle is registered for `index`.
    pub fn contains(&self, index: usize) -> bool {
        matches!(self.handles.get(index), Some(Some(_)))
    }

    /// Number of registered handles.
    pub fn registered_count(&self) -> usize {
        self.handles.iter().filter(|h| h.is_some()).count()
    }

    /// The cell that currently has focus, as far as the registry knows.
    #[inline]
    pub fn focused_cell(&self) -> Option<usize> {
        self.focused
    }

    /// Check if the cell at `index` has focus.
    #[inline]
    pub fn has_focus(&self, index: usize) -> bool {
        self.focused == Some(index)
    }

    /// Record that the host moved focus to `index` on its own (e.g. a click).
    pub fn note_focused(&mut self, index: Option<usize>) {
        self.focused = index;
    }

    fn handle_mut(&mut self, index: usize) -> Option<&mut (dyn CellHandle + 'static)> {
        self.handles.get_mut(index)?.as_deref_mut()
    }

    /// Focus the cell at `index`.
    ///
    /// Returns `false` if no cell is registered there.
    pub fn focus(&mut self, index: usize) -> bool {
        let Some(handle) = self.handle_mut(index) else {
            tracing::debug!(target: targets::FOCUS, index, "focus target missing, ignoring");
            return false;
        };
        handle.focus();
        self.focused = Some(index);
        true
    }

    /// Focus and select the cell at `index`.
    ///
    /// Returns `false` if no cell is registered there.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(handle) = self.handle_mut(index) else {
            tracing::debug!(target: targets::FOCUS, index, "select target missing, ignoring");
            return false;
        };
        handle.select();
        self.focused = Some(index);
        true
    }

    /// Blur the cell at `index`.
    ///
    /// Returns `false` if no cell is registered there.
    pub fn blur(&mut self, index: usize) -> bool {
        let Some(handle) = self.handle_mut(index) else {
            tracing::debug!(target: targets::FOCUS, index, "blur target missing, ignoring");
            return false;
        };
        handle.blur();
        if self.focused == Some(index) {
            self.focused = None;
        }
        true
    }
}
