//! Render description of a code input.
//!
//! The widget does not draw anything itself. [`CodeInput::view`](super::CodeInput::view)
//! returns a [`CodeInputView`] that a host turns into real elements: one
//! wrapper holding `fields` single-character cells.

use std::collections::BTreeMap;

use unicode_segmentation::UnicodeSegmentation;

use super::cells::{CellArray, CellId};
use crate::config::CodeInputConfig;

/// Pass-through attributes forwarded verbatim to a host element.
pub type Attributes = BTreeMap<String, String>;

/// Class carried by every cell.
pub const CELL_CLASS: &str = "beautify-input-cell";

/// Class carried by the wrapper.
pub const WRAPPER_CLASS: &str = "beautify-code-input-wrapper";

/// Description of one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// Stable identifier (`code-input-{index}`).
    pub id: CellId,
    /// Text shown in the cell; empty for an empty cell.
    pub display_text: String,
    /// Placeholder glyph shown while the cell is empty.
    pub placeholder: String,
    /// Maximum number of characters the host element accepts.
    pub max_length: usize,
    /// Style classes, built-in class first.
    pub classes: Vec<String>,
    /// Forwarded attributes.
    pub attributes: Attributes,
    /// Whether the cell has keyboard focus.
    pub focused: bool,
}

impl CellView {
    /// Position of the cell.
    pub fn index(&self) -> usize {
        self.id.index()
    }

    /// Whether the cell shows a character.
    pub fn is_filled(&self) -> bool {
        !self.display_text.is_empty()
    }
}

/// Description of the wrapper around all cells.
///
/// The wrapper is the paste target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperView {
    /// Identifier of the wrapper.
    pub id: &'static str,
    /// Style classes, built-in class first.
    pub classes: Vec<String>,
    /// Forwarded attributes.
    pub attributes: Attributes,
}

/// Description of a whole code input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeInputView {
    /// The wrapper element.
    pub wrapper: WrapperView,
    /// The cells, in order.
    pub cells: Vec<CellView>,
}

impl CodeInputView {
    /// Build the view for `cells` under `config`.
    pub(crate) fn build(cells: &CellArray, config: &CodeInputConfig, focused: Option<usize>) -> Self {
        let placeholders: Vec<&str> = config.placeholder.graphemes(true).collect();
        let cell_classes = class_list(CELL_CLASS, &config.class_name_input);

        let cells = cells
            .iter()
            .enumerate()
            .map(|(index, cell)| CellView {
                id: CellId::new(index),
                display_text: cell.display_text(),
                placeholder: placeholders.get(index).map(|g| g.to_string()).unwrap_or_default(),
                max_length: 1,
                classes: cell_classes.clone(),
                attributes: config.input_attributes.clone(),
                focused: focused == Some(index),
            })
            .collect();

        Self {
            wrapper: WrapperView {
                id: CellId::WRAPPER,
                classes: class_list(WRAPPER_CLASS, &config.class_name_inputs_wrapper),
                attributes: config.wrapper_attributes.clone(),
            },
            cells,
        }
    }

    /// The text currently shown, one string per cell.
    pub fn display_texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.display_text.as_str()).collect()
    }
}

fn class_list(builtin: &str, extra: &str) -> Vec<String> {
    std::iter::once(builtin)
        .chain(extra.split_whitespace())
        .map(str::to_string)
        .collect()
}
