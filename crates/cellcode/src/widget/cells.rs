//! Projection of the logical code string onto a fixed array of cells.
//!
//! The cell array is never stored: it is recomputed from `(value, fields)`
//! whenever it is needed, so what the user sees can never drift from the
//! string the owner holds.
//!
//! # String Encoding
//!
//! Inside the widget an empty cell is the explicit [`Cell::Empty`]. When the
//! cells are joined back into the logical string, an empty cell that sits
//! *before* a filled one is written as [`BLANK`] so later cells keep their
//! position; trailing empty cells are dropped. Projecting reverses this: any
//! whitespace character in the value becomes an empty cell. Whitespace is
//! therefore never a storable code character.
//!
//! ```
//! use cellcode::widget::{Cell, CellArray};
//!
//! let cells = CellArray::project("1 3", 4);
//! assert_eq!(
//!     cells.cells(),
//!     &[Cell::Filled('1'), Cell::Empty, Cell::Filled('3'), Cell::Empty]
//! );
//! assert_eq!(cells.to_value(), "1 3");
//! ```

use std::fmt;

/// The character that stands for an empty cell in the middle of a value.
pub const BLANK: char = ' ';

/// A single code cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No character entered yet.
    #[default]
    Empty,
    /// One validated, case-normalized character.
    Filled(char),
}

impl Cell {
    /// Build a cell from a character of the logical value.
    ///
    /// Whitespace maps to [`Cell::Empty`].
    pub fn from_char(ch: char) -> Self {
        if ch.is_whitespace() {
            Cell::Empty
        } else {
            Cell::Filled(ch)
        }
    }

    /// Returns true if the cell holds a character.
    #[inline]
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    /// Returns true if the cell is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.is_filled()
    }

    /// The character held by the cell.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Cell::Filled(ch) => Some(*ch),
            Cell::Empty => None,
        }
    }

    /// The text a cell displays: its character, or nothing.
    pub fn display_text(&self) -> String {
        self.as_char().map(String::from).unwrap_or_default()
    }
}

/// The derived, fixed-length array of cells for one render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellArray {
    cells: Vec<Cell>,
}

impl CellArray {
    /// Project `value` onto `fields` cells.
    ///
    /// The first `min(len(value), fields)` characters become cells, the rest
    /// is padded with [`Cell::Empty`]. Characters beyond `fields` are not
    /// displayable and are dropped.
    pub fn project(value: &str, fields: usize) -> Self {
        let mut cells: Vec<Cell> = value.chars().take(fields).map(Cell::from_char).collect();
        cells.resize(fields, Cell::Empty);
        Self { cells }
    }

    /// Number of cells (the field count).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true for a zero-field array.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cell at `index`.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells in order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over the cells in order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Replace the cell at `index`.
    ///
    /// Returns `false` (and changes nothing) if `index` is out of range.
    pub fn set(&mut self, index: usize, cell: Cell) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Whether every cell holds a character.
    ///
    /// A zero-field array is never complete.
    pub fn is_complete(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(Cell::is_filled)
    }

    /// Join the cells back into the logical value.
    pub fn to_value(&self) -> String {
        let joined: String = self
            .cells
            .iter()
            .map(|cell| cell.as_char().unwrap_or(BLANK))
            .collect();
        joined.trim_end_matches(BLANK).to_string()
    }
}

impl fmt::Display for CellArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Cell::Filled(ch) => write!(f, "[{ch}]")?,
                Cell::Empty => write!(f, "[ ]")?,
            }
        }
        Ok(())
    }
}

/// Truncate `value` to at most `fields` characters.
pub fn truncate_value(value: &str, fields: usize) -> String {
    value.chars().take(fields).collect()
}

/// Stable positional identifier of a cell.
///
/// Formats as `code-input-{index}`; this is the only way cells address each
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(usize);

impl CellId {
    /// Prefix shared by all cell identifiers.
    pub const PREFIX: &'static str = "code-input-";

    /// Identifier of the wrapper element around all cells.
    pub const WRAPPER: &'static str = "code-input-wrapper";

    /// Identifier of the cell at `index`.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The cell's position.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Parse a formatted identifier such as `code-input-3`.
    pub fn parse(id: &str) -> Option<Self> {
        let digits = id.strip_prefix(Self::PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(Self)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_pads_short_value() {
        let cells = CellArray::project("12", 4);
        assert_eq!(cells.len(), 4);
        assert_eq!(
            cells.cells(),
            &[Cell::Filled('1'), Cell::Filled('2'), Cell::Empty, Cell::Empty]
        );
        assert_eq!(cells.filled_count(), 2);
        assert!(!cells.is_complete());
    }

    #[test]
    fn test_project_truncates_long_value() {
        let cells = CellArray::project("abcdef", 4);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells.to_value(), "abcd");
        assert!(cells.is_complete());
    }

    #[test]
    fn test_project_zero_fields() {
        let cells = CellArray::project("1234", 0);
        assert!(cells.is_empty());
        assert!(!cells.is_complete());
        assert_eq!(cells.to_value(), "");
    }

    #[test]
    fn test_project_counts_chars_not_bytes() {
        let cells = CellArray::project("äöü", 2);
        assert_eq!(cells.cells(), &[Cell::Filled('ä'), Cell::Filled('ö')]);
    }

    #[test]
    fn test_filled_prefix_matches_value() {
        for fields in 1..8 {
            for value in ["", "1", "123", "1234567", "abcdefghij"] {
                let cells = CellArray::project(value, fields);
                assert_eq!(cells.len(), fields);
                let prefix: String = cells.iter().filter_map(|c| c.as_char()).collect();
                assert_eq!(prefix, truncate_value(value, fields));
            }
        }
    }

    #[test]
    fn test_interior_blank_survives_round_trip() {
        let mut cells = CellArray::project("1234", 4);
        assert!(cells.set(1, Cell::Empty));
        assert_eq!(cells.to_value(), "1 34");
        assert_eq!(CellArray::project(&cells.to_value(), 4), cells);
    }

    #[test]
    fn test_trailing_blanks_dropped() {
        let mut cells = CellArray::project("", 4);
        cells.set(0, Cell::Filled('1'));
        assert_eq!(cells.to_value(), "1");

        cells.set(2, Cell::Filled('3'));
        assert_eq!(cells.to_value(), "1 3");
    }

    #[test]
    fn test_set_out_of_range() {
        let mut cells = CellArray::project("12", 2);
        assert!(!cells.set(2, Cell::Filled('3')));
        assert_eq!(cells.to_value(), "12");
    }

    #[test]
    fn test_display() {
        let cells = CellArray::project("4 2", 4);
        assert_eq!(cells.to_string(), "[4][ ][2][ ]");
    }

    #[test]
    fn test_cell_id_format_and_parse() {
        assert_eq!(CellId::new(3).to_string(), "code-input-3");
        assert_eq!(CellId::parse("code-input-12"), Some(CellId::new(12)));
        assert_eq!(CellId::parse("code-input-"), None);
        assert_eq!(CellId::parse("code-input-+1"), None);
        assert_eq!(CellId::parse("code-input-wrapper"), None);
        assert_eq!(CellId::parse("input-1"), None);
    }
}
