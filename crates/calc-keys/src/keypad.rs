//! Key legend layout
//!
//! The standard calculator grid the vocabulary labels. Legends and
//! positions are fixed at construction; pressed state, hit testing, and
//! rendering belong to whatever UI consumes the layout, not here.

use serde::{Deserialize, Serialize};

use crate::operator::Operator;

/// The label on a single keypad key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyLegend {
    /// A digit key (0-9)
    Digit(u8),
    /// An operator key from the vocabulary
    Operator(Operator),
}

impl KeyLegend {
    /// Returns the display label for this legend
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operator(op) => op.glyph().to_string(),
        }
    }

    /// Returns true if this legend is a digit key
    #[must_use]
    pub const fn is_digit(self) -> bool {
        matches!(self, Self::Digit(_))
    }

    /// Returns true if this legend is an operator key
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Operator(_))
    }
}

/// A key legend with its fixed grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    /// The legend on the key
    pub legend: KeyLegend,
    /// Grid row (0-indexed, top to bottom)
    pub row: usize,
    /// Grid column (0-indexed, left to right)
    pub col: usize,
}

impl Key {
    /// Creates a new key at the given position
    #[must_use]
    pub const fn new(legend: KeyLegend, row: usize, col: usize) -> Self {
        Self { legend, row, col }
    }

    const fn digit(d: u8, row: usize, col: usize) -> Self {
        Self::new(KeyLegend::Digit(d), row, col)
    }

    const fn operator(op: Operator, row: usize, col: usize) -> Self {
        Self::new(KeyLegend::Operator(op), row, col)
    }
}

/// The standard calculator key layout
///
/// Every vocabulary operator and every digit appears exactly once:
///
/// ```text
/// [ CE ] [ C ] [ ⌫ ] [ ÷ ]
/// [ 7  ] [ 8 ] [ 9 ] [ × ]
/// [ 4  ] [ 5 ] [ 6 ] [ - ]
/// [ 1  ] [ 2 ] [ 3 ] [ + ]
/// [ ±  ] [ 0 ] [ . ] [ % ]
/// [ =  ]
/// ```
///
/// Keys carry explicit positions, so the lone wide equals row needs no
/// filler cells.
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Keys with their positions
    keys: Vec<Key>,
    /// Number of rows in the bounding grid
    rows: usize,
    /// Number of columns in the bounding grid
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator key layout
    #[must_use]
    pub fn new() -> Self {
        let keys = vec![
            // Row 0: CE C ⌫ ÷
            Key::operator(Operator::Clear, 0, 0),
            Key::operator(Operator::ClearAll, 0, 1),
            Key::operator(Operator::Backspace, 0, 2),
            Key::operator(Operator::Divide, 0, 3),
            // Row 1: 7 8 9 ×
            Key::digit(7, 1, 0),
            Key::digit(8, 1, 1),
            Key::digit(9, 1, 2),
            Key::operator(Operator::Multiply, 1, 3),
            // Row 2: 4 5 6 -
            Key::digit(4, 2, 0),
            Key::digit(5, 2, 1),
            Key::digit(6, 2, 2),
            Key::operator(Operator::Subtract, 2, 3),
            // Row 3: 1 2 3 +
            Key::digit(1, 3, 0),
            Key::digit(2, 3, 1),
            Key::digit(3, 3, 2),
            Key::operator(Operator::Add, 3, 3),
            // Row 4: ± 0 . %
            Key::operator(Operator::ToggleSign, 4, 0),
            Key::digit(0, 4, 1),
            Key::operator(Operator::Decimal, 4, 2),
            Key::operator(Operator::Percentage, 4, 3),
            // Row 5: wide equals
            Key::operator(Operator::Equals, 5, 0),
        ];

        Self {
            keys,
            rows: 6,
            cols: 4,
        }
    }

    /// Returns the number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the layout has no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the bounding grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all keys
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Gets the key at a grid position
    ///
    /// The grid is not fully populated; positions inside the bounding box
    /// with no key (the rest of the equals row) return `None`.
    #[must_use]
    pub fn key_at(&self, row: usize, col: usize) -> Option<&Key> {
        self.keys.iter().find(|k| k.row == row && k.col == col)
    }

    /// Finds a key by its display label
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&Key> {
        self.keys.iter().find(|k| k.legend.label() == label)
    }

    /// Finds the key carrying the given operator
    #[must_use]
    pub fn find_operator(&self, op: Operator) -> Option<&Key> {
        self.keys
            .iter()
            .find(|k| k.legend == KeyLegend::Operator(op))
    }

    /// Finds the key carrying the given digit
    #[must_use]
    pub fn find_digit(&self, d: u8) -> Option<&Key> {
        self.keys.iter().find(|k| k.legend == KeyLegend::Digit(d))
    }
}
