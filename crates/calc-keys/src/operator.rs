//! The calculator operator vocabulary
//!
//! A closed set of eleven operator keys with fixed display glyphs. The set
//! is frozen at compile time: no variant can be added or removed at runtime,
//! and every glyph lookup over the known names is total.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KeyError;

/// Symbolic calculator operators with their fixed display glyphs
///
/// Serializes as the glyph string (`Multiply` ⇄ `"×"`); deserialization
/// accepts exactly the eleven glyphs and rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (`+`)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (`-`)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (`×`, the Unicode multiplication sign)
    #[serde(rename = "×")]
    Multiply,
    /// Division (`÷`, the Unicode division sign)
    #[serde(rename = "÷")]
    Divide,
    /// Evaluate the pending expression (`=`)
    #[serde(rename = "=")]
    Equals,
    /// Decimal point (`.`)
    #[serde(rename = ".")]
    Decimal,
    /// Clear the current entry (`CE`)
    #[serde(rename = "CE")]
    Clear,
    /// Clear all state (`C`)
    #[serde(rename = "C")]
    ClearAll,
    /// Delete the last character (`⌫`)
    #[serde(rename = "⌫")]
    Backspace,
    /// Percentage (`%`)
    #[serde(rename = "%")]
    Percentage,
    /// Toggle the sign of the current entry (`±`)
    #[serde(rename = "±")]
    ToggleSign,
}

impl Operator {
    /// Every operator in the vocabulary, in declaration order
    pub const ALL: [Self; 11] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Equals,
        Self::Decimal,
        Self::Clear,
        Self::ClearAll,
        Self::Backspace,
        Self::Percentage,
        Self::ToggleSign,
    ];

    /// Number of operators in the vocabulary
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the display glyph for this operator
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Equals => "=",
            Self::Decimal => ".",
            Self::Clear => "CE",
            Self::ClearAll => "C",
            Self::Backspace => "⌫",
            Self::Percentage => "%",
            Self::ToggleSign => "±",
        }
    }

    /// Returns the canonical symbolic name for this operator
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Equals => "EQUALS",
            Self::Decimal => "DECIMAL",
            Self::Clear => "CLEAR",
            Self::ClearAll => "CLEAR_ALL",
            Self::Backspace => "BACKSPACE",
            Self::Percentage => "PERCENTAGE",
            Self::ToggleSign => "TOGGLE_SIGN",
        }
    }

    /// Looks up an operator by its display glyph
    ///
    /// Returns `None` for anything outside the vocabulary, including the
    /// ASCII lookalikes `*` and `/`.
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.glyph() == glyph)
    }

    /// Looks up an operator by its symbolic name (e.g. `"MULTIPLY"`)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.name() == name)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for Operator {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_glyph(s).ok_or_else(|| KeyError::unknown_operator(s))
    }
}

impl TryFrom<&str> for Operator {
    type Error = KeyError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
