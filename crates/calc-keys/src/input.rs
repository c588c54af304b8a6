//! Calculator input classification
//!
//! The union of value shapes downstream input handling may receive: an
//! operator from the vocabulary, a free-form string, or a number.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operator::Operator;

/// A value accepted as calculator input
///
/// Untagged on the wire, so the serialized shape is an operator glyph
/// string, any other string, or a number. Booleans, arrays, and objects
/// fail to deserialize. Variant order matters: glyph strings resolve to
/// [`Operator`] before falling through to [`Text`](Self::Text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalculatorInput {
    /// One of the eleven vocabulary operators
    Operator(Operator),
    /// A numeric value
    Number(f64),
    /// Free-form text, e.g. a digit string still under composition
    Text(String),
}

impl CalculatorInput {
    /// Tags a token as an operator when it is a vocabulary glyph, text
    /// otherwise
    ///
    /// This is the classification boundary for key handling: `"×"` is an
    /// operator, `"42"` and `"*"` are plain text.
    #[must_use]
    pub fn classify(token: &str) -> Self {
        Operator::from_glyph(token).map_or_else(|| Self::Text(token.to_string()), Self::Operator)
    }

    /// Returns true if this input is a vocabulary operator
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true if this input is a number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns true if this input is free-form text
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns the operator, if this input is one
    #[must_use]
    pub const fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// Returns the numeric value, if this input is one
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text, if this input is free-form text
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CalculatorInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operator(op) => write!(f, "{op}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<Operator> for CalculatorInput {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl From<f64> for CalculatorInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CalculatorInput {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<String> for CalculatorInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for CalculatorInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Classification tests =====

    #[test]
    fn test_classify_every_glyph_as_operator() {
        for op in Operator::ALL {
            let input = CalculatorInput::classify(op.glyph());
            assert_eq!(input, CalculatorInput::Operator(op));
        }
    }

    #[test]
    fn test_classify_digit_string_as_text() {
        let input = CalculatorInput::classify("42");
        assert_eq!(input, CalculatorInput::Text("42".to_string()));
    }

    #[test]
    fn test_classify_ascii_star_as_text() {
        // '*' is not in the vocabulary; only '×' is
        assert!(CalculatorInput::classify("*").is_text());
        assert!(CalculatorInput::classify("×").is_operator());
    }

    // ===== Predicate and accessor tests =====

    #[test]
    fn test_predicates() {
        assert!(CalculatorInput::Operator(Operator::Add).is_operator());
        assert!(CalculatorInput::Number(42.0).is_number());
        assert!(CalculatorInput::Text("42".to_string()).is_text());
        assert!(!CalculatorInput::Number(42.0).is_text());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(
            CalculatorInput::Operator(Operator::Divide).as_operator(),
            Some(Operator::Divide)
        );
        assert_eq!(CalculatorInput::Number(3.5).as_number(), Some(3.5));
        assert_eq!(
            CalculatorInput::Text("abc".to_string()).as_text(),
            Some("abc")
        );
        assert_eq!(CalculatorInput::Number(1.0).as_operator(), None);
        assert_eq!(CalculatorInput::Text("1".to_string()).as_number(), None);
    }

    // ===== Conversion tests =====

    #[test]
    fn test_from_operator() {
        let input: CalculatorInput = Operator::Percentage.into();
        assert_eq!(input.as_operator(), Some(Operator::Percentage));
    }

    #[test]
    fn test_from_number() {
        let input: CalculatorInput = 42.0.into();
        assert_eq!(input.as_number(), Some(42.0));
    }

    #[test]
    fn test_from_integer() {
        let input: CalculatorInput = 42.into();
        assert_eq!(input.as_number(), Some(42.0));
    }

    #[test]
    fn test_from_strings() {
        let owned: CalculatorInput = String::from("42").into();
        let borrowed: CalculatorInput = "42".into();
        assert_eq!(owned, borrowed);
        assert!(owned.is_text());
    }

    // ===== Display tests =====

    #[test]
    fn test_display() {
        assert_eq!(CalculatorInput::Operator(Operator::Backspace).to_string(), "⌫");
        assert_eq!(CalculatorInput::Number(5.0).to_string(), "5");
        assert_eq!(CalculatorInput::Number(2.5).to_string(), "2.5");
        assert_eq!(CalculatorInput::Text("12".to_string()).to_string(), "12");
    }

    // ===== Wire shape tests =====

    #[test]
    fn test_deserialize_glyph_string_as_operator() {
        let input: CalculatorInput = serde_json::from_str("\"±\"").unwrap();
        assert_eq!(input, CalculatorInput::Operator(Operator::ToggleSign));
    }

    #[test]
    fn test_deserialize_plain_string_as_text() {
        let input: CalculatorInput = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(input, CalculatorInput::Text("42".to_string()));
    }

    #[test]
    fn test_deserialize_number_as_number() {
        let input: CalculatorInput = serde_json::from_str("42").unwrap();
        assert_eq!(input, CalculatorInput::Number(42.0));
    }

    #[test]
    fn test_deserialize_rejects_other_shapes() {
        assert!(serde_json::from_str::<CalculatorInput>("true").is_err());
        assert!(serde_json::from_str::<CalculatorInput>("{}").is_err());
        assert!(serde_json::from_str::<CalculatorInput>("[1, 2]").is_err());
        assert!(serde_json::from_str::<CalculatorInput>("null").is_err());
    }

    #[test]
    fn test_serialize_shapes() {
        assert_eq!(
            serde_json::to_string(&CalculatorInput::Operator(Operator::Multiply)).unwrap(),
            "\"×\""
        );
        assert_eq!(
            serde_json::to_string(&CalculatorInput::Number(42.0)).unwrap(),
            "42.0"
        );
        assert_eq!(
            serde_json::to_string(&CalculatorInput::Text("42".to_string())).unwrap(),
            "\"42\""
        );
    }
}
