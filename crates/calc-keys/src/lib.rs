//! Calc-keys: the calculator key vocabulary
//!
//! A closed, frozen vocabulary of the eleven calculator operator keys and
//! their display glyphs, the [`CalculatorInput`](input::CalculatorInput)
//! union of accepted input shapes, and the standard key legend layout
//! built from them.
//!
//! The vocabulary is closed by construction: [`Operator`](operator::Operator)
//! is a fieldless enum, so no value outside the eleven keys is expressible
//! and every glyph lookup is total. The only runtime failure mode is
//! parsing a foreign string, which returns a typed
//! [`KeyError`](error::KeyError).
//!
//! # Example
//!
//! ```rust
//! use calc_keys::prelude::*;
//!
//! assert_eq!(Operator::Multiply.glyph(), "×");
//! assert_eq!(Operator::from_glyph("±"), Some(Operator::ToggleSign));
//!
//! let input = CalculatorInput::classify("÷");
//! assert!(input.is_operator());
//!
//! let keypad = Keypad::new();
//! assert_eq!(keypad.len(), 21);
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod error;
pub mod input;
pub mod keypad;
pub mod operator;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{KeyError, KeyResult};
    pub use crate::input::CalculatorInput;
    pub use crate::keypad::{Key, KeyLegend, Keypad};
    pub use crate::operator::Operator;
}
