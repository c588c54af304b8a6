//! Calc-keys CLI library
//!
//! Command-line interface for inspecting the calculator key vocabulary:
//! the operator table, the key legend layout, glyph lookup by name, and
//! token classification.

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

mod commands;
mod config;
mod error;
pub mod render;

pub use commands::{Cli, ClassifyArgs, ColorArg, Commands, FormatArg, GlyphArgs};
pub use config::{CliConfig, ColorChoice, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
