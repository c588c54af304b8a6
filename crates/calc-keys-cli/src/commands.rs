//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{ColorChoice, OutputFormat};

/// Calc-keys: inspect the calculator key vocabulary
#[derive(Parser, Debug)]
#[command(name = "calc-keys")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Output format (text, json)
    #[arg(long, default_value = "text", global = true)]
    pub format: FormatArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the operator vocabulary table
    List,

    /// Print the key legend layout
    Keypad,

    /// Look up display glyphs by operator name
    Glyph(GlyphArgs),

    /// Classify tokens as operator, number, or text
    Classify(ClassifyArgs),
}

/// Arguments for the glyph command
#[derive(Parser, Debug)]
pub struct GlyphArgs {
    /// Operator names to look up (e.g. MULTIPLY, TOGGLE_SIGN)
    #[arg(required = true)]
    pub names: Vec<String>,
}

/// Arguments for the classify command
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Tokens to classify
    #[arg(required = true)]
    pub tokens: Vec<String>,
}

/// Color output argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
