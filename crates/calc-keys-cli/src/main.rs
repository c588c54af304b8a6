//! Calc-keys CLI: inspect the calculator key vocabulary
//!
//! ## Usage
//!
//! ```bash
//! calc-keys list                  # Operator vocabulary table
//! calc-keys keypad                # Key legend layout
//! calc-keys glyph MULTIPLY        # Glyph lookup by name
//! calc-keys classify × 42 abc     # Token classification
//! calc-keys list --format json    # Machine-readable output
//! ```

use std::io::Write;
use std::process::ExitCode;

use calc_keys::prelude::Keypad;
use calc_keys_cli::{
    render, Cli, CliConfig, CliResult, Commands, OutputFormat, Verbosity,
};
use clap::Parser;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);

    let output = match &cli.command {
        Commands::List => run_list(&config)?,
        Commands::Keypad => run_keypad(&config)?,
        Commands::Glyph(args) => run_glyph(&config, &args.names)?,
        Commands::Classify(args) => run_classify(&config, &args.tokens)?,
    };

    if !config.verbosity.is_quiet() {
        write!(std::io::stdout(), "{output}")?;
    }

    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(cli.color.into())
        .with_format(cli.format.into())
}

fn run_list(config: &CliConfig) -> CliResult<String> {
    match config.format {
        OutputFormat::Text => Ok(render::render_list_text(config.use_color())),
        OutputFormat::Json => render::render_list_json(),
    }
}

fn run_keypad(config: &CliConfig) -> CliResult<String> {
    let keypad = Keypad::new();
    match config.format {
        OutputFormat::Text => Ok(render::render_keypad_text(&keypad)),
        OutputFormat::Json => render::render_keypad_json(&keypad),
    }
}

fn run_glyph(config: &CliConfig, names: &[String]) -> CliResult<String> {
    match config.format {
        OutputFormat::Text => render::render_glyphs_text(names, config.use_color()),
        OutputFormat::Json => render::render_glyphs_json(names),
    }
}

fn run_classify(config: &CliConfig, tokens: &[String]) -> CliResult<String> {
    match config.format {
        OutputFormat::Text => Ok(render::render_classify_text(tokens, config.use_color())),
        OutputFormat::Json => render::render_classify_json(tokens),
    }
}
