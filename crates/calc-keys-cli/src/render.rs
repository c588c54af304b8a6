//! Rendering for CLI output
//!
//! Every command renders through a pure function here, so output shapes
//! are unit-testable without driving the binary.

use calc_keys::prelude::*;
use console::style;
use serde_json::json;

use crate::error::CliResult;

/// Classifies a CLI token as operator, number, or text
///
/// Vocabulary glyphs win first; a token that parses as `f64` lands in the
/// numeric arm (a CLI token is the one place `"42"` is known to mean a
/// number); everything else is text.
#[must_use]
pub fn classify_token(token: &str) -> CalculatorInput {
    if let Some(op) = Operator::from_glyph(token) {
        return CalculatorInput::Operator(op);
    }
    token
        .parse::<f64>()
        .map_or_else(|_| CalculatorInput::from(token), CalculatorInput::Number)
}

/// Returns the kind tag for an input value
#[must_use]
pub const fn input_kind(input: &CalculatorInput) -> &'static str {
    match input {
        CalculatorInput::Operator(_) => "operator",
        CalculatorInput::Number(_) => "number",
        CalculatorInput::Text(_) => "text",
    }
}

/// Looks up an operator by symbolic name, with a typed error for foreign
/// names
pub fn lookup_glyph(name: &str) -> CliResult<Operator> {
    Operator::from_name(name).ok_or_else(|| KeyError::unknown_name(name).into())
}

/// Renders the vocabulary table as text
#[must_use]
pub fn render_list_text(use_color: bool) -> String {
    let mut out = String::new();
    for op in Operator::ALL {
        let glyph = if use_color {
            style(op.glyph()).yellow().bold().to_string()
        } else {
            op.glyph().to_string()
        };
        out.push_str(&format!("{:<12} {glyph}\n", op.name()));
    }
    out
}

/// Renders the vocabulary table as JSON
pub fn render_list_json() -> CliResult<String> {
    let entries: Vec<_> = Operator::ALL
        .iter()
        .map(|op| json!({ "name": op.name(), "glyph": op.glyph() }))
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Renders the key legend layout as text
#[must_use]
pub fn render_keypad_text(keypad: &Keypad) -> String {
    let (rows, cols) = keypad.dimensions();
    let mut out = String::new();
    for row in 0..rows {
        let mut line = String::new();
        for col in 0..cols {
            if let Some(key) = keypad.key_at(row, col) {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&format!("[ {} ]", key.legend.label()));
            }
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Renders the key legend layout as JSON
pub fn render_keypad_json(keypad: &Keypad) -> CliResult<String> {
    let (rows, cols) = keypad.dimensions();
    let value = json!({
        "rows": rows,
        "cols": cols,
        "keys": keypad.keys(),
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Renders glyph lookups as text, one name per line
pub fn render_glyphs_text(names: &[String], use_color: bool) -> CliResult<String> {
    let mut out = String::new();
    for name in names {
        let op = lookup_glyph(name)?;
        let glyph = if use_color {
            style(op.glyph()).yellow().bold().to_string()
        } else {
            op.glyph().to_string()
        };
        out.push_str(&format!("{:<12} {glyph}\n", op.name()));
    }
    Ok(out)
}

/// Renders glyph lookups as JSON
pub fn render_glyphs_json(names: &[String]) -> CliResult<String> {
    let mut entries = Vec::with_capacity(names.len());
    for name in names {
        let op = lookup_glyph(name)?;
        entries.push(json!({ "name": op.name(), "glyph": op.glyph() }));
    }
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Renders token classifications as text, one token per line
#[must_use]
pub fn render_classify_text(tokens: &[String], use_color: bool) -> String {
    let mut out = String::new();
    for token in tokens {
        let input = classify_token(token);
        let kind = input_kind(&input);
        let tag = match input.as_operator() {
            Some(op) => format!("{kind} ({})", op.name()),
            None => kind.to_string(),
        };
        let tag = if use_color {
            style(tag).cyan().to_string()
        } else {
            tag
        };
        out.push_str(&format!("{token:<12} {tag}\n"));
    }
    out
}

/// Renders token classifications as JSON
pub fn render_classify_json(tokens: &[String]) -> CliResult<String> {
    let entries: Vec<_> = tokens
        .iter()
        .map(|token| {
            let input = classify_token(token);
            json!({
                "token": token,
                "kind": input_kind(&input),
                "value": input,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
