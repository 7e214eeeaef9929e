//! Argument parsing and data loading shared by several commands.

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;

use istring::Value;
use istring::plural::PluralData;
use miette::{IntoDiagnostic, Result, miette};
use serde::Serialize;

use crate::output::PluralDataDiagnostic;

/// Parse a key=value parameter string.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{s}': expected name=value"))?;
    Ok((key.to_string(), value.to_string()))
}

/// Interpret a command-line value as integer, float, boolean or string.
pub fn parse_value(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        Value::from(n)
    } else if let Ok(n) = raw.parse::<f64>() {
        Value::from(n)
    } else if let Ok(b) = raw.parse::<bool>() {
        Value::from(b)
    } else {
        Value::from(raw)
    }
}

/// Build a parameter map from parsed key=value pairs.
pub fn params_from(pairs: Vec<(String, String)>) -> HashMap<String, Value> {
    pairs
        .into_iter()
        .map(|(key, raw)| {
            let value = parse_value(&raw);
            (key, value)
        })
        .collect()
}

/// Load plural data from a file, or use the built-in defaults when no file
/// is given.
pub fn load_plurals(path: Option<&Path>) -> Result<PluralData> {
    let Some(path) = path else {
        return Ok(PluralData::new());
    };
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read plural data {}: {}", path.display(), e))?;
    parse_plurals(path, &content).map_err(Into::into)
}

/// Parse plural data, turning load errors into source diagnostics.
pub fn parse_plurals(path: &Path, content: &str) -> Result<PluralData, PluralDataDiagnostic> {
    PluralData::from_json_str(content)
        .map_err(|err| PluralDataDiagnostic::from_load_error(path, content, &err))
}

/// Print a value as pretty JSON on stdout.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{json}");
    Ok(())
}
