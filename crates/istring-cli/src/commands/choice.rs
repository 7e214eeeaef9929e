//! Implementation of the `istring choice` command.

use std::path::PathBuf;

use clap::Args;
use istring::text::DEFAULT_LOCALE;
use istring::{IString, Value};
use miette::Result;
use serde::Serialize;
use tracing::debug;

use super::shared::{load_plurals, params_from, parse_key_val, parse_value, print_json};

/// Arguments for the choice command.
#[derive(Debug, Args)]
pub struct ChoiceArgs {
    /// Choice pattern, e.g. "one#{n} file|#{n} files"
    #[arg(long, required = true)]
    pub pattern: String,

    /// Argument tested against the limits (repeat for multi-limit choices)
    #[arg(short = 'a', long = "arg", required = true)]
    pub args: Vec<String>,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Locale of the pattern
    #[arg(long, env = "ISTRING_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Plural rule data file (JSON)
    #[arg(long, env = "ISTRING_PLURALS")]
    pub plurals: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for choice results.
#[derive(Serialize)]
struct ChoiceResult {
    result: String,
}

/// Run the choice command.
pub fn run_choice(args: ChoiceArgs) -> Result<i32> {
    let plurals = load_plurals(args.plurals.as_deref())?;
    let pattern = IString::with_locale(args.pattern, args.locale);

    let mut values: Vec<Value> = args.args.iter().map(|raw| parse_value(raw)).collect();
    let choice_args = if values.len() == 1 {
        values.remove(0)
    } else {
        Value::List(values)
    };
    debug!(args = %choice_args, locale = %pattern.get_locale(), "Formatting choice");

    let params = params_from(args.params);
    match pattern.format_choice_with(&plurals, choice_args, &params) {
        Ok(result) => {
            if args.json {
                print_json(&ChoiceResult { result })?;
            } else {
                println!("{result}");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
            } else {
                eprintln!("Choice error: {e}");
            }
            Ok(exitcode::DATAERR)
        }
    }
}
