//! Implementation of the `istring format` command.

use clap::Args;
use istring::IString;
use miette::Result;
use serde::Serialize;

use super::shared::{params_from, parse_key_val, print_json};

/// Arguments for the format command.
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Template with {name} placeholders
    #[arg(long, required = true)]
    pub template: String,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for format results.
#[derive(Serialize)]
struct FormatResult {
    result: String,
}

/// Run the format command.
pub fn run_format(args: FormatArgs) -> Result<i32> {
    let params = params_from(args.params);
    let result = IString::from(args.template).format(&params);

    if args.json {
        print_json(&FormatResult { result })?;
    } else {
        println!("{result}");
    }
    Ok(exitcode::OK)
}
