//! Implementation of the `istring category` command.

use std::path::PathBuf;

use clap::Args;
use istring::plural::Operands;
use istring::text::DEFAULT_LOCALE;
use istring::{IString, PluralCategory, Value};
use miette::{Result, miette};
use serde::Serialize;

use super::shared::{load_plurals, parse_value, print_json};
use crate::output::table::{CategoryRow, format_category_table};

/// Arguments for the category command.
#[derive(Debug, Args)]
pub struct CategoryArgs {
    /// Numbers to classify
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// Locale whose language selects the rules
    #[arg(long, env = "ISTRING_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Plural rule data file (JSON)
    #[arg(long, env = "ISTRING_PLURALS")]
    pub plurals: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one classified number.
#[derive(Serialize)]
struct CategoryJson<'a> {
    number: &'a str,
    operands: Operands,
    category: PluralCategory,
}

/// Run the category command.
pub fn run_category(args: CategoryArgs) -> Result<i32> {
    let plurals = load_plurals(args.plurals.as_deref())?;
    let language = IString::with_locale(String::new(), args.locale);
    let rules = plurals.rules_for(language.language());

    let rows = args
        .numbers
        .iter()
        .map(|raw| {
            let operands = match parse_value(raw) {
                Value::Number(n) => Operands::from(n),
                Value::Float(n) => Operands::from(n),
                _ => return Err(miette!("'{raw}' is not a number")),
            };
            Ok(CategoryRow {
                input: raw.clone(),
                operands,
                category: rules.category_for(&operands),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        let json: Vec<CategoryJson<'_>> = rows
            .iter()
            .map(|row| CategoryJson {
                number: &row.input,
                operands: row.operands,
                category: row.category,
            })
            .collect();
        print_json(&json)?;
    } else {
        println!("{}", format_category_table(&rows));
    }
    Ok(exitcode::OK)
}
