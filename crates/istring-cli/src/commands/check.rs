//! Implementation of the `istring check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use clap::Args;
use istring::PluralCategory;
use miette::{Report, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;

use super::shared::{parse_plurals, print_json};
use crate::output::table::{LanguageSummary, format_language_table};

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Plural rule data files to check (JSON)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Serialize)]
struct CheckJson {
    file: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    languages: Vec<LanguageJson>,
}

#[derive(Serialize)]
struct LanguageJson {
    language: String,
    categories: Vec<PluralCategory>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut reports = Vec::new();
    let mut any_invalid = false;

    for path in &args.files {
        let file = path.display().to_string();
        let content = match read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                any_invalid = true;
                let message = format!("failed to read '{file}': {e}");
                if !args.json {
                    eprintln!("{} {message}", "✗".if_supports_color(Stream::Stderr, |t| t.red()));
                }
                reports.push(CheckJson {
                    file,
                    valid: false,
                    error: Some(message),
                    languages: Vec::new(),
                });
                continue;
            }
        };

        match parse_plurals(path, &content) {
            Ok(data) => {
                debug!(file = %file, languages = data.len(), "Plural data is valid");
                let languages: Vec<LanguageSummary> = data
                    .languages()
                    .into_iter()
                    .filter_map(|language| {
                        data.get(language).map(|rules| LanguageSummary {
                            language: language.to_string(),
                            categories: rules.categories(),
                        })
                    })
                    .collect();
                if !args.json {
                    println!(
                        "{} {file}: {} languages",
                        "✓".if_supports_color(Stream::Stdout, |t| t.green()),
                        languages.len()
                    );
                    println!("{}", format_language_table(&languages));
                }
                reports.push(CheckJson {
                    file,
                    valid: true,
                    error: None,
                    languages: languages
                        .into_iter()
                        .map(|summary| LanguageJson {
                            language: summary.language,
                            categories: summary.categories,
                        })
                        .collect(),
                });
            }
            Err(diagnostic) => {
                any_invalid = true;
                let message = diagnostic.message().to_string();
                if !args.json {
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                reports.push(CheckJson {
                    file,
                    valid: false,
                    error: Some(message),
                    languages: Vec::new(),
                });
            }
        }
    }

    if args.json {
        print_json(&reports)?;
    }

    if any_invalid {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
