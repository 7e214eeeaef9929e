//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};
use istring::PluralCategory;
use istring::plural::Operands;

/// One evaluated number.
pub struct CategoryRow {
    /// The number as given on the command line.
    pub input: String,
    /// Its plural operands.
    pub operands: Operands,
    /// The selected category.
    pub category: PluralCategory,
}

/// Format numbers with their operands and categories as a table.
pub fn format_category_table(rows: &[CategoryRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Number", "n", "i", "v", "f", "Category"]);

    for row in rows {
        let ops = &row.operands;
        table.add_row(vec![
            row.input.clone(),
            ops.n.to_string(),
            ops.i.to_string(),
            ops.v.to_string(),
            ops.f.to_string(),
            row.category.to_string(),
        ]);
    }

    table
}

/// Languages of one data file.
pub struct LanguageSummary {
    /// Language code (e.g., "ru").
    pub language: String,
    /// Categories with a rule.
    pub categories: Vec<PluralCategory>,
}

/// Format the languages and categories of a data file as a table.
pub fn format_language_table(languages: &[LanguageSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Categories"]);

    for summary in languages {
        let categories: Vec<&str> = summary
            .categories
            .iter()
            .copied()
            .map(PluralCategory::as_str)
            .collect();
        let categories = if categories.is_empty() {
            "other".to_string()
        } else {
            format!("{}, other", categories.join(", "))
        };
        table.add_row(vec![summary.language.clone(), categories]);
    }

    table
}
