//! UI Builder module for formatting analysis output as terminal text

use crate::localization::LocalizationManager;
use crate::matcher::Suggestion;
use crate::report::{AnalysisRecord, ReportSummary};

const COLUMN_HEADERS: [&str; 4] = ["INGREDIENT", "FUNCTION", "RISK LEVEL", "DESCRIPTION"];

/// Format records as an aligned plain-text table
pub fn format_report_table(records: &[AnalysisRecord]) -> String {
    let rows: Vec<[&str; 4]> = records
        .iter()
        .map(|r| {
            [
                r.ingredient.as_str(),
                r.function.as_str(),
                r.risk_tier.as_str(),
                r.description.as_str(),
            ]
        })
        .collect();

    // The description column is left unpadded
    let mut widths = [0usize; 3];
    for (i, width) in widths.iter_mut().enumerate() {
        *width = rows
            .iter()
            .map(|row| row[i].chars().count())
            .chain(std::iter::once(COLUMN_HEADERS[i].len()))
            .max()
            .unwrap_or(0);
    }

    let mut result = String::new();
    result.push_str(&format_row(&COLUMN_HEADERS, &widths));
    for row in &rows {
        result.push_str(&format_row(row, &widths));
    }
    result
}

fn format_row(cells: &[&str; 4], widths: &[usize; 3]) -> String {
    let line = format!(
        "{:<w0$}  {:<w1$}  {:<w2$}  {}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    );
    format!("{}\n", line.trim_end())
}

/// Format the typo-correction notices
pub fn format_suggestions(
    suggestions: &[Suggestion],
    messages: &LocalizationManager,
    language: &str,
) -> String {
    if suggestions.is_empty() {
        return format!("{}\n", messages.t("no-suggestions", language));
    }

    let mut result = format!("{}\n", messages.t("suggestion-header", language));
    for suggestion in suggestions {
        let score = suggestion.score.to_string();
        result.push_str(&format!(
            "• {}\n",
            messages.get_message_with_args(
                "suggestion-notice",
                language,
                &[
                    ("original", suggestion.original_text.as_str()),
                    ("suggested", suggestion.suggested_name.as_str()),
                    ("score", score.as_str()),
                ],
            )
        ));
    }
    result
}

/// Format the high-risk alert and the function breakdown
pub fn format_summary(
    summary: &ReportSummary,
    messages: &LocalizationManager,
    language: &str,
) -> String {
    let mut result = String::new();

    if summary.has_high_risk() {
        let names = summary.high_risk.join(", ");
        result.push_str(&format!(
            "⚠️ {}\n\n",
            messages.get_message_with_args(
                "high-risk-warning",
                language,
                &[("ingredients", names.as_str())]
            )
        ));
    }

    result.push_str(&format!("{}\n", messages.t("function-breakdown", language)));
    for function in &summary.functions {
        let share = if summary.total == 0 {
            0.0
        } else {
            function.count as f64 * 100.0 / summary.total as f64
        };
        result.push_str(&format!(
            "  {}: {} ({:.1}%)\n",
            function.function, function.count, share
        ));
    }
    result
}

/// Format the static list of known ingredient names, one per line
pub fn format_known_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
    messages: &LocalizationManager,
    language: &str,
) -> String {
    let names: Vec<&str> = names.into_iter().collect();
    let count = names.len().to_string();

    let mut result = format!(
        "{}\n",
        messages.get_message_with_args("known-ingredients", language, &[("count", count.as_str())])
    );
    for name in names {
        result.push_str(&format!("  {}\n", name));
    }
    result
}
