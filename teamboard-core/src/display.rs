//! Formatting helpers for values shown on list and detail screens.

use chrono::NaiveDate;

/// Format a due date as `M/D/YYYY` without zero padding, e.g. `3/15/2024`.
pub fn format_due_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Subtitle line for a project list row: `<team name> - Due: <date>`.
pub fn project_subtitle(team_name: &str, due_date: NaiveDate) -> String {
    format!("{} - Due: {}", team_name, format_due_date(due_date))
}

/// Subtitle line for a team list row, e.g. `2 Members`.
pub fn member_count_label(count: usize) -> String {
    format!("{} Members", count)
}
