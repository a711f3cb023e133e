//! CLI commands for reports
//!
//! Budget vs actual, goal progress and the dashboard summary.

use chrono::NaiveDate;

use crate::display::report::{format_bar, format_percentage, separator};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{parse_calendar_date, Month};
use crate::reports::{GoalProgressReport, ReconciliationReport, SummaryReport};
use crate::storage::Storage;

const BAR_WIDTH: usize = 20;

/// Parse a `YYYY-MM` option, defaulting to the month containing `today`
pub fn parse_month_arg(month: Option<&str>, today: NaiveDate) -> BudgetResult<Month> {
    match month {
        Some(s) => Month::parse(s).map_err(|e| {
            BudgetError::Validation(format!(
                "Invalid month '{}': {}. Use YYYY-MM (e.g., 2025-01)",
                s, e
            ))
        }),
        None => Ok(Month::of(today)),
    }
}

/// Parse a `YYYY-MM-DD` option, defaulting to `fallback`
pub fn parse_date_arg(date: Option<&str>, fallback: NaiveDate) -> BudgetResult<NaiveDate> {
    match date {
        Some(s) => parse_calendar_date(s).ok_or_else(|| {
            BudgetError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", s))
        }),
        None => Ok(fallback),
    }
}

/// Handle the budget vs actual report
pub fn handle_report_command(storage: &Storage, month: Month) -> BudgetResult<()> {
    let report = ReconciliationReport::generate(storage, month)?;
    print!("{}", report.format_terminal());
    Ok(())
}

/// Handle the goal progress report
pub fn handle_goals_command(storage: &Storage, today: NaiveDate) -> BudgetResult<()> {
    let report = GoalProgressReport::generate(storage, today)?;
    print!("{}", report.format_terminal());

    if !report.savings_goals.is_empty() {
        println!();
        println!("{}", separator(50));
        for entry in &report.savings_goals {
            println!(
                "{:<24} {} {}",
                entry.goal.title,
                format_bar(entry.progress, BAR_WIDTH),
                format_percentage(entry.progress)
            );
        }
    }

    Ok(())
}

/// Handle the dashboard summary
pub fn handle_summary_command(storage: &Storage) -> BudgetResult<()> {
    let report = SummaryReport::generate(storage)?;
    print!("{}", report.format_terminal());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_parse_month_arg() {
        assert_eq!(parse_month_arg(None, today()).unwrap(), Month::new(2024, 6).unwrap());
        assert_eq!(
            parse_month_arg(Some("2023-02"), today()).unwrap(),
            Month::new(2023, 2).unwrap()
        );
        assert!(parse_month_arg(Some("June"), today()).is_err());
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(parse_date_arg(None, today()).unwrap(), today());
        assert_eq!(
            parse_date_arg(Some("2024-01-02"), today()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert!(parse_date_arg(Some("01/02/2024"), today()).is_err());
    }
}
