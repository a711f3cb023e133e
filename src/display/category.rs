//! Budget category display formatting

use super::report::{format_percentage, separator};
use crate::models::BudgetCategory;
use crate::services::AllocationBreakdown;

/// Format the budget as a list with IDs
pub fn format_category_list(categories: &[BudgetCategory]) -> String {
    if categories.is_empty() {
        return "No budget categories.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<38} {:<20} {:>12}  {}\n",
        "ID", "Name", "Allocated", "Color"
    ));
    output.push_str(&separator(80));
    output.push('\n');

    for category in categories {
        let lock = if category.is_protected() { " (protected)" } else { "" };
        output.push_str(&format!(
            "{:<38} {:<20} {:>12}  {}{}\n",
            category.id, category.name, category.amount, category.color, lock
        ));
    }

    output
}

/// Format how the monthly income is split across the budget
pub fn format_allocation_breakdown(breakdown: &AllocationBreakdown) -> String {
    let mut output = String::new();

    output.push_str(&format!("Monthly income: {:>12}\n", breakdown.monthly_income));
    output.push_str(&format!("Total budgeted: {:>12}\n", breakdown.total_budget));
    output.push_str(&format!("Unallocated:    {:>12}\n", breakdown.remaining));
    output.push('\n');

    for share in &breakdown.shares {
        output.push_str(&format!(
            "  {:<20} {:>12} {:>6}\n",
            share.name,
            share.amount,
            format_percentage(share.percent)
        ));
    }

    output
}
