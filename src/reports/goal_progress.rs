//! Goal Progress Report
//!
//! Progress, over/under status and deadline urgency for budget goals and
//! savings goals. All deadline arithmetic is on calendar days; `today` is
//! passed in so results are reproducible.

use std::fmt;

use chrono::NaiveDate;

use crate::error::BudgetResult;
use crate::models::palette::ALERT_COLOR;
use crate::models::{percent_of, BudgetCategory, BudgetGoal, Money, Month, SavingsGoal, Transaction};
use crate::storage::Storage;

/// Deadline classification relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    NoDeadline,
    Overdue(i64),
    DueToday,
    DueTomorrow,
    DaysLeft(i64),
}

/// How pressing a deadline is, least to most
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    None,
    Normal,
    Soon,
    Today,
    Overdue,
}

impl DeadlineStatus {
    /// Classify a deadline against today
    pub fn classify(deadline: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(deadline) = deadline else {
            return Self::NoDeadline;
        };

        match (deadline - today).num_days() {
            d if d < 0 => Self::Overdue(-d),
            0 => Self::DueToday,
            1 => Self::DueTomorrow,
            d => Self::DaysLeft(d),
        }
    }

    pub fn is_overdue(&self) -> bool {
        matches!(self, Self::Overdue(_))
    }

    /// Days past the deadline, 0 unless overdue
    pub fn days_overdue(&self) -> i64 {
        match self {
            Self::Overdue(days) => *days,
            _ => 0,
        }
    }

    pub fn urgency(&self) -> Urgency {
        match self {
            Self::NoDeadline => Urgency::None,
            Self::Overdue(_) => Urgency::Overdue,
            Self::DueToday => Urgency::Today,
            Self::DueTomorrow => Urgency::Soon,
            Self::DaysLeft(_) => Urgency::Normal,
        }
    }
}

impl fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDeadline => write!(f, "No deadline"),
            Self::Overdue(days) => write!(f, "{} days overdue", days),
            Self::DueToday => write!(f, "Due today"),
            Self::DueTomorrow => write!(f, "Due tomorrow"),
            Self::DaysLeft(days) => write!(f, "{} days left", days),
        }
    }
}

/// Progress of one budget goal
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetGoalProgress {
    pub goal: BudgetGoal,
    pub category_name: String,
    pub category_color: String,
    /// Expenses in the goal's category during its deadline month
    pub spent: Money,
    /// Percentage of the target spent, capped at 100
    pub progress: f64,
    pub is_over: bool,
    pub deadline: DeadlineStatus,
}

impl BudgetGoalProgress {
    /// Colour for the progress bar
    pub fn bar_color(&self) -> &str {
        if self.is_over {
            ALERT_COLOR
        } else {
            &self.category_color
        }
    }
}

/// Progress of one savings goal
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsGoalProgress {
    pub goal: SavingsGoal,
    /// Percentage of the target saved; may exceed 100
    pub progress: f64,
    pub remaining: Money,
    pub deadline: DeadlineStatus,
    pub days_overdue: i64,
    /// Goal colour, or the alert colour once overdue
    pub bar_color: String,
}

/// Evaluate a budget goal against its category's spending
///
/// Spending is counted in the calendar month of the goal's deadline. A goal
/// without a usable deadline has no month and therefore no spending.
pub fn budget_goal_progress(
    goal: &BudgetGoal,
    category: &BudgetCategory,
    transactions: &[Transaction],
    today: NaiveDate,
) -> BudgetGoalProgress {
    let deadline = goal.deadline_date();
    let spent: Money = match deadline.map(Month::of) {
        Some(month) => transactions
            .iter()
            .filter(|t| t.is_expense() && t.category == category.name)
            .filter(|t| t.calendar_date().map(|d| month.contains(d)).unwrap_or(false))
            .map(|t| t.amount)
            .sum(),
        None => Money::zero(),
    };

    BudgetGoalProgress {
        goal: goal.clone(),
        category_name: category.name.clone(),
        category_color: category.color.clone(),
        spent,
        progress: percent_of(spent, goal.target_amount).min(100.0),
        is_over: spent > goal.target_amount,
        deadline: DeadlineStatus::classify(deadline, today),
    }
}

/// Evaluate a savings goal
pub fn savings_goal_progress(goal: &SavingsGoal, today: NaiveDate) -> SavingsGoalProgress {
    let deadline = DeadlineStatus::classify(goal.deadline_date(), today);
    let bar_color = if deadline.is_overdue() {
        ALERT_COLOR.to_string()
    } else {
        goal.color.clone()
    };

    SavingsGoalProgress {
        goal: goal.clone(),
        progress: percent_of(goal.current_amount, goal.target_amount),
        remaining: goal.remaining(),
        deadline,
        days_overdue: deadline.days_overdue(),
        bar_color,
    }
}

/// Evaluate every budget goal whose category still exists
///
/// Goals pointing at a deleted category are skipped.
pub fn evaluate_budget_goals(
    goals: &[BudgetGoal],
    categories: &[BudgetCategory],
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<BudgetGoalProgress> {
    goals
        .iter()
        .filter_map(|goal| {
            let category = categories.iter().find(|c| c.id == goal.category_id);
            if category.is_none() {
                log::debug!("Skipping goal {} with missing category {}", goal.id, goal.category_id);
            }
            category.map(|c| budget_goal_progress(goal, c, transactions, today))
        })
        .collect()
}

/// Goal Progress Report
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgressReport {
    pub today: NaiveDate,
    pub budget_goals: Vec<BudgetGoalProgress>,
    pub savings_goals: Vec<SavingsGoalProgress>,
    pub total_saved: Money,
    pub total_target: Money,
    /// Saved across all goals as a percentage of all targets
    pub overall_progress: f64,
}

impl GoalProgressReport {
    /// Build the report from slices
    pub fn build(
        budget_goals: &[BudgetGoal],
        savings_goals: &[SavingsGoal],
        categories: &[BudgetCategory],
        transactions: &[Transaction],
        today: NaiveDate,
    ) -> Self {
        let total_saved: Money = savings_goals.iter().map(|g| g.current_amount).sum();
        let total_target: Money = savings_goals.iter().map(|g| g.target_amount).sum();

        Self {
            today,
            budget_goals: evaluate_budget_goals(budget_goals, categories, transactions, today),
            savings_goals: savings_goals
                .iter()
                .map(|g| savings_goal_progress(g, today))
                .collect(),
            total_saved,
            total_target,
            overall_progress: percent_of(total_saved, total_target),
        }
    }

    /// Generate the report from the current session
    pub fn generate(storage: &Storage, today: NaiveDate) -> BudgetResult<Self> {
        Ok(Self::build(
            &storage.goals.get_budget_goals()?,
            &storage.goals.get_savings_goals()?,
            &storage.categories.get_all()?,
            &storage.transactions.get_all()?,
            today,
        ))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Goals - as of {}\n", self.today.format("%Y-%m-%d")));
        output.push_str(&"=".repeat(70));
        output.push('\n');

        output.push_str("\nSPENDING GOALS\n");
        if self.budget_goals.is_empty() {
            output.push_str("  No spending goals.\n");
        }
        for entry in &self.budget_goals {
            let flag = if entry.is_over { " OVER" } else { "" };
            output.push_str(&format!(
                "  {:<24} {:<14} {:>10} / {:<10} {:>5.0}%{}  {}\n",
                entry.goal.title,
                entry.category_name,
                entry.spent,
                entry.goal.target_amount,
                entry.progress,
                flag,
                entry.deadline
            ));
        }

        output.push_str("\nSAVINGS GOALS\n");
        if self.savings_goals.is_empty() {
            output.push_str("  No savings goals.\n");
        }
        for entry in &self.savings_goals {
            output.push_str(&format!(
                "  {:<24} {:<14} {:>10} / {:<10} {:>6.1}%  {}\n",
                entry.goal.title,
                entry.goal.category,
                entry.goal.current_amount,
                entry.goal.target_amount,
                entry.progress,
                entry.deadline
            ));
        }

        output.push_str(&"-".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "Total saved: {} of {} ({:.1}%)\n",
            self.total_saved, self.total_target, self.overall_progress
        ));

        output
    }
}
