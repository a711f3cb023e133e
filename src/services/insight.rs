//! Financial insight requests
//!
//! Builds the data payload and prompt sent to an external text-generation
//! service, and splits the reply into bullet points. The generator itself is
//! a [`InsightProvider`] supplied by the host.

use serde::Serialize;

use crate::error::BudgetResult;
use crate::models::TransactionKind;
use crate::storage::Storage;

/// How many of the most recent transactions go into a request
pub const RECENT_TRANSACTION_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetLine {
    pub name: String,
    pub allocated: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentTransaction {
    pub description: String,
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsLine {
    pub title: String,
    pub current: f64,
    pub target: f64,
}

/// Structured data behind an insight request
///
/// Every figure is in currency units, not cents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightPayload {
    pub monthly_income: f64,
    pub budget: Vec<BudgetLine>,
    pub recent_transactions: Vec<RecentTransaction>,
    pub savings_goals: Vec<SavingsLine>,
}

impl InsightPayload {
    /// Render the request prompt
    pub fn to_prompt(&self) -> BudgetResult<String> {
        Ok(format!(
            "You are a friendly financial advisor. Analyze the following financial data and provide 3-5 brief, actionable insights.\n\
             Focus on spending habits, budget adherence, and progress towards savings goals. Format the response as a simple text paragraph or bullet points using '*' for each point.\n\
             \n\
             Data:\n\
             - Monthly Income: ${:.2}\n\
             - Budget Categories: {}\n\
             - Recent Transactions: {}\n\
             - Savings Goals: {}\n",
            self.monthly_income,
            serde_json::to_string(&self.budget)?,
            serde_json::to_string(&self.recent_transactions)?,
            serde_json::to_string(&self.savings_goals)?,
        ))
    }
}

/// A text-in, text-out generator
pub trait InsightProvider {
    fn generate(&self, prompt: &str) -> Result<String, String>;
}

/// Lifecycle of one insight request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InsightState {
    #[default]
    Idle,
    Loading,
    Ready(Vec<String>),
    Failed(String),
}

impl InsightState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Split a reply on `*` into trimmed, non-empty points
pub fn bullets(response: &str) -> Vec<String> {
    response
        .split('*')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Service assembling insight requests
pub struct InsightService<'a> {
    storage: &'a Storage,
}

impl<'a> InsightService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Collect the payload from the current session
    pub fn payload(&self) -> BudgetResult<InsightPayload> {
        let budget = self
            .storage
            .categories
            .get_all()?
            .into_iter()
            .map(|c| BudgetLine {
                name: c.name,
                allocated: c.amount.as_f64(),
            })
            .collect();

        let recent_transactions = self
            .storage
            .transactions
            .most_recent(RECENT_TRANSACTION_LIMIT)?
            .into_iter()
            .map(|t| RecentTransaction {
                description: t.description,
                amount: t.amount.as_f64(),
                category: t.category,
                kind: t.kind,
                date: t.date,
            })
            .collect();

        let savings_goals = self
            .storage
            .goals
            .get_savings_goals()?
            .into_iter()
            .map(|g| SavingsLine {
                title: g.title,
                current: g.current_amount.as_f64(),
                target: g.target_amount.as_f64(),
            })
            .collect();

        Ok(InsightPayload {
            monthly_income: self.storage.income.monthly_income()?.as_f64(),
            budget,
            recent_transactions,
            savings_goals,
        })
    }

    /// Run one request through a provider
    ///
    /// Storage failures and provider failures both end in `Failed`.
    pub fn request(&self, provider: &dyn InsightProvider) -> InsightState {
        let prompt = match self.payload().and_then(|p| p.to_prompt()) {
            Ok(prompt) => prompt,
            Err(e) => return InsightState::Failed(e.to_string()),
        };

        match provider.generate(&prompt) {
            Ok(text) => InsightState::Ready(bullets(&text)),
            Err(e) => {
                log::warn!("Insight request failed: {}", e);
                InsightState::Failed(e)
            }
        }
    }
}
