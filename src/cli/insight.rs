//! CLI command for insight requests
//!
//! No text generator ships with BudgetPro, so the command prints the prompt
//! that would be sent.

use crate::error::BudgetResult;
use crate::services::InsightService;
use crate::storage::Storage;

/// Print the insight prompt, or the raw payload as JSON
pub fn handle_insights_command(storage: &Storage, json: bool) -> BudgetResult<()> {
    let payload = InsightService::new(storage).payload()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", payload.to_prompt()?);
    }
    Ok(())
}
