//! In-memory transaction store
//!
//! Transactions are kept in store order: most recently added first. Batch
//! inserts keep the batch's own order and land ahead of existing entries.

use std::sync::RwLock;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{NewTransaction, Transaction, TransactionId};

use super::{read_poisoned, write_poisoned};

/// Repository for the session's transactions
#[derive(Debug, Default)]
pub struct TransactionRepository {
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a transaction by ID
    pub fn get(&self, id: &TransactionId) -> BudgetResult<Option<Transaction>> {
        let data = self.data.read().map_err(read_poisoned)?;
        Ok(data.iter().find(|t| &t.id == id).cloned())
    }

    /// Get all transactions in store order
    pub fn get_all(&self) -> BudgetResult<Vec<Transaction>> {
        let data = self.data.read().map_err(read_poisoned)?;
        Ok(data.clone())
    }

    /// Get the first `n` transactions in store order
    pub fn most_recent(&self, n: usize) -> BudgetResult<Vec<Transaction>> {
        let data = self.data.read().map_err(read_poisoned)?;
        Ok(data.iter().take(n).cloned().collect())
    }

    /// Insert one transaction at the front
    pub fn insert(&self, new: NewTransaction) -> BudgetResult<Transaction> {
        let txn = new.into_transaction();
        let mut data = self.data.write().map_err(write_poisoned)?;
        data.insert(0, txn.clone());
        Ok(txn)
    }

    /// Insert a batch at the front, preserving the batch order
    pub fn insert_batch(&self, batch: Vec<NewTransaction>) -> BudgetResult<Vec<TransactionId>> {
        let created: Vec<Transaction> = batch
            .into_iter()
            .map(NewTransaction::into_transaction)
            .collect();
        let ids = created.iter().map(|t| t.id.clone()).collect();

        let mut data = self.data.write().map_err(write_poisoned)?;
        data.splice(0..0, created);
        Ok(ids)
    }

    /// Replace a transaction with the same ID
    pub fn replace(&self, txn: Transaction) -> BudgetResult<()> {
        let mut data = self.data.write().map_err(write_poisoned)?;
        let slot = data
            .iter_mut()
            .find(|t| t.id == txn.id)
            .ok_or_else(|| BudgetError::transaction_not_found(txn.id.as_str()))?;
        *slot = txn;
        Ok(())
    }

    /// Delete a transaction, returning whether it existed
    pub fn delete(&self, id: &TransactionId) -> BudgetResult<bool> {
        let mut data = self.data.write().map_err(write_poisoned)?;
        let before = data.len();
        data.retain(|t| &t.id != id);
        Ok(data.len() != before)
    }

    /// Count transactions
    pub fn count(&self) -> BudgetResult<usize> {
        let data = self.data.read().map_err(read_poisoned)?;
        Ok(data.len())
    }

    /// Remove everything
    pub fn clear(&self) -> BudgetResult<()> {
        let mut data = self.data.write().map_err(write_poisoned)?;
        data.clear();
        Ok(())
    }
}
