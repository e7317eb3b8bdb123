//! Expense record and split types
//!
//! This module defines the structure of shared-expense records stored in
//! the ledger.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::{ExpenseId, Money, ParticipantId};

/// How an expense amount is divided among participants
///
/// A split is a request consumed by [`crate::Ledger::record_expense`]; the
/// validated result is stored as the share map of an [`ExpenseRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpenseSplit {
    /// Divide the amount evenly across the listed participants
    ///
    /// A participant listed more than once accumulates one part per
    /// occurrence.
    Equal { participants: Vec<ParticipantId> },
    /// Explicit per-participant share amounts
    ///
    /// Shares must sum to the expense amount within the ledger's tolerance.
    Exact { shares: Vec<(ParticipantId, Money)> },
}

/// One shared payment event
///
/// The payer fronted the full amount; each entry in `shares` is the portion
/// a participant owes. Records are immutable once appended to the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique record identifier
    pub id: ExpenseId,
    /// Participant who paid the full amount upfront
    pub payer: ParticipantId,
    /// Total amount paid
    pub amount: Money,
    /// Portion of the amount each participant owes
    pub shares: BTreeMap<ParticipantId, Money>,
}

impl ExpenseRecord {
    /// Creates a record with a fresh identifier
    pub(crate) fn new(
        payer: ParticipantId,
        amount: Money,
        shares: BTreeMap<ParticipantId, Money>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            payer,
            amount,
            shares,
        }
    }

    /// Returns the share owed by a participant, if any
    pub fn share_of(&self, participant: &ParticipantId) -> Option<Money> {
        self.shares.get(participant).copied()
    }
}
