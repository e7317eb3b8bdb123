//! Shared-expense ledger implementation
//!
//! This module provides the core ledger functionality: registering
//! participants, validating and storing expense records, and deriving net
//! balances by replaying the full record list.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use core_kernel::{ExpenseId, Money, ParticipantId};

use crate::error::LedgerError;
use crate::expense::{ExpenseRecord, ExpenseSplit};

/// Absolute tolerance for exact-split share sums, in currency units
pub const SHARE_SUM_TOLERANCE: Decimal = dec!(0.01);

/// Magnitude below which a derived net balance is clamped to exactly zero
pub const NOISE_THRESHOLD: Decimal = dec!(0.000000001);

/// Net position of every known participant
///
/// Positive means the group owes that participant money; negative means the
/// participant owes the group. Derived fresh from the record list on each
/// request; never stored.
pub type NetBalances = BTreeMap<ParticipantId, Money>;

/// The ledger of participants and shared expenses
///
/// The ledger owns the participant set and the append-only record list.
/// Every mutation is validated in full before any state changes, so a
/// rejected operation leaves the ledger exactly as it was.
///
/// # Invariants
///
/// - The payer and every share participant of a stored record were known
///   at the time the record was appended
/// - Share values are non-negative and sum to the record amount within
///   [`SHARE_SUM_TOLERANCE`]
/// - Records are never mutated or removed
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Ledger {
    /// Registered participants
    participants: BTreeSet<ParticipantId>,
    /// Append-only expense history
    expenses: Vec<ExpenseRecord>,
}

impl Ledger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a participant
    ///
    /// Idempotent: registering an already-known identifier is a no-op.
    /// Returns true if the participant was newly added.
    pub fn add_participant(&mut self, id: ParticipantId) -> bool {
        let added = self.participants.insert(id.clone());
        if added {
            debug!(participant = %id, "registered participant");
        }
        added
    }

    /// Returns true if the identifier is registered
    pub fn has_participant(&self, id: &ParticipantId) -> bool {
        self.participants.contains(id)
    }

    /// All registered participants, in identifier order
    pub fn participants(&self) -> impl Iterator<Item = &ParticipantId> {
        self.participants.iter()
    }

    /// All stored expense records, in insertion order
    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    /// Records an expense divided evenly across `participants`
    ///
    /// The amount is allocated in minor units; when it does not divide
    /// evenly, the earliest list positions receive one extra cent so the
    /// shares always sum exactly to the amount. A participant listed more
    /// than once accumulates one part per occurrence.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownParticipant`] if the payer or any listed
    ///   participant is unregistered
    /// - [`LedgerError::EmptyParticipantSet`] if the list is empty
    /// - [`LedgerError::InvalidAmount`] if the amount is negative
    pub fn add_equal_split(
        &mut self,
        payer: ParticipantId,
        amount: Money,
        participants: Vec<ParticipantId>,
    ) -> Result<ExpenseId, LedgerError> {
        self.record_expense(payer, amount, ExpenseSplit::Equal { participants })
    }

    /// Records an expense with explicitly specified per-participant shares
    ///
    /// A participant appearing in more than one pair accumulates the sum of
    /// its shares.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownParticipant`] if the payer or any share
    ///   participant is unregistered
    /// - [`LedgerError::EmptyShareSet`] if no shares are provided
    /// - [`LedgerError::InvalidAmount`] if the amount or any share is
    ///   negative
    /// - [`LedgerError::ShareSumMismatch`] if the shares do not sum to the
    ///   amount within [`SHARE_SUM_TOLERANCE`]
    pub fn add_exact_split(
        &mut self,
        payer: ParticipantId,
        amount: Money,
        shares: Vec<(ParticipantId, Money)>,
    ) -> Result<ExpenseId, LedgerError> {
        self.record_expense(payer, amount, ExpenseSplit::Exact { shares })
    }

    /// Validates a split request and appends the resulting record
    ///
    /// This is the single construction path for expense records; both split
    /// kinds go through it. Validation completes before any state changes.
    ///
    /// # Returns
    ///
    /// The identifier of the new record
    pub fn record_expense(
        &mut self,
        payer: ParticipantId,
        amount: Money,
        split: ExpenseSplit,
    ) -> Result<ExpenseId, LedgerError> {
        if !self.participants.contains(&payer) {
            return Err(LedgerError::UnknownParticipant(payer.as_str().to_string()));
        }
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount(amount.amount()));
        }

        let shares = match split {
            ExpenseSplit::Equal { participants } => {
                self.build_equal_shares(amount, &participants)?
            }
            ExpenseSplit::Exact { shares } => self.build_exact_shares(amount, &shares)?,
        };

        let record = ExpenseRecord::new(payer, amount, shares);
        let id = record.id;
        debug!(
            expense = %id,
            payer = %record.payer,
            amount = %record.amount,
            share_count = record.shares.len(),
            "recorded expense"
        );
        self.expenses.push(record);

        Ok(id)
    }

    /// Builds the share map for an equal split
    fn build_equal_shares(
        &self,
        amount: Money,
        participants: &[ParticipantId],
    ) -> Result<BTreeMap<ParticipantId, Money>, LedgerError> {
        if participants.is_empty() {
            return Err(LedgerError::EmptyParticipantSet);
        }
        for participant in participants {
            if !self.participants.contains(participant) {
                return Err(LedgerError::UnknownParticipant(
                    participant.as_str().to_string(),
                ));
            }
        }

        let parts = amount.allocate(participants.len() as u32)?;

        let mut shares: BTreeMap<ParticipantId, Money> = BTreeMap::new();
        for (participant, part) in participants.iter().zip(parts) {
            *shares.entry(participant.clone()).or_insert_with(Money::zero) += part;
        }

        Ok(shares)
    }

    /// Builds the share map for an exact split
    fn build_exact_shares(
        &self,
        amount: Money,
        share_list: &[(ParticipantId, Money)],
    ) -> Result<BTreeMap<ParticipantId, Money>, LedgerError> {
        if share_list.is_empty() {
            return Err(LedgerError::EmptyShareSet);
        }

        let mut shares: BTreeMap<ParticipantId, Money> = BTreeMap::new();
        let mut total = Money::zero();
        for (participant, share) in share_list {
            if !self.participants.contains(participant) {
                return Err(LedgerError::UnknownParticipant(
                    participant.as_str().to_string(),
                ));
            }
            if share.is_negative() {
                return Err(LedgerError::InvalidAmount(share.amount()));
            }
            *shares.entry(participant.clone()).or_insert_with(Money::zero) += *share;
            total += *share;
        }

        if (total.amount() - amount.amount()).abs() > SHARE_SUM_TOLERANCE {
            return Err(LedgerError::ShareSumMismatch {
                expected: amount.amount(),
                actual: total.amount(),
            });
        }

        Ok(shares)
    }

    /// Derives the net balance of every known participant
    ///
    /// Replays the full record list: the payer is credited the full amount,
    /// and each share participant is debited their portion. A payer who also
    /// appears in the shares nets correctly through both adjustments.
    /// Participants with no activity appear with a zero balance. Balances
    /// with magnitude below [`NOISE_THRESHOLD`] clamp to exactly zero.
    pub fn net_balances(&self) -> NetBalances {
        let mut net: NetBalances = self
            .participants
            .iter()
            .map(|p| (p.clone(), Money::zero()))
            .collect();

        for expense in &self.expenses {
            if let Some(balance) = net.get_mut(&expense.payer) {
                *balance += expense.amount;
            }
            for (participant, share) in &expense.shares {
                if let Some(balance) = net.get_mut(participant) {
                    *balance -= *share;
                }
            }
        }

        for balance in net.values_mut() {
            if balance.amount().abs() < NOISE_THRESHOLD {
                *balance = Money::zero();
            }
        }

        net
    }
}
