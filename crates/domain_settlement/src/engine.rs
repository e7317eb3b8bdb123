//! Greedy settlement engine
//!
//! Matches the largest remaining creditor against the largest remaining
//! debtor until every position is within epsilon of zero.
//!
//! # Algorithm
//!
//! 1. Partition participants into creditors (net > ε) and debtors (net < −ε)
//! 2. Keep both sides in max-ordered heaps by remaining amount
//! 3. Pop the extremes, transfer `min(credit, debt)`, re-insert whichever
//!    side still has a remainder above ε
//!
//! # Example
//!
//! ```text
//! Net positions:
//!   Alice: +150
//!   Bob:    +50
//!   Carol: −200
//!
//! Transfers:
//!   Carol pays Alice: 150
//!   Carol pays Bob:    50
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BinaryHeap;
use tracing::debug;

use core_kernel::{Money, ParticipantId};
use domain_ledger::{Ledger, NetBalances};

use crate::transfer::Transfer;

/// Threshold separating real balances from floating noise
///
/// Participants whose net position is within this epsilon of zero are
/// treated as settled and receive no transfers.
pub const SETTLEMENT_EPSILON: Decimal = dec!(0.000001);

/// A party's remaining unsettled magnitude
///
/// Ordering compares the remaining amount first, then the participant id,
/// so heap pops are deterministic when amounts tie.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Position {
    remaining: Decimal,
    participant: ParticipantId,
}

/// Greedy largest-pair settlement engine
///
/// A total function over valid net balances: it has no failure modes of its
/// own and trusts that its input sums to zero (guaranteed by the ledger for
/// any sequence of validated records). The emitted transfer list never
/// exceeds participants − 1 entries, but is not guaranteed to be the true
/// minimum (that problem is NP-hard in general).
#[derive(Debug, Clone)]
pub struct SettlementEngine {
    epsilon: Decimal,
}

impl Default for SettlementEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SettlementEngine {
    /// Creates an engine with the default epsilon
    pub fn new() -> Self {
        Self {
            epsilon: SETTLEMENT_EPSILON,
        }
    }

    /// Creates an engine with a custom positive-balance threshold
    pub fn with_epsilon(epsilon: Decimal) -> Self {
        Self { epsilon }
    }

    /// Computes settling transfers for a ledger's current net balances
    pub fn settle_ledger(&self, ledger: &Ledger) -> Vec<Transfer> {
        self.settle(&ledger.net_balances())
    }

    /// Computes an ordered sequence of transfers that zeroes all balances
    ///
    /// Balances within epsilon of zero are excluded up front; epsilon-level
    /// residue from the matching loop is discarded.
    pub fn settle(&self, balances: &NetBalances) -> Vec<Transfer> {
        let mut creditors: BinaryHeap<Position> = BinaryHeap::new();
        let mut debtors: BinaryHeap<Position> = BinaryHeap::new();

        for (participant, balance) in balances {
            let amount = balance.amount();
            if amount > self.epsilon {
                creditors.push(Position {
                    remaining: amount,
                    participant: participant.clone(),
                });
            } else if amount < -self.epsilon {
                debtors.push(Position {
                    remaining: -amount,
                    participant: participant.clone(),
                });
            }
        }

        debug!(
            creditors = creditors.len(),
            debtors = debtors.len(),
            "partitioned net positions"
        );

        let mut transfers = Vec::new();
        while let (Some(mut creditor), Some(mut debtor)) = (creditors.pop(), debtors.pop()) {
            let pay = creditor.remaining.min(debtor.remaining);
            if pay > self.epsilon {
                transfers.push(Transfer {
                    from: debtor.participant.clone(),
                    to: creditor.participant.clone(),
                    amount: Money::new(pay),
                });
            }
            creditor.remaining -= pay;
            debtor.remaining -= pay;

            if creditor.remaining > self.epsilon {
                creditors.push(creditor);
            }
            if debtor.remaining > self.epsilon {
                debtors.push(debtor);
            }
        }

        debug!(transfer_count = transfers.len(), "settlement complete");
        transfers
    }
}
