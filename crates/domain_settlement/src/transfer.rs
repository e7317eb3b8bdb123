//! Settlement transfer type

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Money, ParticipantId};

/// A directed payment from one debtor to one creditor
///
/// Produced only by the settlement engine; the amount is always strictly
/// positive. Transfers are transient computation outputs and are never
/// stored back into the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// Participant who pays
    pub from: ParticipantId,
    /// Participant who receives
    pub to: ParticipantId,
    /// Amount to pay
    pub amount: Money,
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}
