//! Ledger Domain - Shared-Expense Tracking
//!
//! This crate tracks shared monetary obligations among a group of
//! participants. It owns the participant registry and the append-only list
//! of expense records, validates every record before it is stored, and
//! derives each participant's net position by replaying the full history.
//!
//! # Balance Semantics
//!
//! Every expense credits the payer with the full amount and debits each
//! share participant with their portion:
//! - A positive net balance means the group owes that participant money
//! - A negative net balance means that participant owes the group
//! - The sum of all net balances is always zero (conservation of money)
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{Ledger, ExpenseSplit};
//!
//! let mut ledger = Ledger::new();
//! ledger.add_participant("Alice".into());
//! ledger.add_participant("Bob".into());
//!
//! ledger.add_equal_split("Alice".into(), Money::new(dec!(40)), vec!["Alice".into(), "Bob".into()])?;
//!
//! let net = ledger.net_balances();
//! ```

pub mod ledger;
pub mod expense;
pub mod error;

pub use ledger::{Ledger, NetBalances};
pub use expense::{ExpenseRecord, ExpenseSplit};
pub use error::LedgerError;
