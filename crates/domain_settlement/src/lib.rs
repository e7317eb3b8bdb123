//! Settlement Domain - Debt Minimization
//!
//! This crate turns the net balances derived by the ledger into a short
//! sequence of point-to-point transfers that zeroes every participant's
//! position. It uses greedy largest-pair matching: repeatedly settle as much
//! as possible between the participant owed the most and the participant
//! owing the most.
//!
//! Finding the true minimum number of transfers is NP-hard in general; the
//! greedy approach trades optimality for linearithmic simplicity and never
//! emits more than participants − 1 transfers.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_settlement::SettlementEngine;
//!
//! let engine = SettlementEngine::new();
//! let transfers = engine.settle_ledger(&ledger);
//! for transfer in &transfers {
//!     println!("{transfer}");
//! }
//! ```

pub mod engine;
pub mod transfer;

pub use engine::{SettlementEngine, SETTLEMENT_EPSILON};
pub use transfer::Transfer;
