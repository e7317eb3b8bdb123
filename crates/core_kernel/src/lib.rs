//! Core Kernel - Foundational types for the expense-sharing system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers for participants and expense records

pub mod money;
pub mod identifiers;

pub use money::{Money, MoneyError};
pub use identifiers::{ExpenseId, ParticipantId};
