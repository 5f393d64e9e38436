//! Core ledger and budget logic for Budgetbook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every operation is a synchronous function over decimals and journal lines.
//!
//! # Modules
//!
//! - `ledger` - Journal entries, the balance validator, DRAFT -> POSTED lifecycle
//! - `budget` - Budget vs actual figures and over-budget projection

pub mod budget;
pub mod ledger;
