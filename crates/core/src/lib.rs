//! Core business logic for Saldo.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types and calculations live here.
//!
//! # Modules
//!
//! - `balance` - Balance sheet taxonomy and classification
//! - `income` - Income statement derivation

pub mod balance;
pub mod income;
