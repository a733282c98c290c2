//! Identity types shared across the ticket purchasing crates.

pub mod types;

pub use types::{AccountId, InvalidAccountId, PurchaseId};
