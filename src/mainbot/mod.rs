// src/mainbot/mod.rs
//! Read-only mirror of the mainbot database: one record type per table,
//! display helpers on each, and SELECT-only loaders.

pub mod balance;
pub mod bonus;
pub mod payment;
pub mod purchase;
pub mod read_ops;
pub mod summary;
pub mod transfer;
pub mod user;


pub use balance::{BalanceKind, BalanceRecord};
pub use bonus::Bonus;
pub use payment::Payment;
pub use purchase::Purchase;
pub use read_ops::*;
pub use summary::UserSummary;
pub use transfer::Transfer;
pub use user::User;
