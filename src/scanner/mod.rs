//! Token risk scanning engine
//!
//! Inspects a mint and produces a [`ScanResult`]:
//! - Mint / freeze authority from the raw mint account
//! - Top-10 holder concentration
//! - Token age from signature history
//!
//! Checks that cannot be evaluated fail open and never raise the score.

mod engine;
mod types;

pub mod age;
pub mod authority;
pub mod concentration;
pub mod layout;
pub mod score;
pub mod snapshot;

pub use engine::*;
pub use types::*;
