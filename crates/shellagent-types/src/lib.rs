//! Shellagent Types - Canonical data model for the Shellagent dashboard
//!
//! This crate contains the foundational types shared by every other crate in
//! the workspace, with zero dependencies on them:
//!
//! - Log entries and their kinds
//! - Token rows and the seed market
//! - The connected wallet address
//!
//! # Invariants
//!
//! 1. A log buffer never holds more than [`LOG_CAPACITY`] entries
//! 2. The token set is fixed for the whole session
//! 3. The wallet address is set at most once per session

pub mod log;
pub mod token;
pub mod wallet;

pub use log::*;
pub use token::*;
pub use wallet::*;

/// Product version shown in the header, footer and boot log.
pub const SHELLAGENT_VERSION: &str = "1.0.0";

/// Maximum number of entries retained by the activity log.
pub const LOG_CAPACITY: usize = 50;
