//! Shellagent Wallet - Injected wallet provider seam
//!
//! The dashboard talks to a wallet the way a page talks to a browser
//! extension: it looks for an injected provider, checks the Phantom flag and
//! asks it to `connect()`. Only the public key is ever requested.
//!
//! ## Providers
//! - [`SimulatedPhantom`]: deterministic ed25519 key, base58 public key,
//!   optional approval delay, can be told to reject
//! - absent: no provider injected at all
//!
//! ## Failure handling
//!
//! Both failure kinds are non-fatal. Callers get a [`ConnectOutcome`] and
//! decide what to log; nothing is retried.

pub mod connector;
pub mod opener;
pub mod provider;

pub use connector::*;
pub use opener::*;
pub use provider::*;

use thiserror::Error;

/// Errors raised by wallet providers and link openers
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("User rejected the request")]
    Rejected,

    #[error("Provider error: {message}")]
    Provider { message: String },

    #[error("Failed to open {url}: {message}")]
    OpenLink { url: String, message: String },
}

pub type Result<T> = std::result::Result<T, WalletError>;
