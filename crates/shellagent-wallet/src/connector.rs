//! Phantom connect flow

use shellagent_types::WalletAddress;

use crate::provider::InjectedWallet;

/// Result of one connect attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected(WalletAddress),
    /// No Phantom provider injected
    NotFound,
    /// The provider refused or errored
    Failed { reason: String },
}

/// Ask the injected provider for its public key.
///
/// Waits as long as the provider takes; there is no timeout.
pub async fn connect_phantom(injected: &InjectedWallet) -> ConnectOutcome {
    let Some(provider) = injected.phantom() else {
        tracing::warn!("no Phantom provider injected");
        return ConnectOutcome::NotFound;
    };

    tracing::info!(provider = provider.name(), "requesting wallet connection");
    match provider.connect().await {
        Ok(response) => {
            let address = WalletAddress::new(response.public_key.to_string());
            tracing::info!(address = %address.short(), "wallet connected");
            ConnectOutcome::Connected(address)
        }
        Err(e) => {
            tracing::error!(error = %e, "wallet connection failed");
            ConnectOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}
