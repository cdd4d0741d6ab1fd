//! Wallet provider implementations

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ed25519_dalek::SigningKey;

use crate::{Result, WalletError};

/// Public key returned by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey(String);

impl PublicKey {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bs58::encode(bytes).into_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Response to a successful `connect()`
#[derive(Debug, Clone)]
pub struct ConnectResponse {
    pub public_key: PublicKey,
}

/// Trait for injected wallet providers
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &'static str;

    /// Whether the provider identifies itself as Phantom
    fn is_phantom(&self) -> bool;

    /// Request a connection. May wait for the user to approve.
    async fn connect(&self) -> Result<ConnectResponse>;
}

// ============================================================================
// Simulated Phantom
// ============================================================================

/// Phantom stand-in with a deterministic identity.
///
/// The key pair is derived from a label so the same label always reports the
/// same public key. The secret half never leaves the struct.
pub struct SimulatedPhantom {
    signing_key: SigningKey,
    approval_delay: Duration,
    approve: bool,
}

impl SimulatedPhantom {
    pub fn new(label: &str) -> Self {
        let seed = blake3::derive_key("shellagent simulated phantom seed v1", label.as_bytes());
        Self {
            signing_key: SigningKey::from_bytes(&seed),
            approval_delay: Duration::ZERO,
            approve: true,
        }
    }

    /// Wait this long before answering, as if the user were reading the popup.
    pub fn with_approval_delay(mut self, delay: Duration) -> Self {
        self.approval_delay = delay;
        self
    }

    /// Reject every connection request.
    pub fn rejecting(mut self) -> Self {
        self.approve = false;
        self
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_bytes(self.signing_key.verifying_key().as_bytes())
    }
}

impl fmt::Debug for SimulatedPhantom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedPhantom")
            .field("public_key", &self.public_key())
            .field("approval_delay", &self.approval_delay)
            .field("approve", &self.approve)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WalletProvider for SimulatedPhantom {
    fn name(&self) -> &'static str {
        "Phantom (simulated)"
    }

    fn is_phantom(&self) -> bool {
        true
    }

    async fn connect(&self) -> Result<ConnectResponse> {
        if !self.approval_delay.is_zero() {
            tokio::time::sleep(self.approval_delay).await;
        }
        if !self.approve {
            return Err(WalletError::Rejected);
        }
        Ok(ConnectResponse {
            public_key: self.public_key(),
        })
    }
}

// ============================================================================
// Injection
// ============================================================================

/// Which provider, if any, to inject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalletKind {
    #[default]
    Phantom,
    /// Phantom that rejects every request
    Reject,
    /// Nothing injected
    None,
}

impl WalletKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "phantom" => Some(Self::Phantom),
            "reject" | "rejecting" | "deny" => Some(Self::Reject),
            "none" | "absent" | "off" => Some(Self::None),
            _ => None,
        }
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phantom => write!(f, "phantom"),
            Self::Reject => write!(f, "reject"),
            Self::None => write!(f, "none"),
        }
    }
}

/// The provider slot a page would find on its global object.
#[derive(Clone, Default)]
pub struct InjectedWallet {
    provider: Option<Arc<dyn WalletProvider>>,
}

impl InjectedWallet {
    pub fn new(provider: Arc<dyn WalletProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn absent() -> Self {
        Self { provider: None }
    }

    /// Build the slot for a provider kind.
    pub fn from_kind(kind: WalletKind, label: &str, approval_delay: Duration) -> Self {
        match kind {
            WalletKind::Phantom => Self::new(Arc::new(
                SimulatedPhantom::new(label).with_approval_delay(approval_delay),
            )),
            WalletKind::Reject => Self::new(Arc::new(
                SimulatedPhantom::new(label)
                    .with_approval_delay(approval_delay)
                    .rejecting(),
            )),
            WalletKind::None => Self::absent(),
        }
    }

    /// The provider, if one is injected and flagged as Phantom.
    pub fn phantom(&self) -> Option<&Arc<dyn WalletProvider>> {
        self.provider.as_ref().filter(|p| p.is_phantom())
    }
}

impl fmt::Debug for InjectedWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectedWallet")
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_label_same_key() {
        let a = SimulatedPhantom::new("crab-01");
        let b = SimulatedPhantom::new("crab-01");
        let c = SimulatedPhantom::new("crab-02");
        assert_eq!(a.public_key(), b.public_key());
        assert_ne!(a.public_key(), c.public_key());
    }

    #[test]
    fn public_key_is_base58_of_32_bytes() {
        let key = SimulatedPhantom::new("crab-01").public_key();
        let bytes = bs58::decode(key.as_str()).into_vec().expect("valid base58");
        assert_eq!(bytes.len(), 32);
    }

    #[tokio::test]
    async fn rejecting_provider_errors() {
        let provider = SimulatedPhantom::new("crab-01").rejecting();
        assert!(matches!(provider.connect().await, Err(WalletError::Rejected)));
    }

    #[tokio::test(start_paused = true)]
    async fn approval_delay_suspends_connect() {
        let provider =
            SimulatedPhantom::new("crab-01").with_approval_delay(Duration::from_secs(30));
        let started = tokio::time::Instant::now();
        let response = provider.connect().await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(30));
        assert_eq!(response.public_key, provider.public_key());
    }

    #[test]
    fn wallet_kind_parsing() {
        assert_eq!(WalletKind::from_str("Phantom"), Some(WalletKind::Phantom));
        assert_eq!(WalletKind::from_str("absent"), Some(WalletKind::None));
        assert_eq!(WalletKind::from_str("deny"), Some(WalletKind::Reject));
        assert_eq!(WalletKind::from_str("metamask"), None);
    }

    #[test]
    fn absent_slot_has_no_phantom() {
        assert!(InjectedWallet::absent().phantom().is_none());
        let slot = InjectedWallet::from_kind(WalletKind::Phantom, "crab-01", Duration::ZERO);
        assert!(slot.phantom().is_some());
    }
}
