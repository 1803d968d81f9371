use std::sync::Arc;

use shared::domain::AccountAddress;
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

use crate::{error::ClientError, provider::WalletProvider};

/// Session lifecycle notifications for the presentation collaborator.
/// Account switches originate in the provider and must be surfaced, not
/// silently swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Connected(AccountAddress),
    AccountChanged {
        previous: AccountAddress,
        current: AccountAddress,
    },
    Disconnected,
}

/// Owns the single active account identity and its connection
/// lifecycle. Exactly one session exists per running client; this is
/// the only writer of session state.
pub struct SessionManager {
    provider: Option<Arc<dyn WalletProvider>>,
    account: Mutex<Option<AccountAddress>>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionManager {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            provider,
            account: Mutex::new(None),
            events,
        }
    }

    pub fn with_provider(provider: Arc<dyn WalletProvider>) -> Self {
        Self::new(Some(provider))
    }

    pub fn provider(&self) -> Result<&Arc<dyn WalletProvider>, ClientError> {
        self.provider.as_ref().ok_or(ClientError::ProviderMissing)
    }

    /// Performs the one account-request round trip and stores the first
    /// returned address. Idempotent: while already connected it returns
    /// the stored address without re-prompting the user. The lock is
    /// held across the round trip so overlapping connect calls collapse
    /// into a single provider prompt.
    pub async fn connect(&self) -> Result<AccountAddress, ClientError> {
        let mut guard = self.account.lock().await;
        if let Some(account) = guard.clone() {
            return Ok(account);
        }

        let provider = self.provider()?;
        let accounts = provider.request_accounts().await.map_err(ClientError::from)?;
        let account = accounts
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::TransportError {
                message: "provider returned no accounts".to_string(),
            })?;

        *guard = Some(account.clone());
        info!(account = %account, "session connected");
        let _ = self.events.send(SessionEvent::Connected(account.clone()));
        Ok(account)
    }

    pub async fn disconnect(&self) {
        if self.account.lock().await.take().is_some() {
            info!("session disconnected");
            let _ = self.events.send(SessionEvent::Disconnected);
        }
    }

    /// Invariant: connected iff an account address is present.
    pub async fn is_connected(&self) -> bool {
        self.account.lock().await.is_some()
    }

    pub async fn account(&self) -> Option<AccountAddress> {
        self.account.lock().await.clone()
    }

    /// Entry point for the provider's account-change notification. An
    /// empty list means the provider revoked access; a different first
    /// address replaces the active identity and is reported to
    /// collaborators.
    pub async fn handle_accounts_changed(&self, accounts: Vec<AccountAddress>) {
        let mut guard = self.account.lock().await;
        let Some(previous) = guard.clone() else {
            // Not connected; nothing to surface.
            return;
        };

        match accounts.into_iter().next() {
            None => {
                *guard = None;
                warn!(account = %previous, "provider revoked account access");
                let _ = self.events.send(SessionEvent::Disconnected);
            }
            Some(current) if current != previous => {
                *guard = Some(current.clone());
                warn!(previous = %previous, current = %current, "active account switched");
                let _ = self
                    .events
                    .send(SessionEvent::AccountChanged { previous, current });
            }
            Some(_) => {}
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}
