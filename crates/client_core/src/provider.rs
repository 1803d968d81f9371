use async_trait::async_trait;
use shared::{
    domain::{AccountAddress, ContractAddress, TxReceipt},
    units::Amount,
};
use thiserror::Error;

/// A read-only query against the deployed service. No account and no
/// value transfer are involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryInvocation {
    pub contract: ContractAddress,
    pub operation: String,
    pub args: Vec<String>,
}

/// A state-mutating submission attributed to a connected account,
/// optionally carrying a value transfer in base units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitInvocation {
    pub contract: ContractAddress,
    pub operation: String,
    pub args: Vec<String>,
    pub from: AccountAddress,
    pub value: Amount,
}

/// The provider's failure shape, modeled as a tagged outcome instead of
/// being inspected ad hoc at each call site. `Reverted` carries the
/// service's human-readable rejection reason when one exists.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("request denied by user")]
    Denied,
    #[error("reverted: {reason}")]
    Reverted { reason: String },
    #[error("{message}")]
    Transport { message: String },
}

/// The injected wallet seam: a browser-resident component that custodies
/// the user's signing key and mediates every ledger request. Key
/// custody, consent prompts and signing all live behind this trait.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// One account-access round trip. Returns the provider's accounts in
    /// order; the first is taken as active.
    async fn request_accounts(&self) -> Result<Vec<AccountAddress>, ProviderError>;

    async fn query(&self, invocation: QueryInvocation) -> Result<Vec<String>, ProviderError>;

    async fn submit(&self, invocation: SubmitInvocation) -> Result<TxReceipt, ProviderError>;
}
