//! Session and transaction dispatch for a ledger-backed registry
//! service reached through an injected wallet provider.
//!
//! The crate turns "submit this form" into a correctly-typed,
//! correctly-valued remote invocation and turns the remote outcome back
//! into a small result the presentation layer can show. All authority
//! for acceptance or rejection stays with the remote service.

pub mod binding;
pub mod dispatcher;
pub mod error;
pub mod loader;
pub mod provider;
pub mod session;
pub mod translator;

pub use binding::{OperationDescriptor, ServiceBinding};
pub use dispatcher::{InvocationOutcome, OperationDispatcher};
pub use error::ClientError;
pub use provider::{ProviderError, QueryInvocation, SubmitInvocation, WalletProvider};
pub use session::{SessionEvent, SessionManager};
pub use translator::{present, NO_RESULTS_MARKER, SUBMISSION_CONFIRMED_MARKER};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
