use crate::{dispatcher::InvocationOutcome, error::ClientError};

/// Emitted for a read that matched nothing.
pub const NO_RESULTS_MARKER: &str = "no results";

/// Emitted for an accepted submission; the receipt itself is opaque.
pub const SUBMISSION_CONFIRMED_MARKER: &str = "submitted";

/// Converts an invocation result into the one line of text the
/// presentation layer shows. Pure and deterministic, which is what
/// keeps the dispatcher's output testable without a live provider.
pub fn present(result: &Result<InvocationOutcome, ClientError>) -> String {
    match result {
        Ok(InvocationOutcome::Records(records)) if records.is_empty() => {
            NO_RESULTS_MARKER.to_string()
        }
        Ok(InvocationOutcome::Records(records)) => records.join(", "),
        Ok(InvocationOutcome::Submitted(_)) => SUBMISSION_CONFIRMED_MARKER.to_string(),
        // Reason and message text are surfaced verbatim; they are what
        // the end user can act on.
        Err(ClientError::ContractRejected { reason }) => format!("ContractRejected: {reason}"),
        Err(ClientError::TransportError { message }) => format!("TransportError: {message}"),
        Err(err) => format!("{}: {err}", err.kind()),
    }
}
