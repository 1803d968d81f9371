use std::sync::Arc;

use shared::{
    domain::{OpMode, TxReceipt},
    units::Amount,
};
use tracing::{info, warn};

use crate::{
    binding::ServiceBinding,
    error::ClientError,
    provider::{QueryInvocation, SubmitInvocation},
    session::SessionManager,
};

/// What a successful invocation produced: a sequence of records for a
/// read, an opaque receipt for a submission. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    Records(Vec<String>),
    Submitted(TxReceipt),
}

/// The single invocation path every business operation funnels through.
/// One code path means one arity check and one failure classification
/// for read, write and payable operations alike.
pub struct OperationDispatcher {
    session: Arc<SessionManager>,
}

impl OperationDispatcher {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self { session }
    }

    pub async fn invoke(
        &self,
        binding: &ServiceBinding,
        operation: &str,
        args: &[String],
    ) -> Result<InvocationOutcome, ClientError> {
        let result = self.invoke_inner(binding, operation, args).await;
        if let Err(err) = &result {
            warn!(operation, kind = err.kind(), "invocation failed: {err}");
        }
        result
    }

    async fn invoke_inner(
        &self,
        binding: &ServiceBinding,
        operation: &str,
        args: &[String],
    ) -> Result<InvocationOutcome, ClientError> {
        let descriptor = binding
            .descriptor(operation)
            .ok_or_else(|| ClientError::UnknownOperation(operation.to_string()))?;

        if args.len() != descriptor.arg_names.len() {
            return Err(ClientError::ArityMismatch {
                operation: operation.to_string(),
                expected: descriptor.arg_names.len(),
                actual: args.len(),
            });
        }

        let provider = self.session.provider()?;
        let outcome = match descriptor.mode {
            OpMode::Read => {
                info!(operation, args = args.len(), "dispatching query");
                let records = provider
                    .query(QueryInvocation {
                        contract: binding.address().clone(),
                        operation: operation.to_string(),
                        args: args.to_vec(),
                    })
                    .await
                    .map_err(ClientError::from)?;
                InvocationOutcome::Records(records)
            }
            OpMode::Write | OpMode::PayableWrite => {
                let from = self
                    .session
                    .account()
                    .await
                    .ok_or(ClientError::NotConnected)?;
                let value = descriptor.fixed_value.unwrap_or(Amount::ZERO);
                info!(
                    operation,
                    from = %from,
                    value = %value,
                    "dispatching submission"
                );
                let receipt = provider
                    .submit(SubmitInvocation {
                        contract: binding.address().clone(),
                        operation: operation.to_string(),
                        args: args.to_vec(),
                        from,
                        value,
                    })
                    .await
                    .map_err(ClientError::from)?;
                InvocationOutcome::Submitted(receipt)
            }
        };

        Ok(outcome)
    }
}
