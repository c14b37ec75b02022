//! The orchestration state machine.
//!
//! Drives one run through `Resolving -> Quoting -> Sending -> Confirming`.
//! Every phase is a suspension point on the ledger backend, bounded by one
//! configurable timeout and a cancellation token; the first failure aborts
//! the whole run. Nothing is retried.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{error, info};

use crate::error::{
    SendError, ERROR_CONFIRMING_TRANSACTION, ERROR_GETTING_DEPLOYMENT, ERROR_QUOTING_GAS_COST,
    ERROR_SENDING_TRANSACTION,
};
use crate::ledger::{Ledger, LedgerError, Receipt};

/// The phases a run moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Resolving,
    Quoting,
    Sending,
    Confirming,
}

impl Phase {
    pub fn marker(&self) -> &'static str {
        match self {
            Phase::Resolving => ERROR_GETTING_DEPLOYMENT,
            Phase::Quoting => ERROR_QUOTING_GAS_COST,
            Phase::Sending => ERROR_SENDING_TRANSACTION,
            Phase::Confirming => ERROR_CONFIRMING_TRANSACTION,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Resolving => "resolving",
            Phase::Quoting => "quoting",
            Phase::Sending => "sending",
            Phase::Confirming => "confirming",
        };
        f.write_str(name)
    }
}

/// One batch to dispatch.
#[derive(Debug, Clone)]
pub struct SendRequest {
    pub network: String,
    pub destinations: Vec<u32>,
    pub message: String,
    pub options: Vec<u8>,
}

/// Creates a linked cancellation handle/token pair.
pub fn cancellation() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

#[derive(Clone)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Resolves once cancellation is requested; pends forever otherwise.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow() {
                return;
            }
            if rx.changed().await.is_err() {
                // Handle dropped without cancelling; this can never fire.
                std::future::pending::<()>().await;
            }
        }
    }
}

enum PhaseFailure {
    Cancelled,
    TimedOut,
    Backend(LedgerError),
}

pub struct Orchestrator<L: Ledger> {
    ledger: L,
    phase_timeout: Duration,
}

impl<L: Ledger> Orchestrator<L> {
    pub fn new(ledger: L, phase_timeout: Duration) -> Self {
        Self {
            ledger,
            phase_timeout,
        }
    }

    /// Runs one batch to completion. Failures are logged exactly once with
    /// their phase marker, then returned to the caller.
    pub async fn run(&self, request: &SendRequest, cancel: &CancelToken) -> Result<Receipt, SendError> {
        let result = self.drive(request, cancel).await;

        match &result {
            Ok(receipt) => info!(
                tx = %receipt.transaction_hash,
                block = receipt.block_number,
                gas = receipt.gas_used,
                "message dispatched"
            ),
            Err(err) => error!(marker = err.marker(), error = %err, "send via oapp failed"),
        }

        result
    }

    async fn drive(&self, request: &SendRequest, cancel: &CancelToken) -> Result<Receipt, SendError> {
        info!(network = %request.network, "resolving dispatcher deployment");
        let deployment = self
            .phase(cancel, self.ledger.resolve_deployment(&request.network))
            .await
            .map_err(|failure| self.fail(Phase::Resolving, failure, request))?;

        info!(
            destinations = ?request.destinations,
            message_len = request.message.len(),
            "quoting aggregate delivery fee"
        );
        let fee = self
            .phase(
                cancel,
                self.ledger.quote(
                    &deployment,
                    &request.destinations,
                    &request.message,
                    &request.options,
                ),
            )
            .await
            .map_err(|failure| self.fail(Phase::Quoting, failure, request))?;

        info!(native_fee = fee.native_fee, "submitting batch with quoted payment");
        let pending = self
            .phase(
                cancel,
                self.ledger.send(
                    &deployment,
                    &request.destinations,
                    &request.message,
                    &request.options,
                    fee.native_fee,
                ),
            )
            .await
            .map_err(|failure| self.fail(Phase::Sending, failure, request))?;

        info!(signature = %pending.signature, "awaiting confirmation");
        let receipt = self
            .phase(cancel, self.ledger.confirm(&pending))
            .await
            .map_err(|failure| self.fail(Phase::Confirming, failure, request))?;

        Ok(receipt)
    }

    async fn phase<T>(
        &self,
        cancel: &CancelToken,
        work: impl Future<Output = Result<T, LedgerError>>,
    ) -> Result<T, PhaseFailure> {
        tokio::select! {
            _ = cancel.cancelled() => Err(PhaseFailure::Cancelled),
            outcome = tokio::time::timeout(self.phase_timeout, work) => match outcome {
                Err(_) => Err(PhaseFailure::TimedOut),
                Ok(Err(err)) => Err(PhaseFailure::Backend(err)),
                Ok(Ok(value)) => Ok(value),
            },
        }
    }

    fn fail(&self, phase: Phase, failure: PhaseFailure, request: &SendRequest) -> SendError {
        let message = match failure {
            PhaseFailure::Cancelled => return SendError::Cancelled { phase },
            PhaseFailure::TimedOut => {
                format!("timed out after {:?}", self.phase_timeout)
            }
            PhaseFailure::Backend(err) => err.to_string(),
        };

        match phase {
            Phase::Resolving => SendError::DeploymentResolution {
                network: request.network.clone(),
                message,
            },
            Phase::Quoting => SendError::FeeQuote {
                destinations: request.destinations.clone(),
                message,
            },
            Phase::Sending => SendError::DispatchSubmission { message },
            Phase::Confirming => SendError::Confirmation { message },
        }
    }
}
