//! Error types for the orchestration run.
//!
//! One variant per phase, so every failure lands in exactly one category and
//! carries the context its marker line needs.

use thiserror::Error;

use crate::orchestrator::Phase;

/// Result marker printed on success.
pub const SENT_VIA_OAPP: &str = "SENT_VIA_OAPP";
/// Phase markers logged when the matching phase fails.
pub const ERROR_GETTING_DEPLOYMENT: &str = "ERROR_GETTING_DEPLOYMENT";
pub const ERROR_QUOTING_GAS_COST: &str = "ERROR_QUOTING_GAS_COST";
pub const ERROR_SENDING_TRANSACTION: &str = "ERROR_SENDING_TRANSACTION";
/// The source had no confirmation-phase category; this marker is ours.
pub const ERROR_CONFIRMING_TRANSACTION: &str = "ERROR_CONFIRMING_TRANSACTION";

/// A failed orchestration run. Each phase fails fast: the first error aborts
/// the run, nothing is retried.
#[derive(Error, Debug)]
pub enum SendError {
    /// No dispatcher deployment found for the requested network
    #[error("failed to resolve dispatcher deployment for network '{network}': {message}")]
    DeploymentResolution { network: String, message: String },

    /// The aggregate fee quote failed
    #[error("failed to quote aggregate fee for destinations {destinations:?}: {message}")]
    FeeQuote {
        destinations: Vec<u32>,
        message: String,
    },

    /// The dispatch transaction could not be submitted
    #[error("failed to submit dispatch transaction: {message}")]
    DispatchSubmission { message: String },

    /// The submitted dispatch did not reach finality
    #[error("confirmation did not complete: {message}")]
    Confirmation { message: String },

    /// The run was cancelled while the given phase was in flight
    #[error("run cancelled during {phase}")]
    Cancelled { phase: Phase },
}

impl SendError {
    /// The marker logged exactly once when this error terminates a run.
    pub fn marker(&self) -> &'static str {
        match self {
            SendError::DeploymentResolution { .. } => ERROR_GETTING_DEPLOYMENT,
            SendError::FeeQuote { .. } => ERROR_QUOTING_GAS_COST,
            SendError::DispatchSubmission { .. } => ERROR_SENDING_TRANSACTION,
            SendError::Confirmation { .. } => ERROR_CONFIRMING_TRANSACTION,
            SendError::Cancelled { phase } => phase.marker(),
        }
    }
}
