//! Chain access abstraction.
//!
//! The orchestrator drives a `Ledger` and never talks to a chain directly,
//! so backends can be swapped without touching the state machine. The crate
//! ships an in-process simulation used by the `sim` network and the tests.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// Failure inside a ledger backend. Phase-agnostic; the orchestrator decides
/// which category it lands in.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct LedgerError(pub String);

impl LedgerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A located dispatcher deployment.
#[derive(Debug, Clone)]
pub struct Deployment {
    pub network: String,
    pub program_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessagingFee {
    pub native_fee: u64,
    pub lz_token_fee: u64,
}

/// A submitted but not yet finalized dispatch.
#[derive(Debug, Clone)]
pub struct PendingDispatch {
    pub signature: String,
}

/// Finality proof of one completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub transaction_hash: String,
    pub block_number: u64,
    pub gas_used: u64,
}

/// Ledger operations the orchestration procedure needs, one per phase.
pub trait Ledger: Send + Sync {
    /// Locate the dispatcher deployed on `network`.
    fn resolve_deployment(
        &self,
        network: &str,
    ) -> impl Future<Output = Result<Deployment, LedgerError>> + Send;

    /// Aggregate delivery fee for one batch at current pricing.
    fn quote(
        &self,
        deployment: &Deployment,
        destinations: &[u32],
        message: &str,
        options: &[u8],
    ) -> impl Future<Output = Result<MessagingFee, LedgerError>> + Send;

    /// Submit the batch with `native_fee` attached.
    fn send(
        &self,
        deployment: &Deployment,
        destinations: &[u32],
        message: &str,
        options: &[u8],
        native_fee: u64,
    ) -> impl Future<Output = Result<PendingDispatch, LedgerError>> + Send;

    /// Await finality of a submitted dispatch.
    fn confirm(
        &self,
        pending: &PendingDispatch,
    ) -> impl Future<Output = Result<Receipt, LedgerError>> + Send;
}

/// The one network the simulated ledger can resolve.
pub const SIM_NETWORK: &str = "sim";

const SIM_PROGRAM_ID: &str = "ARVHbbp7sg1MyAMPgFRAPv2j7tPf3uAAj96LCNNB5Swc";

// Mirrors the lz_mock endpoint schedule, including the payload's 4-byte
// length prefix.
const BASE_FEE: u64 = 10_000;
const FEE_PER_EID: u64 = 5;
const FEE_PER_BYTE: u64 = 10;
const PAYLOAD_LENGTH_PREFIX: usize = 4;

const GAS_BASE: u64 = 150_000;
const GAS_PER_DESTINATION: u64 = 5_000;
const GAS_PER_BYTE: u64 = 10;

/// In-process ledger simulation priced like the mock endpoint program.
pub struct SimLedger {
    latency: Duration,
    block_height: AtomicU64,
    pending_gas: Mutex<HashMap<String, u64>>,
}

impl SimLedger {
    pub fn new() -> Self {
        Self::with_latency(Duration::from_millis(20))
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            block_height: AtomicU64::new(1),
            pending_gas: Mutex::new(HashMap::new()),
        }
    }

    fn destination_fee(dst_eid: u32, message: &str) -> u64 {
        let payload_len = (message.len() + PAYLOAD_LENGTH_PREFIX) as u64;
        BASE_FEE + u64::from(dst_eid) * FEE_PER_EID + payload_len * FEE_PER_BYTE
    }

    fn aggregate_fee(destinations: &[u32], message: &str) -> Result<u64, LedgerError> {
        if destinations.is_empty() {
            return Err(LedgerError::new("empty destination list"));
        }
        let mut total: u64 = 0;
        for &dst_eid in destinations {
            total = total
                .checked_add(Self::destination_fee(dst_eid, message))
                .ok_or_else(|| LedgerError::new("fee aggregation overflow"))?;
        }
        Ok(total)
    }

    fn signature_for(destinations: &[u32], message: &str, options: &[u8], block: u64) -> String {
        let mut hasher = DefaultHasher::new();
        destinations.hash(&mut hasher);
        message.hash(&mut hasher);
        options.hash(&mut hasher);
        block.hash(&mut hasher);
        let head = hasher.finish();
        head.hash(&mut hasher);
        format!("{:016x}{:016x}", head, hasher.finish())
    }
}

impl Default for SimLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger for SimLedger {
    async fn resolve_deployment(&self, network: &str) -> Result<Deployment, LedgerError> {
        tokio::time::sleep(self.latency).await;
        if network != SIM_NETWORK {
            return Err(LedgerError::new(format!(
                "no multisend deployment recorded for network '{network}'"
            )));
        }
        Ok(Deployment {
            network: network.to_string(),
            program_id: SIM_PROGRAM_ID.to_string(),
        })
    }

    async fn quote(
        &self,
        _deployment: &Deployment,
        destinations: &[u32],
        message: &str,
        _options: &[u8],
    ) -> Result<MessagingFee, LedgerError> {
        tokio::time::sleep(self.latency).await;
        Ok(MessagingFee {
            native_fee: Self::aggregate_fee(destinations, message)?,
            lz_token_fee: 0,
        })
    }

    async fn send(
        &self,
        _deployment: &Deployment,
        destinations: &[u32],
        message: &str,
        options: &[u8],
        native_fee: u64,
    ) -> Result<PendingDispatch, LedgerError> {
        tokio::time::sleep(self.latency).await;

        let required = Self::aggregate_fee(destinations, message)?;
        if native_fee < required {
            return Err(LedgerError::new(format!(
                "insufficient fee attached: {native_fee} < {required}"
            )));
        }

        let block = self.block_height.fetch_add(1, Ordering::SeqCst);
        let signature = Self::signature_for(destinations, message, options, block);
        let gas_used = GAS_BASE
            + GAS_PER_DESTINATION * destinations.len() as u64
            + GAS_PER_BYTE * message.len() as u64;
        self.pending_gas
            .lock()
            .expect("pending map poisoned")
            .insert(signature.clone(), gas_used);

        Ok(PendingDispatch { signature })
    }

    async fn confirm(&self, pending: &PendingDispatch) -> Result<Receipt, LedgerError> {
        tokio::time::sleep(self.latency).await;

        let gas_used = self
            .pending_gas
            .lock()
            .expect("pending map poisoned")
            .remove(&pending.signature)
            .ok_or_else(|| {
                LedgerError::new(format!("unknown transaction '{}'", pending.signature))
            })?;

        Ok(Receipt {
            transaction_hash: pending.signature.clone(),
            block_number: self.block_height.load(Ordering::SeqCst),
            gas_used,
        })
    }
}
