//! Ledger Integration
//!
//! Talks to a Sui fullnode over JSON-RPC. The node and the Move module are
//! external; this module only builds calls, submits signed transactions,
//! waits for confirmation and reads objects back.
//!
//! ## Architecture
//!
//! - **LedgerClient**: the seam the rest of the crate depends on
//! - **SuiRpcClient**: reqwest-backed implementation
//! - **types**: move calls and the response shapes read from the node

mod client;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod types;

pub use client::SuiRpcClient;
pub use error::LedgerError;
pub use types::{
    CallArg, ExecutionResult, ExecutionStatus, MoveCall, ObjectChange, ObjectData,
    ObjectResponse, ParsedContent, TransactionBlock, TransactionBytes, TransactionEffects,
};

use async_trait::async_trait;

use crate::wallet::TransactionSigner;

/// Operations the application needs from a ledger node
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Build, sign and submit a single move call
    async fn sign_and_execute(
        &self,
        signer: &dyn TransactionSigner,
        call: &MoveCall,
    ) -> Result<ExecutionResult, LedgerError>;

    /// Block until the transaction is visible with its object changes
    async fn wait_for_transaction(&self, digest: &str) -> Result<TransactionBlock, LedgerError>;

    /// Read an object with its content and owner
    async fn get_object(&self, object_id: &str) -> Result<ObjectResponse, LedgerError>;

    /// Chain identifier, used as a liveness check
    async fn chain_identifier(&self) -> Result<String, LedgerError>;
}
