//! Sui JSON-RPC Client
//!
//! HTTP client for a Sui fullnode. Transactions are built by the node
//! (`unsafe_moveCall`), signed locally and submitted with
//! `sui_executeTransactionBlock`.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use super::error::LedgerError;
use super::types::{
    ExecutionResult, MoveCall, ObjectResponse, TransactionBlock, TransactionBytes,
};
use super::LedgerClient;
use crate::config::NetworkConfig;
use crate::wallet::TransactionSigner;

/// Sui fullnode JSON-RPC client
pub struct SuiRpcClient {
    client: Client,
    config: NetworkConfig,
    gas_budget: u64,
    next_id: AtomicU64,
}

impl SuiRpcClient {
    /// Create a new client with the given network settings
    pub fn new(config: NetworkConfig, gas_budget: u64) -> Result<Self, LedgerError> {
        // No client-wide timeout: submissions must run to completion
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            config,
            gas_budget,
            next_id: AtomicU64::new(1),
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    fn request<'a>(&self, method: &'a str, params: Value) -> RpcRequest<'a> {
        RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        }
    }

    /// Read-only call: bounded by `request_timeout_ms`, transport failures retried
    async fn query<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, LedgerError> {
        let request = self.request(method, params);
        let timeout = Duration::from_millis(self.config.request_timeout_ms);

        let mut last_error = LedgerError::Unavailable;

        for attempt in 0..self.config.max_retries.max(1) {
            if attempt > 0 {
                // Backoff: 1s, 4s, 9s...
                let delay = Duration::from_secs((attempt as u64).pow(2));
                tokio::time::sleep(delay).await;
            }

            match self.send(&request, Some(timeout)).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() => {
                    tracing::debug!(method, attempt, error = %e, "Retrying ledger request");
                    last_error = e;
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error)
    }

    /// Transaction call: sent exactly once and awaited without a deadline
    async fn submit<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, LedgerError> {
        let request = self.request(method, params);
        self.send(&request, None).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: &RpcRequest<'_>,
        timeout: Option<Duration>,
    ) -> Result<T, LedgerError> {
        let mut builder = self.client.post(&self.config.rpc_url).json(request);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(LedgerError::from_transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(LedgerError::Http {
                status: status.as_u16(),
                message: text,
            });
        }

        let body: RpcResponse = response.json().await.map_err(LedgerError::from_transport)?;

        if let Some(error) = body.error {
            return Err(LedgerError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        let result = body
            .result
            .ok_or_else(|| LedgerError::Decode(format!("{} returned no result", request.method)))?;

        Ok(serde_json::from_value(result)?)
    }
}

#[async_trait]
impl LedgerClient for SuiRpcClient {
    async fn sign_and_execute(
        &self,
        signer: &dyn TransactionSigner,
        call: &MoveCall,
    ) -> Result<ExecutionResult, LedgerError> {
        let arguments: Vec<Value> = call.arguments.iter().map(|a| a.to_json()).collect();

        let built: TransactionBytes = self
            .submit(
                "unsafe_moveCall",
                json!([
                    signer.address(),
                    call.package,
                    call.module,
                    call.function,
                    [],
                    arguments,
                    Value::Null,
                    self.gas_budget.to_string(),
                ]),
            )
            .await?;

        let tx_bytes = STANDARD.decode(&built.tx_bytes)?;
        let signature = signer.sign_transaction(&tx_bytes);

        let block: TransactionBlock = self
            .submit(
                "sui_executeTransactionBlock",
                json!([
                    built.tx_bytes,
                    [signature],
                    { "showEffects": true },
                    "WaitForLocalExecution",
                ]),
            )
            .await?;

        if let Some(effects) = &block.effects {
            if !effects.status.is_success() {
                return Err(LedgerError::ExecutionFailed {
                    digest: block.digest,
                    error: effects
                        .status
                        .error
                        .clone()
                        .unwrap_or_else(|| effects.status.status.clone()),
                });
            }
        }

        tracing::info!(target_fn = %call.target(), digest = %block.digest, "Transaction executed");

        Ok(ExecutionResult {
            digest: block.digest,
        })
    }

    async fn wait_for_transaction(&self, digest: &str) -> Result<TransactionBlock, LedgerError> {
        let deadline = Instant::now() + Duration::from_millis(self.config.confirmation_timeout_ms);
        let poll = Duration::from_millis(self.config.poll_interval_ms);

        loop {
            let result = self
                .query::<TransactionBlock>(
                    "sui_getTransactionBlock",
                    json!([digest, { "showEffects": true, "showObjectChanges": true }]),
                )
                .await;

            match result {
                Ok(block) => return Ok(block),
                // Not indexed yet
                Err(LedgerError::Rpc { message, .. }) => {
                    tracing::debug!(digest, %message, "Transaction not yet visible");
                }
                Err(e) => return Err(e),
            }

            if Instant::now() + poll > deadline {
                return Err(LedgerError::ConfirmationTimeout(digest.to_string()));
            }
            tokio::time::sleep(poll).await;
        }
    }

    async fn get_object(&self, object_id: &str) -> Result<ObjectResponse, LedgerError> {
        self.query(
            "sui_getObject",
            json!([object_id, { "showContent": true, "showOwner": true, "showType": true }]),
        )
        .await
    }

    async fn chain_identifier(&self) -> Result<String, LedgerError> {
        self.query("sui_getChainIdentifier", json!([])).await
    }
}

// ============================================
// JSON-RPC envelope
// ============================================

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::CallArg;
    use crate::wallet::Wallet;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, request_timeout_ms: u64) -> SuiRpcClient {
        let config = NetworkConfig {
            rpc_url: server.uri(),
            request_timeout_ms,
            max_retries: 3,
            confirmation_timeout_ms: 200,
            poll_interval_ms: 10,
            ..Default::default()
        };
        SuiRpcClient::new(config, 1_000).unwrap()
    }

    fn rpc(name: &str) -> MockBuilder {
        Mock::given(method("POST")).and(body_partial_json(json!({ "method": name })))
    }

    fn rpc_result(result: Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({ "jsonrpc": "2.0", "id": 1, "result": result }))
    }

    fn rpc_error(message: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32602, "message": message }
        }))
    }

    fn link_call() -> MoveCall {
        MoveCall::new("0xpkg", "linktree_profile", "add_link")
            .arg(CallArg::object("0xprofile"))
            .arg(CallArg::pure("GitHub"))
            .arg(CallArg::pure("https://github.com/a"))
    }

    fn executed(status: Value) -> Value {
        json!({ "digest": "D1", "effects": { "status": status } })
    }

    #[tokio::test]
    async fn test_sign_and_execute() {
        let server = MockServer::start().await;
        let wallet = Wallet::from_secret([7u8; 32]);
        let tx_bytes = STANDARD.encode(b"tx-bytes");

        rpc("unsafe_moveCall")
            .respond_with(rpc_result(json!({ "txBytes": tx_bytes })))
            .expect(1)
            .mount(&server)
            .await;
        rpc("sui_executeTransactionBlock")
            .respond_with(rpc_result(executed(json!({ "status": "success" }))))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, 1_000);
        let result = client.sign_and_execute(&wallet, &link_call()).await.unwrap();
        assert_eq!(result.digest, "D1");

        let requests = server.received_requests().await.unwrap();
        let build: Value = requests[0].body_json().unwrap();
        assert_eq!(build["params"][0], wallet.address());
        assert_eq!(build["params"][3], "add_link");
        assert_eq!(build["params"][5], json!(["0xprofile", "GitHub", "https://github.com/a"]));

        let execute: Value = requests[1].body_json().unwrap();
        assert_eq!(execute["params"][0], tx_bytes);
        assert_eq!(execute["params"][1][0], wallet.sign_transaction(b"tx-bytes"));
    }

    #[tokio::test]
    async fn test_failed_effects() {
        let server = MockServer::start().await;
        let wallet = Wallet::from_secret([7u8; 32]);

        rpc("unsafe_moveCall")
            .respond_with(rpc_result(json!({ "txBytes": STANDARD.encode(b"tx") })))
            .mount(&server)
            .await;
        rpc("sui_executeTransactionBlock")
            .respond_with(rpc_result(executed(json!({ "status": "failure", "error": "MoveAbort(1)" }))))
            .mount(&server)
            .await;

        let client = client_for(&server, 1_000);
        let err = client.sign_and_execute(&wallet, &link_call()).await.unwrap_err();
        match err {
            LedgerError::ExecutionFailed { digest, error } => {
                assert_eq!(digest, "D1");
                assert_eq!(error, "MoveAbort(1)");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_slow_submission_sent_once() {
        let server = MockServer::start().await;
        let wallet = Wallet::from_secret([7u8; 32]);

        rpc("unsafe_moveCall")
            .respond_with(rpc_result(json!({ "txBytes": STANDARD.encode(b"tx") })))
            .expect(1)
            .mount(&server)
            .await;
        // Slower than request_timeout_ms
        rpc("sui_executeTransactionBlock")
            .respond_with(
                rpc_result(executed(json!({ "status": "success" })))
                    .set_delay(Duration::from_millis(300)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, 50);
        let result = client.sign_and_execute(&wallet, &link_call()).await.unwrap();
        assert_eq!(result.digest, "D1");
    }

    #[tokio::test]
    async fn test_submission_error_not_retried() {
        let server = MockServer::start().await;
        let wallet = Wallet::from_secret([7u8; 32]);

        rpc("unsafe_moveCall")
            .respond_with(rpc_result(json!({ "txBytes": STANDARD.encode(b"tx") })))
            .mount(&server)
            .await;
        rpc("sui_executeTransactionBlock")
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, 1_000);
        let err = client.sign_and_execute(&wallet, &link_call()).await.unwrap_err();
        assert!(matches!(err, LedgerError::Http { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_wait_polls_until_visible() {
        let server = MockServer::start().await;

        rpc("sui_getTransactionBlock")
            .respond_with(rpc_error("Could not find the referenced transaction"))
            .up_to_n_times(2)
            .with_priority(1)
            .expect(2)
            .mount(&server)
            .await;
        rpc("sui_getTransactionBlock")
            .respond_with(rpc_result(json!({
                "digest": "D1",
                "objectChanges": [{
                    "type": "created",
                    "objectType": "0xpkg::linktree_profile::LinkTreeProfile",
                    "objectId": "0xprofile"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, 1_000);
        let block = client.wait_for_transaction("D1").await.unwrap();
        assert_eq!(block.object_changes()[0].as_created().unwrap().0, "0xprofile");
    }

    #[tokio::test]
    async fn test_wait_gives_up() {
        let server = MockServer::start().await;

        rpc("sui_getTransactionBlock")
            .respond_with(rpc_error("Could not find the referenced transaction"))
            .mount(&server)
            .await;

        let client = client_for(&server, 1_000);
        let err = client.wait_for_transaction("D9").await.unwrap_err();
        assert!(matches!(err, LedgerError::ConfirmationTimeout(ref d) if d == "D9"));
    }

    #[tokio::test]
    async fn test_reads_are_bounded() {
        let server = MockServer::start().await;

        rpc("sui_getObject")
            .respond_with(rpc_result(json!({})).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let mut client = client_for(&server, 50);
        client.config.max_retries = 1;
        let err = client.get_object("0x1").await.unwrap_err();
        assert!(matches!(err, LedgerError::Timeout));
    }

    #[test]
    fn test_request_envelope() {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 7,
            method: "sui_getObject",
            params: json!(["0x1", { "showContent": true }]),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["id"], 7);
        assert_eq!(value["method"], "sui_getObject");
        assert_eq!(value["params"][0], "0x1");
    }

    #[test]
    fn test_error_envelope() {
        let response: RpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32602, "message": "Could not find the referenced transaction" }
        }))
        .unwrap();

        assert!(response.result.is_none());
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_unreachable_node() {
        let config = NetworkConfig {
            rpc_url: "http://127.0.0.1:9".to_string(),
            request_timeout_ms: 500,
            max_retries: 1,
            ..Default::default()
        };
        let client = SuiRpcClient::new(config, 1_000).unwrap();

        let err = client.chain_identifier().await.unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Unavailable | LedgerError::Timeout | LedgerError::Request(_)
        ));
    }
}
