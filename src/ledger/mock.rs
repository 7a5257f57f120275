//! In-memory ledger used by unit tests

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

use super::{
    LedgerClient, LedgerError, MoveCall, ObjectChange, ObjectResponse, TransactionBlock,
    ExecutionResult,
};
use crate::wallet::TransactionSigner;

/// Records every call and answers from canned data
#[derive(Default)]
pub(crate) struct MockLedger {
    pub calls: Mutex<Vec<MoveCall>>,
    pub signers: Mutex<Vec<String>>,
    object_changes: Vec<ObjectChange>,
    failing_links: Vec<String>,
    fail_create: bool,
    objects: HashMap<String, ObjectResponse>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirmation reports a created object of the given type
    pub fn with_created(mut self, object_id: &str, object_type: &str) -> Self {
        self.object_changes.push(ObjectChange::Created {
            sender: "0x1".to_string(),
            owner: json!({ "AddressOwner": "0x1" }),
            object_type: object_type.to_string(),
            object_id: object_id.to_string(),
            version: "1".to_string(),
            digest: "objdigest".to_string(),
        });
        self
    }

    /// `add_link` calls carrying this label fail
    pub fn with_failing_link(mut self, label: &str) -> Self {
        self.failing_links.push(label.to_string());
        self
    }

    /// `create_profile` calls fail
    pub fn with_failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn with_object(mut self, object_id: &str, response: ObjectResponse) -> Self {
        self.objects.insert(object_id.to_string(), response);
        self
    }

    pub fn recorded_calls(&self) -> Vec<MoveCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    async fn sign_and_execute(
        &self,
        signer: &dyn TransactionSigner,
        call: &MoveCall,
    ) -> Result<ExecutionResult, LedgerError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(call.clone());
            calls.len()
        };
        self.signers.lock().unwrap().push(signer.address().to_string());

        if call.function == "create_profile" && self.fail_create {
            return Err(LedgerError::Rpc {
                code: -32002,
                message: "Insufficient gas".to_string(),
            });
        }

        if call.function == "add_link" {
            let label = call.arguments.get(1).map(|a| a.as_str()).unwrap_or_default();
            if self.failing_links.iter().any(|l| l == label) {
                return Err(LedgerError::ExecutionFailed {
                    digest: format!("digest-{}", index),
                    error: "MoveAbort".to_string(),
                });
            }
        }

        Ok(ExecutionResult {
            digest: format!("digest-{}", index),
        })
    }

    async fn wait_for_transaction(&self, digest: &str) -> Result<TransactionBlock, LedgerError> {
        Ok(TransactionBlock {
            digest: digest.to_string(),
            effects: None,
            object_changes: Some(self.object_changes.clone()),
        })
    }

    async fn get_object(&self, object_id: &str) -> Result<ObjectResponse, LedgerError> {
        Ok(self.objects.get(object_id).cloned().unwrap_or_else(|| ObjectResponse {
            data: None,
            error: Some(json!({ "code": "notExists", "object_id": object_id })),
        }))
    }

    async fn chain_identifier(&self) -> Result<String, LedgerError> {
        Ok("4c78adac".to_string())
    }
}

/// Object response carrying a Move struct with the given fields
pub(crate) fn move_object(object_id: &str, fields: Value) -> ObjectResponse {
    serde_json::from_value(json!({
        "data": {
            "objectId": object_id,
            "version": "3",
            "digest": "d",
            "type": "0x2::linktree_profile::LinkTreeProfile",
            "content": {
                "dataType": "moveObject",
                "type": "0x2::linktree_profile::LinkTreeProfile",
                "hasPublicTransfer": true,
                "fields": fields
            }
        }
    }))
    .unwrap()
}
