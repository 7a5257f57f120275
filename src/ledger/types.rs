//! Ledger Wire Types
//!
//! Move call descriptions sent to the node and the subset of the
//! node's JSON-RPC responses this client reads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single argument to a Move entry function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    /// Pure value, passed as its string form
    Pure(String),
    /// Object reference by id
    Object(String),
}

impl CallArg {
    pub fn pure(value: impl Into<String>) -> Self {
        CallArg::Pure(value.into())
    }

    pub fn object(id: impl Into<String>) -> Self {
        CallArg::Object(id.into())
    }

    /// Value as the node's move call builder expects it
    pub fn to_json(&self) -> Value {
        match self {
            CallArg::Pure(value) => Value::String(value.clone()),
            CallArg::Object(id) => Value::String(id.clone()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CallArg::Pure(value) | CallArg::Object(value) => value,
        }
    }
}

/// A call to a published Move entry function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCall {
    pub package: String,
    pub module: String,
    pub function: String,
    pub arguments: Vec<CallArg>,
}

impl MoveCall {
    pub fn new(
        package: impl Into<String>,
        module: impl Into<String>,
        function: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            module: module.into(),
            function: function.into(),
            arguments: Vec::new(),
        }
    }

    /// Append an argument
    pub fn arg(mut self, arg: CallArg) -> Self {
        self.arguments.push(arg);
        self
    }

    /// Fully qualified `package::module::function`
    pub fn target(&self) -> String {
        format!("{}::{}::{}", self.package, self.module, self.function)
    }
}

/// Result of submitting a signed transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    pub digest: String,
}

/// Transaction bytes built by the node for a move call
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBytes {
    pub tx_bytes: String,
}

/// Transaction as reported by the node
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlock {
    pub digest: String,
    #[serde(default)]
    pub effects: Option<TransactionEffects>,
    #[serde(default)]
    pub object_changes: Option<Vec<ObjectChange>>,
}

impl TransactionBlock {
    /// Object changes, empty when the node did not report any
    pub fn object_changes(&self) -> &[ObjectChange] {
        self.object_changes.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransactionEffects {
    pub status: ExecutionStatus,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExecutionStatus {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl ExecutionStatus {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Descriptor of an object touched by a transaction
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ObjectChange {
    Created {
        #[serde(default)]
        sender: String,
        #[serde(default)]
        owner: Value,
        object_type: String,
        object_id: String,
        #[serde(default)]
        version: String,
        #[serde(default)]
        digest: String,
    },
    Mutated {
        #[serde(default)]
        sender: String,
        #[serde(default)]
        owner: Value,
        object_type: String,
        object_id: String,
        #[serde(default)]
        version: String,
    },
    Transferred {
        #[serde(default)]
        sender: String,
        #[serde(default)]
        recipient: Value,
        object_type: String,
        object_id: String,
    },
    Published {
        package_id: String,
        #[serde(default)]
        modules: Vec<String>,
    },
    Deleted {
        object_type: String,
        object_id: String,
    },
    Wrapped {
        object_type: String,
        object_id: String,
    },
    #[serde(other)]
    Unknown,
}

impl ObjectChange {
    /// Object id and type when this describes a newly created object
    pub fn as_created(&self) -> Option<(&str, &str)> {
        match self {
            ObjectChange::Created {
                object_id,
                object_type,
                ..
            } => Some((object_id, object_type)),
            _ => None,
        }
    }
}

/// Response of `sui_getObject`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ObjectResponse {
    #[serde(default)]
    pub data: Option<ObjectData>,
    #[serde(default)]
    pub error: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectData {
    pub object_id: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub digest: String,
    #[serde(default, rename = "type")]
    pub object_type: Option<String>,
    #[serde(default)]
    pub owner: Option<Value>,
    #[serde(default)]
    pub content: Option<ParsedContent>,
}

/// Parsed object content
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "dataType", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ParsedContent {
    MoveObject {
        #[serde(default, rename = "type")]
        object_type: String,
        #[serde(default)]
        has_public_transfer: bool,
        #[serde(default)]
        fields: Value,
    },
    Package {
        #[serde(default)]
        disassembled: Value,
    },
    #[serde(other)]
    Unknown,
}
