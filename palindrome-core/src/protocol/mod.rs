//! JSON-RPC Protocol definitions
//!
//! Defines the communication protocol between clients and palindrome-server.

use serde::{Deserialize, Serialize};

/// Request from a client to palindrome-server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum Request {
    /// Check whether the input is a palindrome candidate
    #[serde(rename = "check")]
    Check { input: String },

    /// Run the workflow and return its message
    #[serde(rename = "execute")]
    Execute { input: String },

    /// Arrange the input's characters into a palindrome
    #[serde(rename = "arrange")]
    Arrange { input: String },

    /// Shutdown the server
    #[serde(rename = "shutdown")]
    Shutdown,
}

/// Response from palindrome-server to a client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Response {
    Check { candidate: bool },
    Execute { message: String },
    Arrange { palindrome: String },
    Success { ok: bool },
    Error { error: String },
}

impl Response {
    pub fn success() -> Self {
        Response::Success { ok: true }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Response::Error { error: msg.into() }
    }

    pub fn message(msg: impl Into<String>) -> Self {
        Response::Execute {
            message: msg.into(),
        }
    }
}

/// JSON-RPC message wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcMessage<T> {
    pub jsonrpc: String,
    pub id: Option<u64>,
    #[serde(flatten)]
    pub content: T,
}

impl<T> RpcMessage<T> {
    pub fn new(id: u64, content: T) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: Some(id),
            content,
        }
    }
}
