//! Transport abstraction over the backend API.
//!
//! The domain core never talks HTTP directly; it hands request bodies to
//! a [`Transport`] and classifies whatever comes back. Exactly one
//! attempt is made per call - retrying is a user action, not a transport
//! concern.

use async_trait::async_trait;
use serde_json::Value;

use aluma_core::Result;

/// HTTP methods the client uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A reply that made it back from the server, successful or not.
///
/// Non-2xx statuses are replies, not errors; classification into
/// outcomes happens in `aluma_core::funding::classify`. Only
/// network-level failures surface as `Err`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportReply {
    pub status: u16,
    pub body: Value,
}

/// Single-attempt request dispatch against the versioned API root.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request to `path` (relative to the API root) and
    /// returns the reply. `Err` means no reply was obtained at all.
    async fn send(&self, method: Method, path: &str, body: Option<Value>)
        -> Result<TransportReply>;
}
