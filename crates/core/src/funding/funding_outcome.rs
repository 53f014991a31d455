//! Classification of transport replies into user-facing outcomes.

use serde_json::Value;

/// Fallback shown when the server gives no usable message.
pub const GENERIC_REJECTION_MESSAGE: &str = "An error occurred";

/// Terminal result of a dispatched request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 2xx with a successful envelope; carries the envelope's `data`.
    Success(Value),
    /// HTTP 401. The session is no longer valid; the caller must clear
    /// stored credentials and send the user back to login.
    AuthExpired,
    /// Any other non-success reply, with the server's message when one
    /// was supplied.
    Rejected(String),
    /// No usable reply was obtained (unreachable host, timeout).
    TransportFailure(String),
}

impl Outcome {
    /// Wraps a network-level failure. Replies that did arrive go through
    /// [`classify`] instead.
    pub fn transport_failure(message: impl Into<String>) -> Self {
        Outcome::TransportFailure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// Maps an HTTP reply to an [`Outcome`].
///
/// The backend wraps every body in `{success, data?, message?}`; some
/// error paths nest the message under `error.message` instead, and both
/// spellings are honored. A 2xx reply whose envelope says
/// `success: false` is still a rejection.
pub fn classify(status: u16, body: &Value) -> Outcome {
    if status == 401 {
        return Outcome::AuthExpired;
    }

    let success_flag = body
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if (200..300).contains(&status) && success_flag {
        return Outcome::Success(body.get("data").cloned().unwrap_or(Value::Null));
    }

    Outcome::Rejected(rejection_message(body))
}

fn rejection_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| {
            body.get("error")
                .and_then(|error| error.get("message"))
                .and_then(Value::as_str)
        })
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_REJECTION_MESSAGE.to_string())
}
