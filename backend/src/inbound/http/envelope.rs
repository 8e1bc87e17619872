//! JSON response envelopes.
//!
//! Every account endpoint answers with HTTP 200 and reports its outcome in the
//! `success` flag. Failures carry a fixed, operation-specific `message`, the
//! stable `code`, and, for unexpected failures, the underlying `error` text.

use actix_web::HttpResponse;
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TraceId};

/// Failure body shared by all account endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FailureResponse {
    /// Always `false`.
    #[schema(example = false)]
    pub success: bool,
    /// Stable machine-readable code.
    pub code: ErrorCode,
    /// Fixed message describing which operation failed and how.
    #[schema(example = "Registration failed!")]
    pub message: String,
    /// Underlying failure text, when the failure was unexpected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Correlation identifier, matching the `trace-id` response header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Which endpoint produced a failure; selects the client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Register,
    Login,
    ListUsers,
}

impl Operation {
    /// Message used when the failure has no dedicated wording.
    fn fallback_message(self) -> &'static str {
        match self {
            Self::Register => "Registration failed!",
            Self::Login => "Login failed!",
            Self::ListUsers => "Could not fetch users!",
        }
    }

    /// Dedicated wording for expected outcomes, which omit `error`.
    fn expected_message(self, code: ErrorCode) -> Option<&'static str> {
        match (self, code) {
            (Self::Register, ErrorCode::DuplicateEmail) => {
                Some("User with this email already exists!")
            }
            (Self::Login, ErrorCode::NotFound) => Some("User not found!"),
            (Self::Login, ErrorCode::WrongPassword) => Some("Incorrect password!"),
            _ => None,
        }
    }
}

impl FailureResponse {
    /// Shape a domain error for `operation`.
    pub fn for_operation(operation: Operation, err: &Error) -> Self {
        let trace_id = err
            .trace_id()
            .map(str::to_owned)
            .or_else(|| TraceId::current().map(|id| id.to_string()));

        let (message, error) = match operation.expected_message(err.code()) {
            Some(message) => (message, None),
            None => (operation.fallback_message(), Some(err.message().to_owned())),
        };

        Self {
            success: false,
            code: err.code(),
            message: message.to_owned(),
            error,
            trace_id,
        }
    }

    /// Failure for a body that could not be parsed as the expected JSON.
    pub fn invalid_body(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            code: ErrorCode::InvalidRequest,
            message: "Invalid request body!".to_owned(),
            error: Some(detail.into()),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }
}

/// Log `err` and render it as a 200 failure envelope.
pub fn failure(operation: Operation, err: &Error) -> HttpResponse {
    if err.code() == ErrorCode::StoreError {
        error!(?operation, code = ?err.code(), message = err.message(), "account store failure");
    } else {
        info!(?operation, code = ?err.code(), "request rejected");
    }
    HttpResponse::Ok().json(FailureResponse::for_operation(operation, err))
}
