//! Request-body error handling.
//!
//! Actix rejects unparsable JSON before a handler runs. [`json_config`]
//! replaces its default 400 response with the 200 failure envelope used by
//! every account endpoint.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

use super::envelope::FailureResponse;

/// Largest JSON body accepted by the account endpoints.
pub const MAX_JSON_BODY_BYTES: usize = 16 * 1024;

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejected request body");
    let body = FailureResponse::invalid_body(err.to_string());
    InternalError::from_response(err, HttpResponse::Ok().json(body)).into()
}

/// JSON extractor configuration for the account endpoints.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use accounts::inbound::http::error::json_config;
///
/// let _app = App::new().app_data(json_config());
/// ```
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(json_error_handler)
}
