//! CORS policy for browser clients served from other origins.

use actix_cors::Cors;
use actix_web::http::{Method, header};
use tracing::debug;

use accounts::domain::TRACE_ID_HEADER;

const MAX_AGE_SECS: usize = 3600;

/// Build the CORS middleware.
///
/// `None` allows any origin; otherwise only the listed origins are accepted.
/// Only `GET` and `POST` with a `Content-Type` header are permitted, and the
/// `trace-id` response header is exposed to scripts.
pub fn build_cors(allowed_origins: Option<&[String]>) -> Cors {
    let mut cors = Cors::default();

    match allowed_origins {
        None => {
            cors = cors.allow_any_origin();
            debug!("CORS: allowing any origin");
        }
        Some(origins) => {
            for origin in origins {
                cors = cors.allowed_origin(origin);
            }
            debug!(?origins, "CORS: restricted origins");
        }
    }

    cors.allowed_methods([Method::GET, Method::POST])
        .allowed_header(header::CONTENT_TYPE)
        .expose_headers([header::HeaderName::from_static(TRACE_ID_HEADER)])
        .max_age(MAX_AGE_SECS)
}
