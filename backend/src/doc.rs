//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the account and health endpoints plus their request
//! and response schemas. Swagger UI serves it in debug builds, and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::domain::ErrorCode;
use crate::inbound::http::accounts::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfileBody,
    UserSummaryBody, UsersResponse,
};
use crate::inbound::http::envelope::FailureResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Management API",
        description = "Account registration, login and listing. Every account endpoint answers \
                       with HTTP 200 and reports its outcome in `success`."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::accounts::register,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::list_users,
        crate::inbound::http::health::index,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegisterRequest,
        RegisterResponse,
        LoginRequest,
        LoginResponse,
        UserProfileBody,
        UserSummaryBody,
        UsersResponse,
        FailureResponse,
        ErrorCode,
    )),
    tags(
        (name = "accounts", description = "Registration, login and listing"),
        (name = "health", description = "Banner and orchestration probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document.

    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn schema_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema for {name}"),
        }
    }

    #[rstest]
    #[case("/register")]
    #[case("/login")]
    #[case("/users")]
    #[case("/")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_endpoint_is_documented(#[case] path: &str) {
        assert!(ApiDoc::openapi().paths.paths.contains_key(path));
    }

    #[rstest]
    fn user_summary_never_documents_a_password() {
        let fields = schema_fields("UserSummaryBody");
        assert!(fields.iter().any(|field| field == "createdAt"));
        assert!(!fields.iter().any(|field| field == "password"));
    }

    #[rstest]
    fn failure_envelope_documents_code_and_trace_id() {
        let fields = schema_fields("FailureResponse");
        for expected in ["success", "code", "message", "error", "traceId"] {
            assert!(fields.iter().any(|field| field == expected), "missing {expected}");
        }
    }
}
