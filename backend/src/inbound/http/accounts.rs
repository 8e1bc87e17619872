//! Account API handlers.
//!
//! ```text
//! POST /register {"name":"Ann","email":"ann@x.com","password":"pw1"}
//! POST /login {"email":"ann@x.com","password":"pw1"}
//! GET /users
//! ```
//!
//! All three answer with HTTP 200; see [`super::envelope`] for failures.

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{
    AccountProfile, AccountSummary, AccountValidationError, Error, LoginCredentials, Registration,
};
use crate::inbound::http::envelope::{Operation, failure};
use crate::inbound::http::state::HttpState;

/// Registration body for `POST /register`.
///
/// Missing fields are treated as empty and rejected by the presence checks.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    #[schema(example = "Ann")]
    pub name: Option<String>,
    #[schema(example = "ann@x.com")]
    pub email: Option<String>,
    #[schema(example = "pw1")]
    pub password: Option<String>,
}

impl TryFrom<RegisterRequest> for Registration {
    type Error = AccountValidationError;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.name.as_deref().unwrap_or_default(),
            value.email.as_deref().unwrap_or_default(),
            value.password.as_deref().unwrap_or_default(),
        )
    }
}

/// Login body for `POST /login`.
///
/// Both fields must be present; empty strings are passed through and fail at
/// lookup as an unknown email or a wrong password.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[schema(example = "ann@x.com")]
    pub email: Option<String>,
    #[schema(example = "pw1")]
    pub password: Option<String>,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = AccountValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        let email = value.email.ok_or(AccountValidationError::Missing("email"))?;
        let password = value
            .password
            .ok_or(AccountValidationError::Missing("password"))?;
        Ok(Self::new(email, password))
    }
}

/// Successful registration.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    #[schema(example = "User registered successfully!")]
    pub message: String,
}

/// Public identity of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfileBody {
    pub name: String,
    pub email: String,
}

impl From<AccountProfile> for UserProfileBody {
    fn from(value: AccountProfile) -> Self {
        Self {
            name: value.name.as_ref().to_owned(),
            email: value.email.as_ref().to_owned(),
        }
    }
}

/// Successful login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    #[schema(example = "Login successful!")]
    pub message: String,
    pub user: UserProfileBody,
}

/// One row of the account listing. Never carries a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryBody {
    pub name: String,
    pub email: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

impl From<AccountSummary> for UserSummaryBody {
    fn from(value: AccountSummary) -> Self {
        Self {
            name: value.name.as_ref().to_owned(),
            email: value.email.as_ref().to_owned(),
            created_at: value.created_at,
        }
    }
}

/// Account listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    pub success: bool,
    pub users: Vec<UserSummaryBody>,
}

fn map_validation_error(err: AccountValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({ "field": err.field() }))
}

/// Create an account.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created; failures return `FailureResponse` with `success: false`", body = RegisterResponse)
    ),
    tags = ["accounts"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> HttpResponse {
    let registration = match Registration::try_from(payload.into_inner()) {
        Ok(registration) => registration,
        Err(err) => return failure(Operation::Register, &map_validation_error(err)),
    };

    match state.registration.register(&registration).await {
        Ok(()) => HttpResponse::Ok().json(RegisterResponse {
            success: true,
            message: "User registered successfully!".to_owned(),
        }),
        Err(err) => failure(Operation::Register, &err),
    }
}

/// Check credentials and return the caller's profile.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted; failures return `FailureResponse` with `success: false`", body = LoginResponse)
    ),
    tags = ["accounts"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(state: web::Data<HttpState>, payload: web::Json<LoginRequest>) -> HttpResponse {
    let credentials = match LoginCredentials::try_from(payload.into_inner()) {
        Ok(credentials) => credentials,
        Err(err) => return failure(Operation::Login, &map_validation_error(err)),
    };

    match state.login.authenticate(&credentials).await {
        Ok(profile) => {
            info!(email = %profile.email, "login succeeded");
            HttpResponse::Ok().json(LoginResponse {
                success: true,
                message: "Login successful!".to_owned(),
                user: profile.into(),
            })
        }
        Err(err) => failure(Operation::Login, &err),
    }
}

/// List every account without passwords.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use accounts::inbound::http::accounts::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Accounts in store order; failures return `FailureResponse`", body = UsersResponse)
    ),
    tags = ["accounts"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> HttpResponse {
    match state.accounts.list_accounts().await {
        Ok(accounts) => HttpResponse::Ok().json(UsersResponse {
            success: true,
            users: accounts.into_iter().map(UserSummaryBody::from).collect(),
        }),
        Err(err) => failure(Operation::ListUsers, &err),
    }
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
