//! User account service: registration, login and listing over HTTP.
//!
//! Layout follows ports and adapters: [`domain`] holds the model, services
//! and ports; [`inbound`] adapts HTTP onto the driving ports; [`outbound`]
//! implements the account store.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
