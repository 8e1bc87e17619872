//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered accounts.
    ///
    /// `email` carries the `accounts_email_key` unique constraint; a violation
    /// on insert is how concurrent duplicate registrations are detected.
    accounts (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Display name, stored verbatim.
        name -> Text,
        /// Login identity, matched exactly.
        email -> Text,
        /// Plaintext password.
        password -> Text,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
