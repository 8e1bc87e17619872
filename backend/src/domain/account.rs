//! Account aggregate and the projections handed back to callers.
//!
//! Only presence is validated: name, email and password must be non-empty.
//! Values are otherwise kept exactly as supplied, whitespace included, so
//! email uniqueness is an exact, case-sensitive match.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;
use zeroize::Zeroizing;

/// Validation errors raised while constructing account fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountValidationError {
    /// Name was empty.
    #[error("name must not be empty")]
    EmptyName,
    /// Email was empty.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
    /// A request field was absent altogether.
    #[error("{0} is required")]
    Missing(&'static str),
}

impl AccountValidationError {
    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyEmail => "email",
            Self::EmptyPassword => "password",
            Self::Missing(field) => field,
        }
    }
}

/// Surrogate storage identifier. Never exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name supplied at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountName(String);

impl AccountName {
    /// Validate and construct a name.
    pub fn new(name: impl Into<String>) -> Result<Self, AccountValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(AccountValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Email address acting as the account's unique key.
///
/// No format or case normalisation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an email key.
    pub fn new(email: impl Into<String>) -> Result<Self, AccountValidationError> {
        let email = email.into();
        if email.is_empty() {
            return Err(AccountValidationError::EmptyEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shared secret stored alongside the account.
///
/// Stored and compared as plain text; the buffer is zeroed on drop and the
/// value never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate and construct a password. Whitespace is preserved.
    pub fn new(password: impl Into<String>) -> Result<Self, AccountValidationError> {
        let password = password.into();
        if password.is_empty() {
            return Err(AccountValidationError::EmptyPassword);
        }
        Ok(Self(Zeroizing::new(password)))
    }

    /// Exact string comparison against a candidate secret.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_str() == candidate
    }

    /// Raw secret, for persistence adapters only.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// A persisted user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    name: AccountName,
    email: EmailAddress,
    password: Password,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Assemble an account from validated parts.
    pub fn new(
        id: AccountId,
        name: AccountName,
        email: EmailAddress,
        password: Password,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password,
            created_at,
        }
    }

    /// Storage identifier.
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Display name given at registration.
    pub fn name(&self) -> &AccountName {
        &self.name
    }

    /// Unique email key.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Stored secret.
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Creation time, fixed at registration.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Name and email view returned after a successful login.
    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    /// Password-free listing view.
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            name: self.name.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

/// Identity returned to an authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    pub name: AccountName,
    pub email: EmailAddress,
}

/// Listing projection of an account. Has no password field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub name: AccountName,
    pub email: EmailAddress,
    pub created_at: DateTime<Utc>,
}
