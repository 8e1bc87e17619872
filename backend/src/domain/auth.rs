//! Inbound command shapes for registration and login.
//!
//! Keep payload parsing outside the domain: registration input is
//! presence-checked on construction, login input is carried verbatim.

use zeroize::Zeroizing;

use super::account::{AccountName, AccountValidationError, EmailAddress, Password};

/// Validated registration input.
///
/// # Examples
/// ```
/// use accounts::domain::Registration;
///
/// let registration = Registration::try_from_parts("Ann", "ann@x.com", "pw1").unwrap();
/// assert_eq!(registration.email().as_ref(), "ann@x.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    name: AccountName,
    email: EmailAddress,
    password: Password,
}

impl Registration {
    /// Construct registration input from raw form values.
    ///
    /// Fields are checked in form order: name, email, password.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, AccountValidationError> {
        Ok(Self {
            name: AccountName::new(name)?,
            email: EmailAddress::new(email)?,
            password: Password::new(password)?,
        })
    }

    /// Display name to store.
    pub fn name(&self) -> &AccountName {
        &self.name
    }

    /// Unique email key to register.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Secret to store alongside the account.
    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// Login credentials exactly as the caller sent them.
///
/// Unlike registration there is no presence check: an empty email can match
/// no stored account and an empty password matches no stored secret, so the
/// lookup itself reports `NotFound` or `WrongPassword`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Wrap raw email/password inputs without validation.
    ///
    /// # Examples
    /// ```
    /// use accounts::domain::LoginCredentials;
    ///
    /// let credentials = LoginCredentials::new("ann@x.com", "");
    /// assert_eq!(credentials.password(), "");
    /// ```
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Email used for the exact-match lookup.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "ann@x.com", "pw", AccountValidationError::EmptyName)]
    #[case("Ann", "", "pw", AccountValidationError::EmptyEmail)]
    #[case("Ann", "ann@x.com", "", AccountValidationError::EmptyPassword)]
    #[case("", "", "", AccountValidationError::EmptyName)]
    fn invalid_registration(
        #[case] name: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: AccountValidationError,
    ) {
        let err = Registration::try_from_parts(name, email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn whitespace_registration_fields_are_kept() {
        let registration =
            Registration::try_from_parts(" ", "  ", " ").expect("whitespace is present");
        assert_eq!(registration.name().as_ref(), " ");
        assert_eq!(registration.email().as_ref(), "  ");
        assert!(registration.password().matches(" "));
    }

    #[rstest]
    #[case("", "pw")]
    #[case("ann@x.com", "")]
    #[case("", "")]
    fn empty_login_inputs_are_accepted(#[case] email: &str, #[case] password: &str) {
        let creds = LoginCredentials::new(email, password);
        assert_eq!(creds.email(), email);
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    fn credentials_keep_values_verbatim() {
        let creds = LoginCredentials::new("Ann@X.com", " pw ");
        assert_eq!(creds.email(), "Ann@X.com");
        assert_eq!(creds.password(), " pw ");
    }
}
