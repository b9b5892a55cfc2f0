//! Login form state and validation.
//!
//! Both fields are required. Input consisting only of whitespace counts as
//! missing. Validation never stops at the first failure: [`LoginForm::validate`]
//! reports every field that is wrong so the form can flag them together.

use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Field of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    pub const ALL: [LoginField; 2] = [LoginField::Username, LoginField::Password];

    /// Form input name
    pub fn name(&self) -> &'static str {
        match self {
            LoginField::Username => "username",
            LoginField::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoginField::Username => "Username",
            LoginField::Password => "Password",
        }
    }
}

impl fmt::Display for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validation messages keyed by field, in field order
pub type FieldErrors = BTreeMap<LoginField, String>;

/// Credentials as typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password: String,
}

impl Account {
    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Username => &self.username,
            LoginField::Password => &self.password,
        }
    }

    fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Username => self.username = value,
            LoginField::Password => self.password = value,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    account: Account,
    errors: FieldErrors,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Messages currently shown next to the inputs
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: LoginField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Check one field value in isolation.
    pub fn validate_property(field: LoginField, value: &str) -> Option<String> {
        if value.trim().is_empty() {
            Some(format!("{} is required.", field.label()))
        } else {
            None
        }
    }

    /// Update a field and refresh its error entry. Other fields keep their
    /// current message.
    pub fn change(&mut self, field: LoginField, value: impl Into<String>) {
        let value = value.into();
        match Self::validate_property(field, &value) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
        self.account.set(field, value);
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors: FieldErrors = LoginField::ALL
            .into_iter()
            .filter_map(|field| {
                Self::validate_property(field, self.account.get(field))
                    .map(|message| (field, message))
            })
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Validate the whole form and keep the resulting messages.
    ///
    /// Returns the account when it is ready to be sent.
    pub fn submit(&mut self) -> Result<&Account, &FieldErrors> {
        match self.validate() {
            Ok(()) => {
                self.errors.clear();
                debug!(username = %self.account.username, "login form submitted");
                Ok(&self.account)
            }
            Err(errors) => {
                debug!(invalid = errors.len(), "login form rejected");
                self.errors = errors;
                Err(&self.errors)
            }
        }
    }
}
