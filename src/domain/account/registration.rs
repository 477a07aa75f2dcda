//! Registration and login input rules.

use secrecy::SecretString;

use super::{NewFamily, PasswordDigest, PasswordHashError};
use crate::domain::foundation::{Timestamp, ValidationError};

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Accepted age range for any person record.
pub const MIN_AGE: i32 = 0;
pub const MAX_AGE: i32 = 150;

fn required(field: &str, value: Option<&str>) -> Result<String, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ValidationError::empty_field(field)),
    }
}

/// Checks an optional age against the accepted range.
pub fn validate_age(age: Option<i32>) -> Result<Option<i32>, ValidationError> {
    match age {
        Some(a) if !(MIN_AGE..=MAX_AGE).contains(&a) => {
            Err(ValidationError::out_of_range("idade", MIN_AGE, MAX_AGE, a))
        }
        other => Ok(other),
    }
}

/// A validated sign-up request.
#[derive(Debug)]
pub struct Registration {
    name: String,
    email: String,
    password: SecretString,
    age: i32,
}

impl Registration {
    /// All four fields are required. An age of 0 counts as missing.
    pub fn new(
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        age: Option<i32>,
    ) -> Result<Self, ValidationError> {
        let name = required("nome", name)?;
        let email = required("email", email)?;
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing '@'"));
        }
        let password = match password {
            Some(p) if !p.is_empty() => p,
            _ => return Err(ValidationError::empty_field("senha")),
        };
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::too_short("senha", MIN_PASSWORD_LEN));
        }
        let age = match validate_age(age)? {
            Some(a) if a > 0 => a,
            _ => return Err(ValidationError::empty_field("idade")),
        };

        Ok(Self {
            name,
            email,
            password: SecretString::new(password.to_string()),
            age,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    /// Hashes the password and prepares the owner's family.
    pub fn into_account(self, now: Timestamp) -> Result<NewAccount, PasswordHashError> {
        Ok(NewAccount {
            family: NewFamily::for_owner(&self.name, now),
            digest: PasswordDigest::derive(&self.password)?,
            name: self.name,
            email: self.email,
            age: self.age,
        })
    }
}

/// Everything needed to insert a registered user and their family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub digest: PasswordDigest,
    pub family: NewFamily,
}

/// Login input. Both fields are required.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: Option<&str>, password: Option<&str>) -> Result<Self, ValidationError> {
        let email = required("email", email)?;
        let password = match password {
            Some(p) if !p.is_empty() => p,
            _ => return Err(ValidationError::empty_field("senha")),
        };
        Ok(Self {
            email,
            password: SecretString::new(password.to_string()),
        })
    }

    pub fn matches(&self, digest: &PasswordDigest) -> bool {
        digest.verify(&self.password)
    }
}
