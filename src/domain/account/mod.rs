//! Account - registration, login credentials and user records.

mod errors;
mod password;
mod registration;
mod user;

pub use errors::AccountError;
pub use password::{PasswordDigest, PasswordHashError};
pub use registration::{
    validate_age, Credentials, NewAccount, Registration, MAX_AGE, MIN_AGE, MIN_PASSWORD_LEN,
};
pub use user::{action_plan_or_empty, Family, NewFamily, User, UserCredentials};
