//! User repository port.
//!
//! Covers registered accounts, family members created on someone's behalf
//! and the action plan stored on each user row.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::account::{Family, NewAccount, User, UserCredentials};
use crate::domain::family::NewFamilyMember;
use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the account's family and then the user, atomically.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the email is already registered
    /// - `DatabaseError` on persistence failure
    async fn create_account(&self, account: &NewAccount) -> Result<(User, Family), DomainError>;

    /// Find a user by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Find a registered user and their password digest by email.
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DomainError>;

    /// Inserts a member without credentials into an existing family.
    async fn add_family_member(&self, member: &NewFamilyMember) -> Result<User, DomainError>;

    /// Deletes a user with their diagnoses and reflections in one transaction.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user doesn't exist
    async fn delete_with_history(&self, id: UserId) -> Result<(), DomainError>;

    /// Returns the stored action plan, `None` when never saved.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user doesn't exist
    async fn load_action_plan(&self, id: UserId) -> Result<Option<Value>, DomainError>;

    /// Replaces the stored action plan.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user doesn't exist
    async fn save_action_plan(&self, id: UserId, plan: &Value) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
