//! Account command handlers.

mod login;
mod register;

pub use login::{LoginCommand, LoginHandler};
pub use register::{RegisterCommand, RegisterHandler, RegisterResult};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{
        AccountError, Family, NewAccount, PasswordDigest, User, UserCredentials,
    };
    use crate::domain::family::NewFamilyMember;
    use crate::domain::foundation::{DomainError, FamilyId, Timestamp, UserId};
    use crate::ports::UserRepository;
    use async_trait::async_trait;
    use secrecy::SecretString;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    #[derive(Default)]
    struct MockUserRepository {
        accounts: Mutex<Vec<UserCredentials>>,
    }

    impl MockUserRepository {
        fn with_account(email: &str, password: &str) -> Self {
            let repo = Self::default();
            repo.accounts.lock().unwrap().push(UserCredentials {
                user: User {
                    id: UserId::from_i64(1),
                    name: "Ana".to_string(),
                    email: Some(email.to_string()),
                    age: Some(30),
                    family_id: Some(FamilyId::from_i64(1)),
                    relationship: None,
                    created_at: Timestamp::now(),
                },
                digest: PasswordDigest::derive(&SecretString::new(password.to_string())).unwrap(),
            });
            repo
        }

        fn count(&self) -> usize {
            self.accounts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create_account(&self, account: &NewAccount) -> Result<(User, Family), DomainError> {
            let mut accounts = self.accounts.lock().unwrap();
            let id = accounts.len() as i64 + 1;
            let family = Family {
                id: FamilyId::from_i64(id),
                name: account.family.name.clone(),
                code: account.family.code.clone(),
                created_at: Timestamp::now(),
            };
            let user = User {
                id: UserId::from_i64(id),
                name: account.name.clone(),
                email: Some(account.email.clone()),
                age: Some(account.age),
                family_id: Some(family.id),
                relationship: None,
                created_at: Timestamp::now(),
            };
            accounts.push(UserCredentials {
                user: user.clone(),
                digest: account.digest.clone(),
            });
            Ok((user, family))
        }

        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
            Ok(self
                .accounts
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.user.id == id)
                .map(|c| c.user.clone()))
        }

        async fn find_credentials_by_email(
            &self,
            email: &str,
        ) -> Result<Option<UserCredentials>, DomainError> {
            Ok(self
                .accounts
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.user.email.as_deref() == Some(email))
                .cloned())
        }

        async fn add_family_member(&self, _member: &NewFamilyMember) -> Result<User, DomainError> {
            unimplemented!()
        }

        async fn delete_with_history(&self, _id: UserId) -> Result<(), DomainError> {
            Ok(())
        }

        async fn load_action_plan(&self, _id: UserId) -> Result<Option<Value>, DomainError> {
            Ok(None)
        }

        async fn save_action_plan(&self, _id: UserId, _plan: &Value) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn register_cmd(email: &str, password: &str) -> RegisterCommand {
        RegisterCommand {
            name: Some("Maria".to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            age: Some(41),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // RegisterHandler
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn register_creates_user_with_family() {
        let repo = Arc::new(MockUserRepository::default());
        let handler = RegisterHandler::new(repo.clone());

        let result = handler.handle(register_cmd("maria@x.com", "segredo")).await.unwrap();

        assert_eq!(result.user.name, "Maria");
        assert_eq!(result.family.name, "Família Maria");
        assert!(result.family.code.starts_with("FAM"));
        assert_eq!(result.user.family_id, Some(result.family.id));
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn register_rejects_taken_email() {
        let repo = Arc::new(MockUserRepository::with_account("maria@x.com", "segredo"));
        let handler = RegisterHandler::new(repo.clone());

        let result = handler.handle(register_cmd("maria@x.com", "outrasenha")).await;

        assert!(matches!(result, Err(AccountError::EmailTaken)));
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let handler = RegisterHandler::new(Arc::new(MockUserRepository::default()));

        let result = handler.handle(register_cmd("maria@x.com", "123")).await;

        assert!(matches!(result, Err(AccountError::ValidationFailed { ref field, .. }) if field == "senha"));
    }

    #[tokio::test]
    async fn register_requires_age() {
        let handler = RegisterHandler::new(Arc::new(MockUserRepository::default()));
        let mut cmd = register_cmd("maria@x.com", "segredo");
        cmd.age = None;

        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(AccountError::ValidationFailed { ref field, .. }) if field == "idade"));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // LoginHandler
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn login_accepts_correct_password() {
        let handler = LoginHandler::new(Arc::new(MockUserRepository::with_account("ana@x.com", "segredo")));

        let user = handler
            .handle(LoginCommand {
                email: Some("ana@x.com".to_string()),
                password: Some("segredo".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(user.name, "Ana");
    }

    #[tokio::test]
    async fn login_rejects_wrong_password_and_unknown_email_alike() {
        let handler = LoginHandler::new(Arc::new(MockUserRepository::with_account("ana@x.com", "segredo")));

        let wrong_password = handler
            .handle(LoginCommand {
                email: Some("ana@x.com".to_string()),
                password: Some("errada".to_string()),
            })
            .await;
        let unknown_email = handler
            .handle(LoginCommand {
                email: Some("bia@x.com".to_string()),
                password: Some("segredo".to_string()),
            })
            .await;

        assert!(matches!(wrong_password, Err(AccountError::InvalidCredentials)));
        assert!(matches!(unknown_email, Err(AccountError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn login_requires_both_fields() {
        let handler = LoginHandler::new(Arc::new(MockUserRepository::default()));

        let result = handler.handle(LoginCommand::default()).await;

        assert!(matches!(result, Err(AccountError::ValidationFailed { .. })));
    }
}
