//! User and family records.

use serde_json::Value;

use super::PasswordDigest;
use crate::domain::foundation::{AuthenticatedUser, FamilyId, Timestamp, UserId};

/// A user row. Family members added by someone else have no email and
/// cannot log in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub family_id: Option<FamilyId>,
    pub relationship: Option<String>,
    pub created_at: Timestamp,
}

impl User {
    /// Session identity for this user.
    pub fn to_authenticated(&self) -> AuthenticatedUser {
        AuthenticatedUser::new(self.id, self.name.clone(), self.email.clone().unwrap_or_default())
    }
}

/// A user together with the stored password digest, for login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub user: User,
    pub digest: PasswordDigest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub id: FamilyId,
    pub name: String,
    pub code: String,
    pub created_at: Timestamp,
}

/// A family about to be created alongside its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFamily {
    pub name: String,
    pub code: String,
}

impl NewFamily {
    /// `"Família {owner}"` with code `FAM{YYYYmmddHHMMSS}`.
    pub fn for_owner(owner_name: &str, now: Timestamp) -> Self {
        Self {
            name: format!("Família {}", owner_name),
            code: format!("FAM{}", now.compact_stamp()),
        }
    }
}

/// The free-form action plan stored on a user. Absent plans read as `{}`.
pub fn action_plan_or_empty(stored: Option<Value>) -> Value {
    match stored {
        Some(Value::Null) | None => Value::Object(Default::default()),
        Some(plan) => plan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn family_for_owner_uses_name_and_compact_stamp() {
        let now = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap());
        let family = NewFamily::for_owner("Maria", now);
        assert_eq!(family.name, "Família Maria");
        assert_eq!(family.code, "FAM20240309140507");
    }

    #[test]
    fn missing_action_plan_reads_as_empty_object() {
        assert_eq!(action_plan_or_empty(None), json!({}));
        assert_eq!(action_plan_or_empty(Some(Value::Null)), json!({}));
        assert_eq!(action_plan_or_empty(Some(json!({"meta": 1}))), json!({"meta": 1}));
    }

    #[test]
    fn member_without_email_authenticates_with_empty_email() {
        let user = User {
            id: UserId::from_i64(4),
            name: "Pedro".to_string(),
            email: None,
            age: Some(10),
            family_id: None,
            relationship: Some("Filho".to_string()),
            created_at: Timestamp::now(),
        };
        assert_eq!(user.to_authenticated().email, "");
    }
}
