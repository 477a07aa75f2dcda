//! In-memory store implementing every persistence port.
//!
//! Backs the `memory://` development database and the HTTP integration
//! tests. State lives behind a single `tokio::sync::RwLock`, so each port
//! call is atomic with respect to the others. Nothing survives a restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::domain::account::{Family, NewAccount, PasswordDigest, User, UserCredentials};
use crate::domain::assessment::{Diagnosis, DiagnosisSnapshot, NewDiagnosis, Question};
use crate::domain::directory::{Institution, NewInstitution, NewProfessional, Professional};
use crate::domain::family::{FamilyMember, NewFamilyMember};
use crate::domain::foundation::{
    DiagnosisId, DomainError, ErrorCode, FamilyId, InstitutionId, ProfessionalId, Timestamp, UserId,
};
use crate::domain::overview::PopulationRow;
use crate::domain::reflection::{Reflection, ReflectionSet};
use crate::ports::{
    DiagnosisRepository, FamilyReader, InstitutionRepository, PopulationReader,
    ProfessionalRepository, QuestionReader, ReflectionRepository, UserRepository,
};

struct UserRecord {
    user: User,
    digest: Option<PasswordDigest>,
    action_plan: Option<Value>,
}

#[derive(Default)]
struct State {
    users: BTreeMap<UserId, UserRecord>,
    families: BTreeMap<FamilyId, Family>,
    diagnoses: Vec<Diagnosis>,
    questions: Vec<Question>,
    reflections: Vec<Reflection>,
    institutions: BTreeMap<InstitutionId, Institution>,
    professionals: BTreeMap<ProfessionalId, Professional>,
    last_id: i64,
}

impl State {
    /// One counter shared by every table.
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn latest_for(&self, user_id: UserId) -> Option<&Diagnosis> {
        self.diagnoses
            .iter()
            .filter(|d| d.user_id == user_id)
            .max_by_key(|d| (d.diagnosed_at, d.id))
    }

    fn record_mut(&mut self, id: UserId) -> Result<&mut UserRecord, DomainError> {
        self.users.get_mut(&id).ok_or_else(|| user_not_found(id))
    }
}

fn user_not_found(id: UserId) -> DomainError {
    DomainError::new(ErrorCode::UserNotFound, format!("User {} not found", id))
}

/// Thread-safe in-memory implementation of the persistence ports.
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the questionnaire. Questions are served in id order.
    pub async fn seed_questions(&self, mut questions: Vec<Question>) {
        questions.sort_by_key(|q| q.id);
        for question in &mut questions {
            question.options.sort_by_key(|o| o.id);
        }
        self.state.write().await.questions = questions;
    }

    /// Number of stored diagnoses, across all users.
    pub async fn diagnosis_count(&self) -> usize {
        self.state.read().await.diagnoses.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_account(&self, account: &NewAccount) -> Result<(User, Family), DomainError> {
        let mut state = self.state.write().await;

        let taken = state
            .users
            .values()
            .any(|r| r.user.email.as_deref() == Some(account.email.as_str()));
        if taken {
            return Err(DomainError::new(ErrorCode::Conflict, "Email already registered"));
        }

        let now = Timestamp::now();
        let family = Family {
            id: FamilyId::from_i64(state.next_id()),
            name: account.family.name.clone(),
            code: account.family.code.clone(),
            created_at: now,
        };
        let user = User {
            id: UserId::from_i64(state.next_id()),
            name: account.name.clone(),
            email: Some(account.email.clone()),
            age: Some(account.age),
            family_id: Some(family.id),
            relationship: None,
            created_at: now,
        };

        state.families.insert(family.id, family.clone());
        state.users.insert(
            user.id,
            UserRecord {
                user: user.clone(),
                digest: Some(account.digest.clone()),
                action_plan: None,
            },
        );
        Ok((user, family))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.state.read().await.users.get(&id).map(|r| r.user.clone()))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.values().find_map(|r| {
            match (&r.digest, r.user.email.as_deref()) {
                (Some(digest), Some(stored)) if stored == email => Some(UserCredentials {
                    user: r.user.clone(),
                    digest: digest.clone(),
                }),
                _ => None,
            }
        }))
    }

    async fn add_family_member(&self, member: &NewFamilyMember) -> Result<User, DomainError> {
        let mut state = self.state.write().await;
        if !state.families.contains_key(&member.family_id) {
            return Err(DomainError::new(
                ErrorCode::FamilyNotFound,
                format!("Family {} not found", member.family_id),
            ));
        }

        let user = User {
            id: UserId::from_i64(state.next_id()),
            name: member.name.clone(),
            email: None,
            age: member.age,
            family_id: Some(member.family_id),
            relationship: member.relationship.clone(),
            created_at: Timestamp::now(),
        };
        state.users.insert(
            user.id,
            UserRecord {
                user: user.clone(),
                digest: None,
                action_plan: None,
            },
        );
        Ok(user)
    }

    async fn delete_with_history(&self, id: UserId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.users.remove(&id).is_none() {
            return Err(user_not_found(id));
        }
        state.diagnoses.retain(|d| d.user_id != id);
        state.reflections.retain(|r| r.user_id != id);
        Ok(())
    }

    async fn load_action_plan(&self, id: UserId) -> Result<Option<Value>, DomainError> {
        let state = self.state.read().await;
        state
            .users
            .get(&id)
            .map(|r| r.action_plan.clone())
            .ok_or_else(|| user_not_found(id))
    }

    async fn save_action_plan(&self, id: UserId, plan: &Value) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        state.record_mut(id)?.action_plan = Some(plan.clone());
        Ok(())
    }
}

#[async_trait]
impl DiagnosisRepository for InMemoryStore {
    async fn save(&self, diagnosis: &NewDiagnosis, at: Timestamp) -> Result<Diagnosis, DomainError> {
        let mut state = self.state.write().await;
        if !state.users.contains_key(&diagnosis.user_id()) {
            return Err(user_not_found(diagnosis.user_id()));
        }

        let stored = Diagnosis {
            id: DiagnosisId::from_i64(state.next_id()),
            user_id: diagnosis.user_id(),
            score: diagnosis.score(),
            classification: diagnosis.classification(),
            raw_answers: diagnosis.raw_answers().clone(),
            diagnosed_at: at,
        };
        state.diagnoses.push(stored.clone());
        Ok(stored)
    }

    async fn latest_for_user(&self, user_id: UserId) -> Result<Option<Diagnosis>, DomainError> {
        Ok(self.state.read().await.latest_for(user_id).cloned())
    }

    async fn history_for_user(&self, user_id: UserId) -> Result<Vec<DiagnosisSnapshot>, DomainError> {
        let state = self.state.read().await;
        let mut history: Vec<&Diagnosis> =
            state.diagnoses.iter().filter(|d| d.user_id == user_id).collect();
        history.sort_by_key(|d| (d.diagnosed_at, d.id));
        Ok(history.into_iter().map(Diagnosis::snapshot).collect())
    }
}

#[async_trait]
impl FamilyReader for InMemoryStore {
    async fn members_with_latest(&self, family_id: FamilyId) -> Result<Vec<FamilyMember>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .filter(|r| r.user.family_id == Some(family_id))
            .map(|r| {
                let latest = state.latest_for(r.user.id);
                FamilyMember {
                    id: r.user.id,
                    name: r.user.name.clone(),
                    age: r.user.age,
                    relationship: r.user.relationship.clone(),
                    latest_score: latest.map(|d| d.score),
                    latest_classification: latest.map(|d| d.classification),
                }
            })
            .collect())
    }
}

#[async_trait]
impl PopulationReader for InMemoryStore {
    async fn all_users_with_latest(&self) -> Result<Vec<PopulationRow>, DomainError> {
        let state = self.state.read().await;
        let mut rows: Vec<PopulationRow> = state
            .users
            .values()
            .map(|r| {
                let latest = state.latest_for(r.user.id);
                PopulationRow {
                    user_id: r.user.id,
                    name: r.user.name.clone(),
                    relationship: r.user.relationship.clone(),
                    family_id: r.user.family_id,
                    latest_score: latest.map(|d| d.score),
                    latest_classification: latest.map(|d| d.classification),
                    latest_at: latest.map(|d| d.diagnosed_at),
                }
            })
            .collect();
        // Families first in id order, unattached users last, then by name.
        rows.sort_by(|a, b| {
            (a.family_id.is_none(), a.family_id, &a.name)
                .cmp(&(b.family_id.is_none(), b.family_id, &b.name))
        });
        Ok(rows)
    }
}

#[async_trait]
impl QuestionReader for InMemoryStore {
    async fn list_questions(&self) -> Result<Vec<Question>, DomainError> {
        Ok(self.state.read().await.questions.clone())
    }
}

#[async_trait]
impl ReflectionRepository for InMemoryStore {
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Reflection>, DomainError> {
        let state = self.state.read().await;
        let mut reflections: Vec<Reflection> = state
            .reflections
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        reflections.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reflections)
    }

    async fn replace_all(
        &self,
        user_id: UserId,
        set: &ReflectionSet,
        at: Timestamp,
    ) -> Result<usize, DomainError> {
        let mut state = self.state.write().await;
        if !state.users.contains_key(&user_id) {
            return Err(user_not_found(user_id));
        }

        state.reflections.retain(|r| r.user_id != user_id);
        state
            .reflections
            .extend(set.entries().iter().map(|(prompt, answer)| Reflection {
                user_id,
                prompt: prompt.clone(),
                answer: answer.clone(),
                created_at: at,
            }));
        Ok(set.len())
    }
}

#[async_trait]
impl InstitutionRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Institution>, DomainError> {
        let mut institutions: Vec<Institution> =
            self.state.read().await.institutions.values().cloned().collect();
        institutions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(institutions)
    }

    async fn create(&self, institution: &NewInstitution, at: Timestamp) -> Result<Institution, DomainError> {
        let mut state = self.state.write().await;
        let stored = Institution {
            id: InstitutionId::from_i64(state.next_id()),
            name: institution.name.clone(),
            kind: institution.kind.clone(),
            address: institution.address.clone(),
            phone: institution.phone.clone(),
            email: institution.email.clone(),
            description: institution.description.clone(),
            specialties: institution.specialties.clone(),
            created_at: at,
        };
        state.institutions.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: InstitutionId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.institutions.remove(&id).is_none() {
            return Err(DomainError::new(
                ErrorCode::InstitutionNotFound,
                format!("Institution {} not found", id),
            ));
        }
        for professional in state.professionals.values_mut() {
            if professional.institution_id == Some(id) {
                professional.institution_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ProfessionalRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Professional>, DomainError> {
        let mut professionals: Vec<Professional> =
            self.state.read().await.professionals.values().cloned().collect();
        professionals.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(professionals)
    }

    async fn email_in_use(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .professionals
            .values()
            .any(|p| p.email.as_deref() == Some(email)))
    }

    async fn create(&self, professional: &NewProfessional, at: Timestamp) -> Result<Professional, DomainError> {
        let mut state = self.state.write().await;

        if let Some(email) = professional.email.as_deref() {
            if state.professionals.values().any(|p| p.email.as_deref() == Some(email)) {
                return Err(DomainError::new(ErrorCode::Conflict, "Professional email already registered"));
            }
        }
        if let Some(institution_id) = professional.institution_id {
            if !state.institutions.contains_key(&institution_id) {
                return Err(DomainError::new(
                    ErrorCode::ValidationFailed,
                    format!("Institution {} does not exist", institution_id),
                )
                .with_detail("field", "instituicao_id"));
            }
        }

        let stored = Professional {
            id: ProfessionalId::from_i64(state.next_id()),
            name: professional.name.clone(),
            profession: professional.profession.clone(),
            specialty: professional.specialty.clone(),
            phone: professional.phone.clone(),
            email: professional.email.clone(),
            institution_id: professional.institution_id,
            registration_number: professional.registration_number.clone(),
            approach: professional.approach.clone(),
            description: professional.description.clone(),
            registered_at: at,
        };
        state.professionals.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: ProfessionalId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.professionals.remove(&id).is_none() {
            return Err(DomainError::new(
                ErrorCode::ProfessionalNotFound,
                format!("Professional {} not found", id),
            ));
        }
        Ok(())
    }
}
