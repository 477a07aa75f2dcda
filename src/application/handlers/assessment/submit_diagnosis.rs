//! SubmitDiagnosisHandler - Command handler for scoring and storing a questionnaire.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::assessment::{AssessmentError, Classifier, Diagnosis, NewDiagnosis};
use crate::domain::family::same_family;
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{DiagnosisRepository, UserRepository};

/// Command to submit a set of answers.
#[derive(Debug, Clone)]
pub struct SubmitDiagnosisCommand {
    /// The logged-in user.
    pub actor: UserId,
    /// Family member being diagnosed. `None` diagnoses the actor.
    pub member: Option<UserId>,
    pub answers: Vec<Value>,
}

/// Result of a stored diagnosis.
#[derive(Debug, Clone)]
pub struct SubmitDiagnosisResult {
    pub diagnosis: Diagnosis,
    pub recommendations: Vec<String>,
}

/// Handler for submitting a diagnosis.
pub struct SubmitDiagnosisHandler {
    classifier: Arc<Classifier>,
    users: Arc<dyn UserRepository>,
    diagnoses: Arc<dyn DiagnosisRepository>,
}

impl SubmitDiagnosisHandler {
    pub fn new(
        classifier: Arc<Classifier>,
        users: Arc<dyn UserRepository>,
        diagnoses: Arc<dyn DiagnosisRepository>,
    ) -> Self {
        Self {
            classifier,
            users,
            diagnoses,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitDiagnosisCommand,
    ) -> Result<SubmitDiagnosisResult, AssessmentError> {
        // 1. Resolve the subject; members must share the actor's family
        let subject = match cmd.member {
            Some(member) if member != cmd.actor => {
                self.authorize_member(cmd.actor, member).await?;
                member
            }
            _ => cmd.actor,
        };

        // 2. Score and classify
        let (record, assessment) =
            NewDiagnosis::from_answers(&self.classifier, subject, cmd.answers)?;

        // 3. Persist
        let diagnosis = self.diagnoses.save(&record, Timestamp::now()).await?;

        tracing::info!(
            user_id = %subject,
            diagnosis_id = %diagnosis.id,
            score = diagnosis.score,
            level = diagnosis.classification.label(),
            "diagnosis recorded"
        );

        Ok(SubmitDiagnosisResult {
            diagnosis,
            recommendations: assessment.recommendations,
        })
    }

    async fn authorize_member(&self, actor: UserId, member: UserId) -> Result<(), AssessmentError> {
        let actor = self.users.find_by_id(actor).await?;
        let member = self.users.find_by_id(member).await?;
        match (actor, member) {
            (Some(a), Some(m)) if same_family(a.family_id, m.family_id) => Ok(()),
            _ => Err(AssessmentError::Forbidden),
        }
    }
}
