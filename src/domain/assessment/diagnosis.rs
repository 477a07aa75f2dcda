//! Diagnosis records.

use serde::Serialize;
use serde_json::Value;

use super::{Answer, Assessment, AssessmentError, Classification, Classifier};
use crate::domain::foundation::{DiagnosisId, Timestamp, UserId};

/// A diagnosis about to be stored.
///
/// Score and classification are always derived together by
/// [`NewDiagnosis::from_answers`], so the stored pair can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDiagnosis {
    user_id: UserId,
    score: i32,
    classification: Classification,
    raw_answers: Value,
}

impl NewDiagnosis {
    /// Scores `raw_answers` and returns the record with its assessment.
    pub fn from_answers(
        classifier: &Classifier,
        user_id: UserId,
        raw_answers: Vec<Value>,
    ) -> Result<(Self, Assessment), AssessmentError> {
        let answers = Answer::parse_all(&raw_answers)?;
        let assessment = classifier.diagnose(&answers)?;
        let record = Self {
            user_id,
            score: assessment.score,
            classification: assessment.classification,
            raw_answers: Value::Array(raw_answers),
        };
        Ok((record, assessment))
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// The submitted answers exactly as received.
    pub fn raw_answers(&self) -> &Value {
        &self.raw_answers
    }
}

/// A stored diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    pub id: DiagnosisId,
    pub user_id: UserId,
    pub score: i32,
    pub classification: Classification,
    pub raw_answers: Value,
    pub diagnosed_at: Timestamp,
}

impl Diagnosis {
    /// Reduces the record to its history-chart shape.
    pub fn snapshot(&self) -> DiagnosisSnapshot {
        DiagnosisSnapshot {
            score: self.score,
            classification: self.classification,
            diagnosed_at: self.diagnosed_at,
        }
    }
}

/// One point of a user's diagnosis history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiagnosisSnapshot {
    pub score: i32,
    pub classification: Classification,
    pub diagnosed_at: Timestamp,
}
