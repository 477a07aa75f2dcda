//! GetTipOfTheDayHandler - Query handler for the daily tip.
//!
//! Never fails: a store error falls back to a fixed message.

use std::sync::Arc;

use crate::domain::assessment::{Classification, Classifier};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::DiagnosisRepository;

/// Served when the latest diagnosis cannot be read.
pub const FALLBACK_TIP: &str = "Mantenha o equilíbrio entre vida online e offline!";

#[derive(Debug, Clone, Copy)]
pub struct GetTipOfTheDayQuery {
    /// `None` for anonymous visitors.
    pub user_id: Option<UserId>,
    pub now: Timestamp,
}

pub struct GetTipOfTheDayHandler {
    classifier: Arc<Classifier>,
    diagnoses: Arc<dyn DiagnosisRepository>,
}

impl GetTipOfTheDayHandler {
    pub fn new(classifier: Arc<Classifier>, diagnoses: Arc<dyn DiagnosisRepository>) -> Self {
        Self {
            classifier,
            diagnoses,
        }
    }

    pub async fn handle(&self, query: GetTipOfTheDayQuery) -> String {
        let level = match query.user_id {
            None => Classification::Moderate,
            Some(user_id) => match self.diagnoses.latest_for_user(user_id).await {
                Ok(latest) => latest
                    .map(|d| d.classification)
                    .unwrap_or(Classification::Moderate),
                Err(e) => {
                    tracing::warn!(%user_id, error = %e, "could not load latest diagnosis for tip");
                    return FALLBACK_TIP.to_string();
                }
            },
        };

        self.classifier
            .tip_of_the_day(level, query.now.day_of_year())
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{Diagnosis, DiagnosisSnapshot, NewDiagnosis};
    use crate::domain::foundation::{DiagnosisId, DomainError, ErrorCode};
    use async_trait::async_trait;
    use serde_json::json;

    struct MockDiagnosisRepository {
        latest: Option<Diagnosis>,
        fail: bool,
    }

    #[async_trait]
    impl DiagnosisRepository for MockDiagnosisRepository {
        async fn save(&self, _d: &NewDiagnosis, _at: Timestamp) -> Result<Diagnosis, DomainError> {
            unimplemented!()
        }

        async fn latest_for_user(&self, _user_id: UserId) -> Result<Option<Diagnosis>, DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated failure"));
            }
            Ok(self.latest.clone())
        }

        async fn history_for_user(&self, _user_id: UserId) -> Result<Vec<DiagnosisSnapshot>, DomainError> {
            Ok(vec![])
        }
    }

    fn handler(latest: Option<Diagnosis>, fail: bool) -> GetTipOfTheDayHandler {
        GetTipOfTheDayHandler::new(
            Arc::new(Classifier::default()),
            Arc::new(MockDiagnosisRepository { latest, fail }),
        )
    }

    #[tokio::test]
    async fn anonymous_visitor_gets_moderate_tip() {
        let now = Timestamp::now();
        let tip = handler(None, false)
            .handle(GetTipOfTheDayQuery { user_id: None, now })
            .await;

        let expected = Classifier::default()
            .tip_of_the_day(Classification::Moderate, now.day_of_year())
            .to_string();
        assert_eq!(tip, expected);
    }

    #[tokio::test]
    async fn tip_follows_latest_level() {
        let now = Timestamp::now();
        let latest = Diagnosis {
            id: DiagnosisId::from_i64(1),
            user_id: UserId::from_i64(1),
            score: 30,
            classification: Classification::Dependent,
            raw_answers: json!([]),
            diagnosed_at: now,
        };
        let tip = handler(Some(latest), false)
            .handle(GetTipOfTheDayQuery {
                user_id: Some(UserId::from_i64(1)),
                now,
            })
            .await;

        let expected = Classifier::default()
            .tip_of_the_day(Classification::Dependent, now.day_of_year())
            .to_string();
        assert_eq!(tip, expected);
    }

    #[tokio::test]
    async fn store_failure_serves_fallback() {
        let tip = handler(None, true)
            .handle(GetTipOfTheDayQuery {
                user_id: Some(UserId::from_i64(1)),
                now: Timestamp::now(),
            })
            .await;
        assert_eq!(tip, FALLBACK_TIP);
    }
}
