//! GetDashboardHandler - Query handler for a user's dashboard.

use std::sync::Arc;

use crate::domain::assessment::Classifier;
use crate::domain::dashboard::{compose_dashboard, Dashboard, DashboardError, DashboardInputs};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{DiagnosisRepository, FamilyReader, UserRepository};

#[derive(Debug, Clone, Copy)]
pub struct GetDashboardQuery {
    pub user_id: UserId,
    pub now: Timestamp,
}

pub struct GetDashboardHandler {
    classifier: Arc<Classifier>,
    users: Arc<dyn UserRepository>,
    diagnoses: Arc<dyn DiagnosisRepository>,
    families: Arc<dyn FamilyReader>,
    reevaluation_days: i64,
}

impl GetDashboardHandler {
    pub fn new(
        classifier: Arc<Classifier>,
        users: Arc<dyn UserRepository>,
        diagnoses: Arc<dyn DiagnosisRepository>,
        families: Arc<dyn FamilyReader>,
        reevaluation_days: i64,
    ) -> Self {
        Self {
            classifier,
            users,
            diagnoses,
            families,
            reevaluation_days,
        }
    }

    pub async fn handle(&self, query: GetDashboardQuery) -> Result<Dashboard, DashboardError> {
        let user = self
            .users
            .find_by_id(query.user_id)
            .await?
            .ok_or(DashboardError::UserNotFound(query.user_id))?;

        let latest = self.diagnoses.latest_for_user(user.id).await?;
        let history = self.diagnoses.history_for_user(user.id).await?;
        let family = match user.family_id {
            Some(family_id) => Some(self.families.members_with_latest(family_id).await?),
            None => None,
        };

        tracing::debug!(
            user_id = %user.id,
            family_id = ?user.family_id,
            history = history.len(),
            "composing dashboard"
        );

        Ok(compose_dashboard(
            DashboardInputs {
                user,
                latest,
                history,
                family,
            },
            &self.classifier,
            query.now,
            self.reevaluation_days,
        ))
    }
}
