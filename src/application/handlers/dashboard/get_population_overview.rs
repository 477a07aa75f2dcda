//! GetPopulationOverviewHandler - Query handler for the general evaluation page.

use std::sync::Arc;

use crate::domain::dashboard::DashboardError;
use crate::domain::foundation::UserId;
use crate::domain::overview::{summarize_population, PopulationOverview};
use crate::ports::PopulationReader;

pub struct GetPopulationOverviewHandler {
    reader: Arc<dyn PopulationReader>,
}

impl GetPopulationOverviewHandler {
    pub fn new(reader: Arc<dyn PopulationReader>) -> Self {
        Self { reader }
    }

    /// `current_user` marks the requester's row, when logged in.
    pub async fn handle(&self, current_user: Option<UserId>) -> Result<PopulationOverview, DashboardError> {
        let rows = self.reader.all_users_with_latest().await?;
        Ok(summarize_population(&rows, current_user))
    }
}
