//! Assembles a user's dashboard from already-loaded data.

use crate::domain::account::User;
use crate::domain::assessment::{
    needs_reevaluation_within, Classification, Classifier, Diagnosis, DiagnosisSnapshot,
    DiagnosisTime,
};
use crate::domain::family::{summarize_family, FamilyMember, FamilySummary};
use crate::domain::foundation::Timestamp;

/// Everything the dashboard is built from.
#[derive(Debug, Clone)]
pub struct DashboardInputs {
    pub user: User,
    pub latest: Option<Diagnosis>,
    /// Ascending by timestamp.
    pub history: Vec<DiagnosisSnapshot>,
    /// `None` when the user has no family.
    pub family: Option<Vec<FamilyMember>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub user: User,
    pub latest: Option<Diagnosis>,
    pub history: Vec<DiagnosisSnapshot>,
    pub family_summary: FamilySummary,
    pub tip_of_the_day: String,
    pub needs_reevaluation: bool,
}

/// Builds the dashboard. Pure: `now` and the window are passed in.
pub fn compose_dashboard(
    inputs: DashboardInputs,
    classifier: &Classifier,
    now: Timestamp,
    reevaluation_days: i64,
) -> Dashboard {
    let level = inputs
        .latest
        .as_ref()
        .map(|d| d.classification)
        .unwrap_or(Classification::Moderate);
    let tip_of_the_day = classifier.tip_of_the_day(level, now.day_of_year()).to_string();

    let latest_time = inputs.latest.as_ref().map(|d| DiagnosisTime::from(d.diagnosed_at));
    let needs_reevaluation = needs_reevaluation_within(latest_time.as_ref(), now, reevaluation_days);

    let family_summary = summarize_family(inputs.family.as_deref());

    Dashboard {
        user: inputs.user,
        latest: inputs.latest,
        history: inputs.history,
        family_summary,
        tip_of_the_day,
        needs_reevaluation,
    }
}
