//! Staleness check for the most recent diagnosis.

use serde::Serialize;

use crate::domain::foundation::Timestamp;

/// Default age after which a re-evaluation is suggested.
pub const REEVALUATION_DAYS: i64 = 30;

/// A diagnosis timestamp as a store may hand it over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DiagnosisTime {
    Instant(Timestamp),
    Text(String),
}

impl DiagnosisTime {
    /// Resolves to an instant, parsing text if needed.
    pub fn resolve(&self) -> Option<Timestamp> {
        match self {
            DiagnosisTime::Instant(ts) => Some(*ts),
            DiagnosisTime::Text(raw) => Timestamp::parse_flexible(raw),
        }
    }
}

impl From<Timestamp> for DiagnosisTime {
    fn from(ts: Timestamp) -> Self {
        DiagnosisTime::Instant(ts)
    }
}

/// True when there is no diagnosis or the latest one is at least
/// [`REEVALUATION_DAYS`] old.
pub fn needs_reevaluation(latest: Option<&DiagnosisTime>, now: Timestamp) -> bool {
    needs_reevaluation_within(latest, now, REEVALUATION_DAYS)
}

/// Same as [`needs_reevaluation`] with an explicit window.
///
/// Age is counted in whole days. An unparseable timestamp is reported as
/// stale.
pub fn needs_reevaluation_within(
    latest: Option<&DiagnosisTime>,
    now: Timestamp,
    window_days: i64,
) -> bool {
    let Some(latest) = latest else {
        return true;
    };

    match latest.resolve() {
        Some(at) => now.duration_since(&at).num_days() >= window_days,
        None => {
            tracing::warn!(?latest, "unparseable diagnosis timestamp, suggesting re-evaluation");
            true
        }
    }
}
