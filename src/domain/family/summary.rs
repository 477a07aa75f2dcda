//! Family panorama: mean score, modal level and member snapshots.

use serde::Serialize;

use super::{FamilyMember, MemberSnapshot};
use crate::domain::assessment::Classification;
use crate::domain::foundation::rounded_mean;

/// Why a summary has the shape it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SummaryStatus {
    /// The user is not attached to a family.
    #[serde(rename = "sem_familia")]
    NoFamily,
    /// The family exists but has no members.
    #[serde(rename = "sem_membros")]
    NoMembers,
    #[serde(rename = "sucesso")]
    Success,
}

/// Derived family statistics. Recomputed per request, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilySummary {
    pub members: Vec<MemberSnapshot>,
    /// Mean over members whose latest score is > 0, one decimal.
    pub mean_score: f64,
    /// Most frequent level; `None` renders as "N/A".
    pub modal_classification: Option<Classification>,
    pub total_members: usize,
    /// Members that entered the mean.
    pub members_with_diagnosis: usize,
    pub status: SummaryStatus,
}

impl FamilySummary {
    fn empty(status: SummaryStatus) -> Self {
        Self {
            members: Vec::new(),
            mean_score: 0.0,
            modal_classification: None,
            total_members: 0,
            members_with_diagnosis: 0,
            status,
        }
    }
}

/// Summarizes a family. `None` means the user has no family association.
///
/// Never fails: missing data degrades to defaults.
pub fn summarize_family(members: Option<&[FamilyMember]>) -> FamilySummary {
    let members = match members {
        None => return FamilySummary::empty(SummaryStatus::NoFamily),
        Some([]) => return FamilySummary::empty(SummaryStatus::NoMembers),
        Some(members) => members,
    };

    let snapshots: Vec<MemberSnapshot> = members.iter().map(MemberSnapshot::from).collect();

    let valid_scores: Vec<i32> = members
        .iter()
        .filter_map(|m| m.latest_score)
        .filter(|score| *score > 0)
        .collect();

    let mean_score = rounded_mean(&valid_scores);
    let modal_classification = modal(members.iter().filter_map(|m| m.latest_classification));

    tracing::debug!(
        members = snapshots.len(),
        mean_score,
        modal = modal_classification.map(|c| c.label()).unwrap_or("N/A"),
        "family panorama computed"
    );

    FamilySummary {
        total_members: snapshots.len(),
        members_with_diagnosis: valid_scores.len(),
        members: snapshots,
        mean_score,
        modal_classification,
        status: SummaryStatus::Success,
    }
}

/// Most frequent level. Ties go to the level seen first.
fn modal(levels: impl Iterator<Item = Classification>) -> Option<Classification> {
    let mut counts: Vec<(Classification, usize)> = Vec::with_capacity(3);
    for level in levels {
        match counts.iter_mut().find(|(seen, _)| *seen == level) {
            Some((_, count)) => *count += 1,
            None => counts.push((level, 1)),
        }
    }

    let mut best: Option<(Classification, usize)> = None;
    for (level, count) in counts {
        if best.map(|(_, top)| count > top).unwrap_or(true) {
            best = Some((level, count));
        }
    }
    best.map(|(level, _)| level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn member(id: i64, score: Option<i32>, level: Option<Classification>) -> FamilyMember {
        FamilyMember {
            id: UserId::from_i64(id),
            name: format!("Membro {}", id),
            age: None,
            relationship: None,
            latest_score: score,
            latest_classification: level,
        }
    }

    #[test]
    fn no_family_yields_empty_summary() {
        let summary = summarize_family(None);
        assert!(summary.members.is_empty());
        assert_eq!(summary.mean_score, 0.0);
        assert_eq!(summary.modal_classification, None);
        assert_eq!(summary.total_members, 0);
        assert_eq!(summary.status, SummaryStatus::NoFamily);
    }

    #[test]
    fn empty_family_yields_empty_summary() {
        let summary = summarize_family(Some(&[]));
        assert_eq!(summary.total_members, 0);
        assert_eq!(summary.modal_classification, None);
        assert_eq!(summary.status, SummaryStatus::NoMembers);
    }

    #[test]
    fn mean_skips_zero_and_missing_scores() {
        let members = [
            member(1, Some(10), Some(Classification::NotDependent)),
            member(2, Some(20), Some(Classification::Moderate)),
            member(3, Some(0), Some(Classification::NotDependent)),
            member(4, None, None),
        ];
        let summary = summarize_family(Some(&members));

        assert_eq!(summary.mean_score, 15.0);
        assert_eq!(summary.total_members, 4);
        assert_eq!(summary.members_with_diagnosis, 2);
        assert_eq!(summary.members.len(), 4);
        assert_eq!(summary.members[3].score, 0);
        assert_eq!(summary.members[3].classification, None);
    }

    #[test]
    fn mean_rounds_exact_ties_to_even() {
        let members = [
            member(1, Some(10), Some(Classification::NotDependent)),
            member(2, Some(10), Some(Classification::NotDependent)),
            member(3, Some(10), Some(Classification::NotDependent)),
            member(4, Some(11), Some(Classification::NotDependent)),
        ];
        let summary = summarize_family(Some(&members));
        assert_eq!(summary.mean_score, 10.2);
    }

    #[test]
    fn modal_counts_levels_even_for_zero_scores() {
        let members = [
            member(1, Some(0), Some(Classification::NotDependent)),
            member(2, Some(0), Some(Classification::NotDependent)),
            member(3, Some(30), Some(Classification::Dependent)),
        ];
        let summary = summarize_family(Some(&members));
        assert_eq!(summary.modal_classification, Some(Classification::NotDependent));
    }

    #[test]
    fn modal_tie_goes_to_first_encountered() {
        let members = [
            member(1, Some(30), Some(Classification::Dependent)),
            member(2, Some(18), Some(Classification::Moderate)),
            member(3, Some(20), Some(Classification::Moderate)),
            member(4, Some(28), Some(Classification::Dependent)),
        ];
        let summary = summarize_family(Some(&members));
        assert_eq!(summary.modal_classification, Some(Classification::Dependent));
    }

    #[test]
    fn modal_prefers_strict_majority_over_order() {
        let members = [
            member(1, Some(30), Some(Classification::Dependent)),
            member(2, Some(18), Some(Classification::Moderate)),
            member(3, Some(20), Some(Classification::Moderate)),
        ];
        let summary = summarize_family(Some(&members));
        assert_eq!(summary.modal_classification, Some(Classification::Moderate));
    }

    #[test]
    fn family_without_diagnoses_has_no_modal() {
        let members = [member(1, None, None), member(2, None, None)];
        let summary = summarize_family(Some(&members));
        assert_eq!(summary.modal_classification, None);
        assert_eq!(summary.mean_score, 0.0);
        assert_eq!(summary.total_members, 2);
        assert_eq!(summary.status, SummaryStatus::Success);
    }
}
