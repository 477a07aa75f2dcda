//! Population-wide aggregation behind the general evaluation page.

use crate::domain::assessment::{Classification, NOT_EVALUATED_LABEL, NO_LEVEL_LABEL};
use crate::domain::foundation::{percentage, rounded_mean, FamilyId, Timestamp, UserId};

/// Category shown for the requesting user.
pub const CURRENT_USER_CATEGORY: &str = "Você";

/// Category shown when a user has no relationship recorded.
pub const DEFAULT_CATEGORY: &str = "Usuário";

/// Chart colour for users without a diagnosis.
pub const NOT_EVALUATED_COLOUR: &str = "#6c757d";

/// One user with their latest diagnosis, as read from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationRow {
    pub user_id: UserId,
    pub name: String,
    pub relationship: Option<String>,
    pub family_id: Option<FamilyId>,
    pub latest_score: Option<i32>,
    pub latest_classification: Option<Classification>,
    pub latest_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopulationStats {
    pub total_users: usize,
    /// Users with a score, including a score of 0.
    pub total_evaluated: usize,
    pub percent_evaluated: f64,
    /// Mean over every present score.
    pub overall_mean: f64,
    /// Label of the most common evaluated level, or "N/A".
    pub most_common_level: &'static str,
}

/// One pie chart slice.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSlice {
    pub level: &'static str,
    pub count: usize,
    pub percent: f64,
    pub colour: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetail {
    pub display_name: String,
    pub category: String,
    pub score: Option<i32>,
    pub level: &'static str,
    pub diagnosed_at: Option<Timestamp>,
    pub is_current_user: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopulationOverview {
    pub stats: PopulationStats,
    pub slices: Vec<LevelSlice>,
    pub details: Vec<UserDetail>,
}

/// Fixed counting order. Ties for the most common level follow it.
const SLOTS: [Option<Classification>; 4] = [
    Some(Classification::NotDependent),
    Some(Classification::Moderate),
    Some(Classification::Dependent),
    None,
];

fn slot_label(slot: Option<Classification>) -> &'static str {
    slot.map(|c| c.label()).unwrap_or(NOT_EVALUATED_LABEL)
}

fn slot_colour(slot: Option<Classification>) -> &'static str {
    slot.map(|c| c.colour()).unwrap_or(NOT_EVALUATED_COLOUR)
}

/// Builds the overview from every user row. `current_user` marks the
/// requester's own row.
pub fn summarize_population(rows: &[PopulationRow], current_user: Option<UserId>) -> PopulationOverview {
    let total_users = rows.len();
    let scores: Vec<i32> = rows.iter().filter_map(|r| r.latest_score).collect();

    let mut counts = [0usize; SLOTS.len()];
    for row in rows {
        let slot = SLOTS
            .iter()
            .position(|s| *s == row.latest_classification)
            .unwrap_or(SLOTS.len() - 1);
        counts[slot] += 1;
    }

    // Strictly greater keeps the earliest slot on ties.
    let mut most_common_level = NO_LEVEL_LABEL;
    let mut top = 0;
    for (slot, count) in SLOTS.iter().zip(counts.iter()).take(3) {
        if *count > top {
            top = *count;
            most_common_level = slot_label(*slot);
        }
    }

    let mut slices: Vec<LevelSlice> = SLOTS
        .iter()
        .zip(counts.iter())
        .filter(|(_, count)| **count > 0)
        .map(|(slot, count)| LevelSlice {
            level: slot_label(*slot),
            count: *count,
            percent: percentage(*count, total_users),
            colour: slot_colour(*slot),
        })
        .collect();
    slices.sort_by(|a, b| b.count.cmp(&a.count));

    let details = rows
        .iter()
        .map(|row| {
            let is_current_user = current_user == Some(row.user_id);
            let category = if is_current_user {
                CURRENT_USER_CATEGORY.to_string()
            } else {
                row.relationship
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
            };
            let family = row
                .family_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            UserDetail {
                display_name: format!("{} (Família {})", row.name, family),
                category,
                score: row.latest_score,
                level: slot_label(row.latest_classification),
                diagnosed_at: row.latest_at,
                is_current_user,
            }
        })
        .collect();

    let stats = PopulationStats {
        total_users,
        total_evaluated: scores.len(),
        percent_evaluated: percentage(scores.len(), total_users),
        overall_mean: rounded_mean(&scores),
        most_common_level,
    };

    tracing::debug!(
        total_users = stats.total_users,
        total_evaluated = stats.total_evaluated,
        overall_mean = stats.overall_mean,
        "population overview computed"
    );

    PopulationOverview {
        stats,
        slices,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, score: Option<i32>, level: Option<Classification>) -> PopulationRow {
        PopulationRow {
            user_id: UserId::from_i64(id),
            name: format!("Pessoa {}", id),
            relationship: None,
            family_id: Some(FamilyId::from_i64(1)),
            latest_score: score,
            latest_classification: level,
            latest_at: score.map(|_| Timestamp::now()),
        }
    }

    #[test]
    fn empty_population_has_neutral_stats() {
        let overview = summarize_population(&[], None);
        assert_eq!(overview.stats.total_users, 0);
        assert_eq!(overview.stats.percent_evaluated, 0.0);
        assert_eq!(overview.stats.overall_mean, 0.0);
        assert_eq!(overview.stats.most_common_level, "N/A");
        assert!(overview.slices.is_empty());
        assert!(overview.details.is_empty());
    }

    #[test]
    fn zero_scores_count_as_evaluated_and_enter_the_mean() {
        let rows = [
            row(1, Some(0), Some(Classification::NotDependent)),
            row(2, Some(20), Some(Classification::Moderate)),
            row(3, None, None),
        ];
        let overview = summarize_population(&rows, None);

        assert_eq!(overview.stats.total_evaluated, 2);
        assert_eq!(overview.stats.overall_mean, 10.0);
        assert_eq!(overview.stats.percent_evaluated, 66.7);
    }

    #[test]
    fn most_common_level_ties_follow_fixed_order() {
        let rows = [
            row(1, Some(30), Some(Classification::Dependent)),
            row(2, Some(18), Some(Classification::Moderate)),
        ];
        let overview = summarize_population(&rows, None);
        assert_eq!(overview.stats.most_common_level, "Moderado");
    }

    #[test]
    fn not_evaluated_never_wins_most_common() {
        let rows = [
            row(1, None, None),
            row(2, None, None),
            row(3, Some(30), Some(Classification::Dependent)),
        ];
        let overview = summarize_population(&rows, None);
        assert_eq!(overview.stats.most_common_level, "Dependente");
    }

    #[test]
    fn slices_are_sorted_by_count_and_skip_empty_levels() {
        let rows = [
            row(1, Some(30), Some(Classification::Dependent)),
            row(2, None, None),
            row(3, None, None),
            row(4, Some(5), Some(Classification::NotDependent)),
        ];
        let overview = summarize_population(&rows, None);

        let levels: Vec<_> = overview.slices.iter().map(|s| s.level).collect();
        assert_eq!(levels, vec!["Não avaliado", "Não dependente", "Dependente"]);
        assert_eq!(overview.slices[0].colour, "#6c757d");
        assert_eq!(overview.slices[0].percent, 50.0);
        assert_eq!(overview.slices[1].colour, "#28a745");
    }

    #[test]
    fn details_mark_the_requesting_user() {
        let mut other = row(2, None, None);
        other.relationship = Some("Filho".to_string());
        let rows = [row(1, Some(12), Some(Classification::NotDependent)), other, row(3, None, None)];

        let overview = summarize_population(&rows, Some(UserId::from_i64(1)));

        assert_eq!(overview.details[0].category, "Você");
        assert!(overview.details[0].is_current_user);
        assert_eq!(overview.details[0].display_name, "Pessoa 1 (Família 1)");
        assert_eq!(overview.details[1].category, "Filho");
        assert_eq!(overview.details[1].level, "Não avaliado");
        assert_eq!(overview.details[2].category, "Usuário");
    }
}
