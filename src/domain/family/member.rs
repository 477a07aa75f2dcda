//! Family member rows and their display snapshots.

use crate::domain::assessment::Classification;
use crate::domain::foundation::{FamilyId, UserId};

/// Display placeholder for a missing relationship.
pub const RELATIONSHIP_UNKNOWN: &str = "Não informado";

/// A family member together with their latest diagnosis, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyMember {
    pub id: UserId,
    pub name: String,
    pub age: Option<i32>,
    pub relationship: Option<String>,
    pub latest_score: Option<i32>,
    pub latest_classification: Option<Classification>,
}

/// How a member appears in the family panorama.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSnapshot {
    pub id: UserId,
    pub name: String,
    pub age: Option<i32>,
    pub relationship: String,
    /// Latest score, 0 when never diagnosed.
    pub score: i32,
    /// Latest level, `None` renders as "Não avaliado".
    pub classification: Option<Classification>,
    /// True whenever a score exists, even a score of 0.
    pub has_diagnosis: bool,
}

impl From<&FamilyMember> for MemberSnapshot {
    fn from(member: &FamilyMember) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            age: member.age,
            relationship: member
                .relationship
                .clone()
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| RELATIONSHIP_UNKNOWN.to_string()),
            score: member.latest_score.unwrap_or(0),
            classification: member.latest_classification,
            has_diagnosis: member.latest_score.is_some(),
        }
    }
}

/// A new member to attach to the caller's family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFamilyMember {
    pub family_id: FamilyId,
    pub name: String,
    pub age: Option<i32>,
    pub relationship: Option<String>,
}
