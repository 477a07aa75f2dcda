//! Family - members, their latest diagnoses and the family panorama.

mod errors;
mod member;
mod summary;

pub use errors::FamilyError;
pub use member::{FamilyMember, MemberSnapshot, NewFamilyMember, RELATIONSHIP_UNKNOWN};
pub use summary::{summarize_family, FamilySummary, SummaryStatus};

use crate::domain::foundation::FamilyId;

/// Two users share a family only when both are attached to the same one.
pub fn same_family(a: Option<FamilyId>, b: Option<FamilyId>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unattached_users_do_not_share_a_family() {
        assert!(!same_family(None, None));
        assert!(!same_family(Some(FamilyId::from_i64(1)), None));
    }

    #[test]
    fn matching_families_are_shared() {
        assert!(same_family(Some(FamilyId::from_i64(2)), Some(FamilyId::from_i64(2))));
        assert!(!same_family(Some(FamilyId::from_i64(2)), Some(FamilyId::from_i64(3))));
    }
}
