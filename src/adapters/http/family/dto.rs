//! HTTP DTOs for family endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::dto::lenient_i32;
use crate::domain::assessment::{NOT_EVALUATED_LABEL, NO_LEVEL_LABEL};
use crate::domain::family::{FamilySummary, MemberSnapshot, SummaryStatus};
use crate::domain::foundation::UserId;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddMemberRequest {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub idade: Option<i32>,
    #[serde(default)]
    pub relacionamento: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct MemberView {
    pub id: UserId,
    pub nome: String,
    pub idade: Option<i32>,
    pub relacionamento: String,
    /// 0 when the member was never diagnosed.
    pub pontuacao: i32,
    pub nivel: &'static str,
    pub tem_diagnostico: bool,
}

impl From<MemberSnapshot> for MemberView {
    fn from(member: MemberSnapshot) -> Self {
        Self {
            id: member.id,
            nome: member.name,
            idade: member.age,
            relacionamento: member.relationship,
            pontuacao: member.score,
            nivel: member
                .classification
                .map(|c| c.label())
                .unwrap_or(NOT_EVALUATED_LABEL),
            tem_diagnostico: member.has_diagnosis,
        }
    }
}

/// The family panorama.
#[derive(Debug, Clone, Serialize)]
pub struct FamilySummaryView {
    pub membros: Vec<MemberView>,
    pub media_pontuacao: f64,
    pub nivel_predominante: &'static str,
    pub total_membros: usize,
    pub membros_com_diagnostico: usize,
    pub status: SummaryStatus,
}

impl From<FamilySummary> for FamilySummaryView {
    fn from(summary: FamilySummary) -> Self {
        Self {
            membros: summary.members.into_iter().map(MemberView::from).collect(),
            media_pontuacao: summary.mean_score,
            nivel_predominante: summary
                .modal_classification
                .map(|c| c.label())
                .unwrap_or(NO_LEVEL_LABEL),
            total_membros: summary.total_members,
            membros_com_diagnostico: summary.members_with_diagnosis,
            status: summary.status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FamilyResponse {
    pub success: bool,
    pub familia: FamilySummaryView,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddMemberResponse {
    pub success: bool,
    pub message: String,
    pub membro_id: UserId,
}
