//! HTTP DTOs for the dashboard and the general evaluation.

use serde::Serialize;
use serde_json::Value;

use crate::adapters::http::family::dto::FamilySummaryView;
use crate::domain::account::User;
use crate::domain::assessment::{Diagnosis, DiagnosisSnapshot};
use crate::domain::dashboard::Dashboard;
use crate::domain::foundation::{DiagnosisId, FamilyId, Timestamp, UserId};
use crate::domain::overview::{LevelSlice, PopulationOverview, PopulationStats, UserDetail};

const POPULATION_DESCRIPTION: &str = "Dados de todos os usuários do sistema";

// ════════════════════════════════════════════════════════════════════════════════
// Dashboard
// ════════════════════════════════════════════════════════════════════════════════

/// A user row without credentials.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: UserId,
    pub nome: String,
    pub email: Option<String>,
    pub idade: Option<i32>,
    pub familia_id: Option<FamilyId>,
    pub relacionamento: Option<String>,
    pub data_cadastro: Timestamp,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nome: user.name,
            email: user.email,
            idade: user.age,
            familia_id: user.family_id,
            relacionamento: user.relationship,
            data_cadastro: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisRecordView {
    pub id: DiagnosisId,
    pub usuario_id: UserId,
    pub pontuacao: i32,
    pub nivel: &'static str,
    pub respostas: Value,
    pub data_diagnostico: Timestamp,
}

impl From<Diagnosis> for DiagnosisRecordView {
    fn from(diagnosis: Diagnosis) -> Self {
        Self {
            id: diagnosis.id,
            usuario_id: diagnosis.user_id,
            pontuacao: diagnosis.score,
            nivel: diagnosis.classification.label(),
            respostas: diagnosis.raw_answers,
            data_diagnostico: diagnosis.diagnosed_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryPointView {
    pub pontuacao: i32,
    pub nivel: &'static str,
    pub data_diagnostico: Timestamp,
}

impl From<DiagnosisSnapshot> for HistoryPointView {
    fn from(point: DiagnosisSnapshot) -> Self {
        Self {
            pontuacao: point.score,
            nivel: point.classification.label(),
            data_diagnostico: point.diagnosed_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub success: bool,
    pub usuario: UserView,
    pub ultimo_diagnostico: Option<DiagnosisRecordView>,
    pub historico: Vec<HistoryPointView>,
    pub familia_data: FamilySummaryView,
    pub dica_do_dia: String,
    pub precisa_reavaliar: bool,
}

impl From<Dashboard> for DashboardResponse {
    fn from(dashboard: Dashboard) -> Self {
        Self {
            success: true,
            usuario: UserView::from(dashboard.user),
            ultimo_diagnostico: dashboard.latest.map(DiagnosisRecordView::from),
            historico: dashboard.history.into_iter().map(HistoryPointView::from).collect(),
            familia_data: FamilySummaryView::from(dashboard.family_summary),
            dica_do_dia: dashboard.tip_of_the_day,
            precisa_reavaliar: dashboard.needs_reevaluation,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// General evaluation
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct PopulationStatsView {
    pub total_usuarios: usize,
    pub total_avaliados: usize,
    pub percentual_avaliados: f64,
    pub media_geral: f64,
    pub nivel_mais_comum: &'static str,
    pub descricao: &'static str,
}

impl From<PopulationStats> for PopulationStatsView {
    fn from(stats: PopulationStats) -> Self {
        Self {
            total_usuarios: stats.total_users,
            total_avaliados: stats.total_evaluated,
            percentual_avaliados: stats.percent_evaluated,
            media_geral: stats.overall_mean,
            nivel_mais_comum: stats.most_common_level,
            descricao: POPULATION_DESCRIPTION,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SliceView {
    pub nivel: &'static str,
    pub quantidade: usize,
    pub percentual: f64,
    pub cor: &'static str,
}

impl From<LevelSlice> for SliceView {
    fn from(slice: LevelSlice) -> Self {
        Self {
            nivel: slice.level,
            quantidade: slice.count,
            percentual: slice.percent,
            cor: slice.colour,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub niveis: Vec<SliceView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserDetailView {
    pub nome: String,
    pub categoria: String,
    pub pontuacao: Option<i32>,
    pub nivel: &'static str,
    pub data_diagnostico: Option<Timestamp>,
    pub is_usuario_logado: bool,
}

impl From<UserDetail> for UserDetailView {
    fn from(detail: UserDetail) -> Self {
        Self {
            nome: detail.display_name,
            categoria: detail.category,
            pontuacao: detail.score,
            nivel: detail.level,
            data_diagnostico: detail.diagnosed_at,
            is_usuario_logado: detail.is_current_user,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PopulationResponse {
    pub success: bool,
    pub estatisticas: PopulationStatsView,
    pub dados_grafico: ChartView,
    pub detalhes: Vec<UserDetailView>,
    pub usuario_logado_id: Option<UserId>,
    pub modo_demo: bool,
}

impl PopulationResponse {
    pub fn new(overview: PopulationOverview, current_user: Option<UserId>) -> Self {
        Self {
            success: true,
            estatisticas: PopulationStatsView::from(overview.stats),
            dados_grafico: ChartView {
                niveis: overview.slices.into_iter().map(SliceView::from).collect(),
            },
            detalhes: overview.details.into_iter().map(UserDetailView::from).collect(),
            usuario_logado_id: current_user,
            modo_demo: false,
        }
    }
}
