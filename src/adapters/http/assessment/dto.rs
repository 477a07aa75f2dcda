//! HTTP DTOs for questionnaire and diagnosis endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::handlers::assessment::SubmitDiagnosisResult;
use crate::domain::assessment::{AnswerOption, Diagnosis, Question};
use crate::domain::foundation::{DiagnosisId, QuestionId, Timestamp};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Submitted answers. Each entry must carry an integer `pontuacao`; the
/// rest of the object is stored untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitDiagnosisRequest {
    #[serde(default)]
    pub respostas: Vec<Value>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub id: i64,
    pub texto: String,
    pub pontuacao: i32,
}

impl From<AnswerOption> for OptionView {
    fn from(option: AnswerOption) -> Self {
        Self {
            id: option.id,
            texto: option.text,
            pontuacao: option.points,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub texto: String,
    pub categoria: Option<String>,
    pub opcoes: Vec<OptionView>,
}

impl From<Question> for QuestionView {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            texto: question.text,
            categoria: question.category,
            opcoes: question.options.into_iter().map(OptionView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisView {
    pub id: DiagnosisId,
    pub pontuacao: i32,
    pub nivel: &'static str,
    pub data_diagnostico: Timestamp,
}

impl From<&Diagnosis> for DiagnosisView {
    fn from(diagnosis: &Diagnosis) -> Self {
        Self {
            id: diagnosis.id,
            pontuacao: diagnosis.score,
            nivel: diagnosis.classification.label(),
            data_diagnostico: diagnosis.diagnosed_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitDiagnosisResponse {
    pub success: bool,
    pub diagnostico: DiagnosisView,
    pub solucoes: Vec<String>,
}

impl From<SubmitDiagnosisResult> for SubmitDiagnosisResponse {
    fn from(result: SubmitDiagnosisResult) -> Self {
        Self {
            success: true,
            diagnostico: DiagnosisView::from(&result.diagnosis),
            solucoes: result.recommendations,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub nivel: String,
    pub solucoes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TipResponse {
    pub dica: String,
}
