//! HTTP DTOs for the partner directory.

use serde::{Deserialize, Serialize};

use crate::adapters::http::dto::lenient_i64;
use crate::domain::directory::{
    Institution, InstitutionDraft, InstitutionRoster, Professional, ProfessionalDraft,
};
use crate::domain::foundation::{InstitutionId, ProfessionalId, Timestamp};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterInstitutionRequest {
    pub nome: Option<String>,
    pub tipo: Option<String>,
    pub endereco: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub descricao: Option<String>,
    pub especialidades: Option<String>,
}

impl From<RegisterInstitutionRequest> for InstitutionDraft {
    fn from(req: RegisterInstitutionRequest) -> Self {
        InstitutionDraft {
            name: req.nome,
            kind: req.tipo,
            address: req.endereco,
            phone: req.telefone,
            email: req.email,
            description: req.descricao,
            specialties: req.especialidades,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterProfessionalRequest {
    pub nome: Option<String>,
    pub profissao: Option<String>,
    pub especialidade: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    /// Select inputs post the id as a string; `""` means no institution.
    #[serde(deserialize_with = "lenient_i64")]
    pub instituicao_id: Option<i64>,
    pub registro_profissional: Option<String>,
    pub abordagem: Option<String>,
    pub descricao: Option<String>,
}

impl From<RegisterProfessionalRequest> for ProfessionalDraft {
    fn from(req: RegisterProfessionalRequest) -> Self {
        ProfessionalDraft {
            name: req.nome,
            profession: req.profissao,
            specialty: req.especialidade,
            phone: req.telefone,
            email: req.email,
            institution_id: req.instituicao_id,
            registration_number: req.registro_profissional,
            approach: req.abordagem,
            description: req.descricao,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct InstitutionView {
    pub id: InstitutionId,
    pub nome: String,
    pub tipo: String,
    pub endereco: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub descricao: Option<String>,
    pub especialidades: Option<String>,
    pub data_criacao: Timestamp,
}

impl From<Institution> for InstitutionView {
    fn from(i: Institution) -> Self {
        Self {
            id: i.id,
            nome: i.name,
            tipo: i.kind,
            endereco: i.address,
            telefone: i.phone,
            email: i.email,
            descricao: i.description,
            especialidades: i.specialties,
            data_criacao: i.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfessionalView {
    pub id: ProfessionalId,
    pub nome: String,
    pub profissao: Option<String>,
    pub especialidade: String,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub instituicao_id: Option<InstitutionId>,
    pub registro_profissional: String,
    pub abordagem: String,
    pub descricao: Option<String>,
    pub data_cadastro: Timestamp,
}

impl From<Professional> for ProfessionalView {
    fn from(p: Professional) -> Self {
        Self {
            id: p.id,
            nome: p.name,
            profissao: p.profession,
            especialidade: p.specialty,
            telefone: p.phone,
            email: p.email,
            instituicao_id: p.institution_id,
            registro_profissional: p.registration_number,
            abordagem: p.approach,
            descricao: p.description,
            data_cadastro: p.registered_at,
        }
    }
}

/// An institution with its professionals nested under `profissionais`.
#[derive(Debug, Clone, Serialize)]
pub struct RosterView {
    #[serde(flatten)]
    pub instituicao: InstitutionView,
    pub profissionais: Vec<ProfessionalView>,
}

impl From<InstitutionRoster> for RosterView {
    fn from(roster: InstitutionRoster) -> Self {
        Self {
            instituicao: InstitutionView::from(roster.institution),
            profissionais: roster
                .professionals
                .into_iter()
                .map(ProfessionalView::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InstitutionsResponse<T: Serialize> {
    pub success: bool,
    pub instituicoes: Vec<T>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfessionalsResponse {
    pub success: bool,
    pub profissionais: Vec<ProfessionalView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstitutionCreatedResponse {
    pub success: bool,
    pub message: String,
    pub instituicao_id: InstitutionId,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfessionalCreatedResponse {
    pub success: bool,
    pub message: String,
    pub profissional_id: ProfessionalId,
}
