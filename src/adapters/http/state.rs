//! Shared application state and handler factories.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::handlers::account::{LoginHandler, RegisterHandler};
use crate::application::handlers::assessment::{
    GetRecommendationsHandler, GetTipOfTheDayHandler, ListQuestionsHandler, SubmitDiagnosisHandler,
};
use crate::application::handlers::dashboard::{GetDashboardHandler, GetPopulationOverviewHandler};
use crate::application::handlers::directory::{
    ListInstitutionsHandler, ListProfessionalsHandler, ListRostersHandler,
    RegisterInstitutionHandler, RegisterProfessionalHandler, RemoveInstitutionHandler,
    RemoveProfessionalHandler,
};
use crate::application::handlers::family::{
    AddFamilyMemberHandler, GetFamilyHandler, RemoveFamilyMemberHandler,
};
use crate::application::handlers::reflection::{
    GetActionPlanHandler, GetReflectionsHandler, SaveActionPlanHandler, SaveReflectionsHandler,
};
use crate::domain::assessment::Classifier;
use crate::ports::{
    DiagnosisRepository, FamilyReader, InstitutionRepository, PopulationReader,
    ProfessionalRepository, QuestionReader, ReflectionRepository, SessionIssuer,
    SessionValidator, UserRepository,
};

/// Every store port the HTTP layer talks to.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserRepository>,
    pub diagnoses: Arc<dyn DiagnosisRepository>,
    pub families: Arc<dyn FamilyReader>,
    pub population: Arc<dyn PopulationReader>,
    pub questions: Arc<dyn QuestionReader>,
    pub reflections: Arc<dyn ReflectionRepository>,
    pub institutions: Arc<dyn InstitutionRepository>,
    pub professionals: Arc<dyn ProfessionalRepository>,
}

impl Stores {
    /// Uses one backend for every port.
    pub fn shared<S>(store: Arc<S>) -> Self
    where
        S: UserRepository
            + DiagnosisRepository
            + FamilyReader
            + PopulationReader
            + QuestionReader
            + ReflectionRepository
            + InstitutionRepository
            + ProfessionalRepository
            + 'static,
    {
        Self {
            users: store.clone(),
            diagnoses: store.clone(),
            families: store.clone(),
            population: store.clone(),
            questions: store.clone(),
            reflections: store.clone(),
            institutions: store.clone(),
            professionals: store,
        }
    }
}

/// Session signing plus its validator half.
#[derive(Clone)]
pub struct Sessions {
    pub issuer: Arc<dyn SessionIssuer>,
    pub validator: Arc<dyn SessionValidator>,
}

impl Sessions {
    pub fn shared<T>(sessions: Arc<T>) -> Self
    where
        T: SessionIssuer + SessionValidator + 'static,
    {
        Self {
            issuer: sessions.clone(),
            validator: sessions,
        }
    }
}

/// Request-independent HTTP settings.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub reevaluation_days: i64,
    pub secure_cookie: bool,
    pub templates_dir: PathBuf,
}

/// Shared application state.
///
/// Cloned per request; every dependency is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub stores: Stores,
    pub sessions: Sessions,
    pub classifier: Arc<Classifier>,
    pub settings: Arc<HttpSettings>,
}

impl AppState {
    pub fn new(
        stores: Stores,
        sessions: Sessions,
        classifier: Arc<Classifier>,
        settings: HttpSettings,
    ) -> Self {
        Self {
            stores,
            sessions,
            classifier,
            settings: Arc::new(settings),
        }
    }

    // ── Account ─────────────────────────────────────────────────────────────

    pub fn register_handler(&self) -> RegisterHandler {
        RegisterHandler::new(self.stores.users.clone())
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(self.stores.users.clone())
    }

    // ── Assessment ──────────────────────────────────────────────────────────

    pub fn list_questions_handler(&self) -> ListQuestionsHandler {
        ListQuestionsHandler::new(self.stores.questions.clone())
    }

    pub fn submit_diagnosis_handler(&self) -> SubmitDiagnosisHandler {
        SubmitDiagnosisHandler::new(
            self.classifier.clone(),
            self.stores.users.clone(),
            self.stores.diagnoses.clone(),
        )
    }

    pub fn recommendations_handler(&self) -> GetRecommendationsHandler {
        GetRecommendationsHandler::new(self.classifier.clone())
    }

    pub fn tip_of_the_day_handler(&self) -> GetTipOfTheDayHandler {
        GetTipOfTheDayHandler::new(self.classifier.clone(), self.stores.diagnoses.clone())
    }

    // ── Dashboard ───────────────────────────────────────────────────────────

    pub fn dashboard_handler(&self) -> GetDashboardHandler {
        GetDashboardHandler::new(
            self.classifier.clone(),
            self.stores.users.clone(),
            self.stores.diagnoses.clone(),
            self.stores.families.clone(),
            self.settings.reevaluation_days,
        )
    }

    pub fn population_handler(&self) -> GetPopulationOverviewHandler {
        GetPopulationOverviewHandler::new(self.stores.population.clone())
    }

    // ── Family ──────────────────────────────────────────────────────────────

    pub fn get_family_handler(&self) -> GetFamilyHandler {
        GetFamilyHandler::new(self.stores.users.clone(), self.stores.families.clone())
    }

    pub fn add_member_handler(&self) -> AddFamilyMemberHandler {
        AddFamilyMemberHandler::new(self.stores.users.clone())
    }

    pub fn remove_member_handler(&self) -> RemoveFamilyMemberHandler {
        RemoveFamilyMemberHandler::new(self.stores.users.clone())
    }

    // ── Reflection ──────────────────────────────────────────────────────────

    pub fn get_reflections_handler(&self) -> GetReflectionsHandler {
        GetReflectionsHandler::new(self.stores.reflections.clone())
    }

    pub fn save_reflections_handler(&self) -> SaveReflectionsHandler {
        SaveReflectionsHandler::new(self.stores.reflections.clone())
    }

    pub fn get_action_plan_handler(&self) -> GetActionPlanHandler {
        GetActionPlanHandler::new(self.stores.users.clone())
    }

    pub fn save_action_plan_handler(&self) -> SaveActionPlanHandler {
        SaveActionPlanHandler::new(self.stores.users.clone())
    }

    // ── Directory ───────────────────────────────────────────────────────────

    pub fn list_institutions_handler(&self) -> ListInstitutionsHandler {
        ListInstitutionsHandler::new(self.stores.institutions.clone())
    }

    pub fn register_institution_handler(&self) -> RegisterInstitutionHandler {
        RegisterInstitutionHandler::new(self.stores.institutions.clone())
    }

    pub fn remove_institution_handler(&self) -> RemoveInstitutionHandler {
        RemoveInstitutionHandler::new(self.stores.institutions.clone())
    }

    pub fn list_professionals_handler(&self) -> ListProfessionalsHandler {
        ListProfessionalsHandler::new(self.stores.professionals.clone())
    }

    pub fn register_professional_handler(&self) -> RegisterProfessionalHandler {
        RegisterProfessionalHandler::new(self.stores.professionals.clone())
    }

    pub fn remove_professional_handler(&self) -> RemoveProfessionalHandler {
        RemoveProfessionalHandler::new(self.stores.professionals.clone())
    }

    pub fn rosters_handler(&self) -> ListRostersHandler {
        ListRostersHandler::new(
            self.stores.institutions.clone(),
            self.stores.professionals.clone(),
        )
    }
}
