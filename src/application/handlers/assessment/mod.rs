//! Assessment command and query handlers.

mod get_recommendations;
mod get_tip_of_the_day;
mod list_questions;
mod submit_diagnosis;

pub use get_recommendations::GetRecommendationsHandler;
pub use get_tip_of_the_day::{GetTipOfTheDayHandler, GetTipOfTheDayQuery, FALLBACK_TIP};
pub use list_questions::ListQuestionsHandler;
pub use submit_diagnosis::{SubmitDiagnosisCommand, SubmitDiagnosisHandler, SubmitDiagnosisResult};
