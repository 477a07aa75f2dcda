//! Assessment - questionnaire scoring, classification and staleness.
//!
//! Everything here is pure: handlers fetch rows first, call in, and persist
//! the result afterwards.

mod answer;
mod classification;
mod classifier;
pub mod copy;
mod diagnosis;
mod errors;
mod question;
mod reevaluation;

pub use answer::{total_score, Answer};
pub use classification::{Classification, UnknownLabel, NOT_EVALUATED_LABEL, NO_LEVEL_LABEL};
pub use classifier::{Assessment, Classifier, ClassifierConfig, ClassifierConfigError, Thresholds};
pub use copy::{CopyBook, CopyError, LevelCopy, GENERIC_TIP};
pub use diagnosis::{Diagnosis, DiagnosisSnapshot, NewDiagnosis};
pub use errors::AssessmentError;
pub use question::{group_questions, AnswerOption, Question, QuestionOptionRow};
pub use reevaluation::{
    needs_reevaluation, needs_reevaluation_within, DiagnosisTime, REEVALUATION_DAYS,
};
