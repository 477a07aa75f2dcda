//! Questionnaire scoring configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::assessment::{
    ClassifierConfig, ClassifierConfigError, CopyBook, Thresholds, REEVALUATION_DAYS,
};

/// Score bands, re-evaluation window and optional copy override.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    /// Highest score still classified as "Não dependente"
    #[serde(default = "default_not_dependent_max")]
    pub not_dependent_max: i32,

    /// Highest score still classified as "Moderado"
    #[serde(default = "default_moderate_max")]
    pub moderate_max: i32,

    /// Days after which a diagnosis is considered stale
    #[serde(default = "default_reevaluation_days")]
    pub reevaluation_days: i64,

    /// YAML file replacing the built-in recommendations and tips
    pub copy_file: Option<PathBuf>,
}

impl AssessmentConfig {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            not_dependent_max: self.not_dependent_max,
            moderate_max: self.moderate_max,
        }
    }

    /// Builds the classifier configuration, reading `copy_file` if set.
    pub fn classifier_config(&self) -> Result<ClassifierConfig, ClassifierConfigError> {
        let copy = match &self.copy_file {
            Some(path) => CopyBook::from_yaml_file(path)?,
            None => CopyBook::default(),
        };
        Ok(ClassifierConfig::new(self.thresholds(), copy))
    }

    /// Validate assessment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.not_dependent_max >= self.moderate_max {
            return Err(ValidationError::InvalidThresholds {
                not_dependent_max: self.not_dependent_max,
                moderate_max: self.moderate_max,
            });
        }
        if self.reevaluation_days < 1 {
            return Err(ValidationError::InvalidReevaluationWindow);
        }
        Ok(())
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            not_dependent_max: default_not_dependent_max(),
            moderate_max: default_moderate_max(),
            reevaluation_days: default_reevaluation_days(),
            copy_file: None,
        }
    }
}

fn default_not_dependent_max() -> i32 {
    Thresholds::default().not_dependent_max
}

fn default_moderate_max() -> i32 {
    Thresholds::default().moderate_max
}

fn default_reevaluation_days() -> i64 {
    REEVALUATION_DAYS
}
