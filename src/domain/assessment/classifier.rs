//! Score classification and recommendation selection.
//!
//! A `Classifier` is built once from an immutable `ClassifierConfig` and
//! shared across requests. It holds no mutable state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::copy::{CopyBook, CopyError, GENERIC_TIP};
use super::{total_score, Answer, AssessmentError, Classification};

/// Upper bounds (inclusive) of the two lower score bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Thresholds {
    pub not_dependent_max: i32,
    pub moderate_max: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            not_dependent_max: 15,
            moderate_max: 25,
        }
    }
}

/// Errors for a classifier configuration that cannot be used.
#[derive(Debug, Error)]
pub enum ClassifierConfigError {
    #[error("not_dependent_max ({not_dependent_max}) must be below moderate_max ({moderate_max})")]
    InvalidThresholds {
        not_dependent_max: i32,
        moderate_max: i32,
    },

    #[error(transparent)]
    Copy(#[from] CopyError),
}

/// Thresholds plus copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub thresholds: Thresholds,
    pub copy: CopyBook,
}

impl ClassifierConfig {
    pub fn new(thresholds: Thresholds, copy: CopyBook) -> Self {
        Self { thresholds, copy }
    }

    pub fn validate(&self) -> Result<(), ClassifierConfigError> {
        let Thresholds {
            not_dependent_max,
            moderate_max,
        } = self.thresholds;
        if not_dependent_max >= moderate_max {
            return Err(ClassifierConfigError::InvalidThresholds {
                not_dependent_max,
                moderate_max,
            });
        }
        self.copy.validate()?;
        Ok(())
    }
}

/// Outcome of scoring one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub score: i32,
    pub classification: Classification,
    pub recommendations: Vec<String>,
}

/// Pure mapping from scores to levels and from levels to copy.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Builds a classifier after validating its configuration.
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifierConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Maps a score to its band. Total over all integers; negatives fall in
    /// the lowest band and the top band is unbounded.
    pub fn classify(&self, score: i32) -> Classification {
        let t = &self.config.thresholds;
        if score <= t.not_dependent_max {
            Classification::NotDependent
        } else if score <= t.moderate_max {
            Classification::Moderate
        } else {
            Classification::Dependent
        }
    }

    /// Recommendations for a level, in display order.
    pub fn recommendations_for(&self, classification: Classification) -> &[String] {
        &self.config.copy.level(classification).recommendations
    }

    /// Recommendations for a raw label. Unknown labels get an empty list.
    pub fn recommendations_for_label(&self, label: &str) -> &[String] {
        Classification::from_label(label)
            .map(|level| self.recommendations_for(level))
            .unwrap_or(&[])
    }

    /// Tip for `day_of_year`, cycling through the level's list.
    pub fn tip_of_the_day(&self, classification: Classification, day_of_year: u32) -> &str {
        let tips = &self.config.copy.level(classification).tips;
        if tips.is_empty() {
            return GENERIC_TIP;
        }
        &tips[day_of_year as usize % tips.len()]
    }

    /// Tip for a raw label. Unknown labels use the `Moderate` list.
    pub fn tip_of_the_day_for_label(&self, label: &str, day_of_year: u32) -> &str {
        let level = Classification::from_label(label).unwrap_or_else(|| {
            tracing::warn!(label, "unknown level for tip of the day, using Moderado");
            Classification::Moderate
        });
        self.tip_of_the_day(level, day_of_year)
    }

    /// Scores a submission and selects its recommendations.
    pub fn diagnose(&self, answers: &[Answer]) -> Result<Assessment, AssessmentError> {
        let score = total_score(answers)?;
        let classification = self.classify(score);
        Ok(Assessment {
            score,
            classification,
            recommendations: self.recommendations_for(classification).to_vec(),
        })
    }
}
