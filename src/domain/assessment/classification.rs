//! Dependency classification levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display placeholder for someone without a diagnosis.
pub const NOT_EVALUATED_LABEL: &str = "Não avaliado";

/// Display placeholder when no modal level can be computed.
pub const NO_LEVEL_LABEL: &str = "N/A";

/// Three-tier digital dependency classification.
///
/// Serialized with the Portuguese labels that the store and the web pages
/// use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Não dependente")]
    NotDependent,
    #[serde(rename = "Moderado")]
    Moderate,
    #[serde(rename = "Dependente")]
    Dependent,
}

impl Classification {
    /// Every level, from lowest to highest score band.
    pub const ALL: [Classification; 3] = [
        Classification::NotDependent,
        Classification::Moderate,
        Classification::Dependent,
    ];

    /// Returns the stored/display label.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::NotDependent => "Não dependente",
            Classification::Moderate => "Moderado",
            Classification::Dependent => "Dependente",
        }
    }

    /// Parses a stored label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Não dependente" => Some(Classification::NotDependent),
            "Moderado" => Some(Classification::Moderate),
            "Dependente" => Some(Classification::Dependent),
            _ => None,
        }
    }

    /// Chart colour used by the population overview.
    pub fn colour(&self) -> &'static str {
        match self {
            Classification::NotDependent => "#28a745",
            Classification::Moderate => "#ffc107",
            Classification::Dependent => "#dc3545",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error for labels outside the three known levels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown classification label: {0}")]
pub struct UnknownLabel(pub String);

impl FromStr for Classification {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Classification::from_label(s).ok_or_else(|| UnknownLabel(s.to_string()))
    }
}
