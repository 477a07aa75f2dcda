//! Recommendation and tip copy, per classification level.
//!
//! The production copy is compiled in. Operators can swap it for a YAML file
//! with the same shape:
//!
//! ```yaml
//! not_dependent:
//!   recommendations: ["..."]
//!   tips: ["..."]
//! moderate: { recommendations: [...], tips: [...] }
//! dependent: { recommendations: [...], tips: [...] }
//! ```

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::Classification;

/// Returned when a tip list is empty.
pub const GENERIC_TIP: &str =
    "Mantenha o equilíbrio entre vida online e offline! Pratique atividades offline regularmente.";

/// Recommendations and tips shown for one level.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LevelCopy {
    pub recommendations: Vec<String>,
    pub tips: Vec<String>,
}

/// Copy for all three levels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CopyBook {
    pub not_dependent: LevelCopy,
    pub moderate: LevelCopy,
    pub dependent: LevelCopy,
}

/// Errors loading or validating copy.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("Could not read copy file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse copy file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Level '{level}' has no {list}")]
    EmptyList {
        level: &'static str,
        list: &'static str,
    },
}

impl CopyBook {
    /// Copy for a level.
    pub fn level(&self, classification: Classification) -> &LevelCopy {
        match classification {
            Classification::NotDependent => &self.not_dependent,
            Classification::Moderate => &self.moderate,
            Classification::Dependent => &self.dependent,
        }
    }

    /// Parses copy from a YAML document and validates it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CopyError> {
        let book: CopyBook = serde_yaml::from_str(yaml)?;
        book.validate()?;
        Ok(book)
    }

    /// Reads copy from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CopyError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Every level needs at least one recommendation and one tip.
    pub fn validate(&self) -> Result<(), CopyError> {
        for level in Classification::ALL {
            let copy = self.level(level);
            if copy.recommendations.is_empty() {
                return Err(CopyError::EmptyList {
                    level: level.label(),
                    list: "recommendations",
                });
            }
            if copy.tips.is_empty() {
                return Err(CopyError::EmptyList {
                    level: level.label(),
                    list: "tips",
                });
            }
        }
        Ok(())
    }
}

impl Default for CopyBook {
    fn default() -> Self {
        DEFAULT_COPY.clone()
    }
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

static DEFAULT_COPY: Lazy<CopyBook> = Lazy::new(|| CopyBook {
    dependent: LevelCopy {
        recommendations: owned(&[
            "Estabeleça limites de tempo rigorosos para uso da internet",
            "Desative notificações de redes sociais durante o trabalho",
            "Pratique atividades offline como exercícios físicos ou leitura",
            "Busque apoio familiar para monitoramento",
            "Use aplicativos de controle de tempo de tela",
            "Estabeleça zonas livres de dispositivos em casa",
            "Procure ajuda profissional se necessário",
            "Participe de grupos de apoio online",
        ]),
        tips: owned(&[
            "Que tal definir um alarme para lembrar de fazer pausas a cada hora?",
            "Experimente deixar o celular em outro cômodo durante as refeições",
            "Tente passar a primeira hora do dia sem verificar redes sociais",
            "Estabeleça um horário fixo para desligar todos os dispositivos eletrônicos",
            "Pratique a regra 20-20-20: a cada 20 minutos, olhe por 20 segundos para algo a 20 pés de distância",
            "Desative notificações não essenciais do seu smartphone",
            "Estabeleça metas realistas para reduzir gradualmente o tempo online",
            "Pratique meditação ou exercícios de respiração quando sentir ansiedade",
        ]),
    },
    moderate: LevelCopy {
        recommendations: owned(&[
            "Faça pausas regulares a cada 45 minutos de uso",
            "Estabeleça zonas livres de dispositivos em casa",
            "Pratique a técnica Pomodoro para melhor gestão do tempo",
            "Mantenha um diário de uso da internet",
            "Defina horários específicos para verificar redes sociais",
            "Pratique atividades físicas regularmente",
            "Estabeleça metas realistas de redução de tempo online",
            "Desenvolva hobbies offline",
        ]),
        tips: owned(&[
            "Parabéns pelo equilíbrio! Continue monitorando seu tempo online",
            "Que tal estabelecer uma 'hora digital' para desligar dispositivos?",
            "Pratique atividades sem telas antes de dormir para melhorar a qualidade do sono",
            "Experimente ter um dia por semana com uso mínimo de internet",
            "Mantenha um diário das atividades offline que mais lhe dão prazer",
            "Estabeleça zonas livres de tecnologia em sua casa",
            "Pratique a técnica Pomodoro (25 minutos focado, 5 minutos de pausa)",
            "Desenvolva um hobby que não envolva telas",
        ]),
    },
    not_dependent: LevelCopy {
        recommendations: owned(&[
            "Continue mantendo hábitos saudáveis de uso digital",
            "Compartilhe suas estratégias com familiares",
            "Periodicamente reavalie seu relacionamento com a tecnologia",
            "Mantenha atividades sociais e hobbies offline",
            "Ajude outros membros da família a alcançar o equilíbrio",
            "Continue com atividades físicas regulares",
            "Mantenha uma rotina equilibrada entre online e offline",
            "Comemore suas conquistas de equilíbrio digital",
        ]),
        tips: owned(&[
            "Excelente trabalho mantendo hábitos saudáveis!",
            "Compartilhe suas estratégias de equilíbrio digital com amigos e familiares",
            "Continue aproveitando o melhor da tecnologia sem excessos",
            "Ajude outros membros da família a encontrar o equilíbrio",
            "Periodicamente reavalie seu relacionamento com a tecnologia",
            "Mantenha atividades sociais presenciais regularmente",
            "Continue com exercícios físicos e hobbies offline",
            "Comemore suas conquistas de equilíbrio digital",
        ]),
    },
});
