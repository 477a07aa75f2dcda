//! HTTP DTOs for reflections and the action plan.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::Timestamp;
use crate::domain::reflection::Reflection;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveReflectionsRequest {
    /// Prompt key to answer. `null` answers count as blank.
    #[serde(default)]
    pub reflexoes: BTreeMap<String, Option<String>>,
}

impl SaveReflectionsRequest {
    pub fn into_entries(self) -> Vec<(String, String)> {
        self.reflexoes
            .into_iter()
            .map(|(prompt, answer)| (prompt, answer.unwrap_or_default()))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReflectionView {
    pub resposta: String,
    pub data_criacao: Timestamp,
}

impl From<Reflection> for ReflectionView {
    fn from(reflection: Reflection) -> Self {
        Self {
            resposta: reflection.answer,
            data_criacao: reflection.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReflectionsResponse {
    pub success: bool,
    pub reflexoes: BTreeMap<String, ReflectionView>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveActionPlanRequest {
    #[serde(default = "empty_plan")]
    pub plano_acao: Value,
}

fn empty_plan() -> Value {
    Value::Object(Default::default())
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionPlanResponse {
    pub success: bool,
    pub plano_acao: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_answers_become_blank_entries() {
        let req: SaveReflectionsRequest =
            serde_json::from_value(json!({"reflexoes": {"p1": "Sim", "p2": null}})).unwrap();
        let entries = req.into_entries();
        assert_eq!(
            entries,
            vec![
                ("p1".to_string(), "Sim".to_string()),
                ("p2".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn missing_plan_defaults_to_empty_object() {
        let req: SaveActionPlanRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req.plano_acao, json!({}));
    }
}
