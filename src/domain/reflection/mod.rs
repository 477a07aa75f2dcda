//! Reflection - free-text answers to the self-reflection prompts.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectionError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ReflectionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReflectionError::UserNotFound(_) => ErrorCode::UserNotFound,
            ReflectionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for ReflectionError {
    fn from(err: DomainError) -> Self {
        ReflectionError::Infrastructure(err.to_string())
    }
}

/// A stored reflection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflection {
    pub user_id: UserId,
    /// Prompt key, as sent by the page.
    pub prompt: String,
    pub answer: String,
    pub created_at: Timestamp,
}

/// A full replacement set for one user's reflections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectionSet {
    entries: Vec<(String, String)>,
}

impl ReflectionSet {
    /// Builds the set, dropping blank answers. Answers keep their text as sent.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let entries = entries
            .into_iter()
            .filter(|(_, answer)| !answer.trim().is_empty())
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Indexes reflections by prompt. Input is newest first, so on duplicate
/// prompts the oldest entry is the one kept.
pub fn index_by_prompt(reflections: Vec<Reflection>) -> BTreeMap<String, Reflection> {
    let mut index = BTreeMap::new();
    for reflection in reflections {
        index.insert(reflection.prompt.clone(), reflection);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_answers_are_skipped() {
        let set = ReflectionSet::from_entries(vec![
            ("p1".to_string(), "Usei menos o celular".to_string()),
            ("p2".to_string(), "   ".to_string()),
            ("p3".to_string(), String::new()),
        ]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.entries()[0].0, "p1");
    }

    #[test]
    fn empty_input_gives_empty_set() {
        let set = ReflectionSet::from_entries(Vec::new());
        assert!(set.is_empty());
    }

    #[test]
    fn index_keeps_last_seen_per_prompt() {
        let now = Timestamp::now();
        let reflections = vec![
            Reflection {
                user_id: UserId::from_i64(1),
                prompt: "p1".to_string(),
                answer: "nova".to_string(),
                created_at: now,
            },
            Reflection {
                user_id: UserId::from_i64(1),
                prompt: "p1".to_string(),
                answer: "antiga".to_string(),
                created_at: now.minus_days(1),
            },
        ];
        let index = index_by_prompt(reflections);
        assert_eq!(index.len(), 1);
        assert_eq!(index["p1"].answer, "antiga");
    }
}
