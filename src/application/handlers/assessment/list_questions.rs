//! ListQuestionsHandler - Query handler for the questionnaire.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentError, Question};
use crate::ports::QuestionReader;

pub struct ListQuestionsHandler {
    reader: Arc<dyn QuestionReader>,
}

impl ListQuestionsHandler {
    pub fn new(reader: Arc<dyn QuestionReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Vec<Question>, AssessmentError> {
        let questions = self.reader.list_questions().await?;
        tracing::debug!(count = questions.len(), "questionnaire loaded");
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::AnswerOption;
    use crate::domain::foundation::{DomainError, ErrorCode, QuestionId};
    use async_trait::async_trait;

    struct MockQuestionReader {
        questions: Vec<Question>,
        fail: bool,
    }

    #[async_trait]
    impl QuestionReader for MockQuestionReader {
        async fn list_questions(&self) -> Result<Vec<Question>, DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated failure"));
            }
            Ok(self.questions.clone())
        }
    }

    #[tokio::test]
    async fn returns_questions_from_reader() {
        let reader = MockQuestionReader {
            questions: vec![Question {
                id: QuestionId::from_i64(1),
                text: "Quantas horas por dia você passa online?".to_string(),
                category: Some("tempo".to_string()),
                options: vec![AnswerOption {
                    id: 1,
                    text: "Menos de 2 horas".to_string(),
                    points: 1,
                }],
            }],
            fail: false,
        };
        let handler = ListQuestionsHandler::new(Arc::new(reader));

        let questions = handler.handle().await.unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options[0].points, 1);
    }

    #[tokio::test]
    async fn maps_reader_failure_to_infrastructure() {
        let handler = ListQuestionsHandler::new(Arc::new(MockQuestionReader {
            questions: vec![],
            fail: true,
        }));

        let result = handler.handle().await;

        assert!(matches!(result, Err(AssessmentError::Infrastructure(_))));
    }
}
