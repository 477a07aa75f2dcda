//! Questionnaire structure.

use serde::Serialize;

use crate::domain::foundation::QuestionId;

/// A selectable answer and the points it is worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub id: i64,
    pub text: String,
    pub points: i32,
}

/// A questionnaire item with its options in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub category: Option<String>,
    pub options: Vec<AnswerOption>,
}

/// Flat question/option row as returned by a left join.
#[derive(Debug, Clone)]
pub struct QuestionOptionRow {
    pub question_id: QuestionId,
    pub question_text: String,
    pub category: Option<String>,
    pub option: Option<AnswerOption>,
}

/// Groups join rows (ordered by question) into questions.
///
/// A question whose join produced no option keeps an empty option list.
pub fn group_questions(rows: Vec<QuestionOptionRow>) -> Vec<Question> {
    let mut questions: Vec<Question> = Vec::new();

    for row in rows {
        let same_question = questions
            .last()
            .map(|q| q.id == row.question_id)
            .unwrap_or(false);

        if !same_question {
            questions.push(Question {
                id: row.question_id,
                text: row.question_text,
                category: row.category,
                options: Vec::new(),
            });
        }

        if let (Some(option), Some(question)) = (row.option, questions.last_mut()) {
            question.options.push(option);
        }
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(qid: i64, option: Option<(i64, i32)>) -> QuestionOptionRow {
        QuestionOptionRow {
            question_id: QuestionId::from_i64(qid),
            question_text: format!("Q{}", qid),
            category: Some("uso".to_string()),
            option: option.map(|(id, points)| AnswerOption {
                id,
                text: format!("O{}", id),
                points,
            }),
        }
    }

    #[test]
    fn group_questions_collects_options_per_question() {
        let rows = vec![
            row(1, Some((10, 0))),
            row(1, Some((11, 2))),
            row(2, Some((20, 3))),
        ];
        let questions = group_questions(rows);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].options.len(), 2);
        assert_eq!(questions[1].options[0].points, 3);
    }

    #[test]
    fn question_without_options_has_empty_list() {
        let questions = group_questions(vec![row(1, None), row(2, Some((20, 1)))]);
        assert!(questions[0].options.is_empty());
        assert_eq!(questions[1].options.len(), 1);
    }

    #[test]
    fn no_rows_means_no_questions() {
        assert!(group_questions(Vec::new()).is_empty());
    }
}
