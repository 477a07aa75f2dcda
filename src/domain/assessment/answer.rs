//! Submitted answers and score summation.

use serde::Serialize;
use serde_json::Value;

use super::AssessmentError;

/// One submitted choice. Only its position in the list identifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub option_id: Option<i64>,
    pub points: i32,
}

impl Answer {
    pub fn new(option_id: Option<i64>, points: i32) -> Self {
        Self { option_id, points }
    }

    /// Converts one raw JSON answer at position `index`.
    ///
    /// `pontuacao` must be present and an integral JSON number. Strings,
    /// floats, booleans and `null` are rejected rather than coerced.
    pub fn from_json(index: usize, raw: &Value) -> Result<Self, AssessmentError> {
        let object = raw
            .as_object()
            .ok_or_else(|| AssessmentError::invalid_answer(index, "expected an object"))?;

        let points = match object.get("pontuacao") {
            None | Some(Value::Null) => {
                return Err(AssessmentError::invalid_answer(index, "missing 'pontuacao'"))
            }
            Some(Value::Number(n)) => n
                .as_i64()
                .ok_or_else(|| {
                    AssessmentError::invalid_answer(index, "'pontuacao' must be an integer")
                })
                .and_then(|v| {
                    i32::try_from(v).map_err(|_| {
                        AssessmentError::invalid_answer(index, "'pontuacao' is out of range")
                    })
                })?,
            Some(_) => {
                return Err(AssessmentError::invalid_answer(
                    index,
                    "'pontuacao' must be an integer",
                ))
            }
        };

        let option_id = object.get("option_id").and_then(Value::as_i64);

        Ok(Self { option_id, points })
    }

    /// Converts a whole submission, failing on the first malformed answer.
    pub fn parse_all(raw: &[Value]) -> Result<Vec<Self>, AssessmentError> {
        raw.iter()
            .enumerate()
            .map(|(index, value)| Self::from_json(index, value))
            .collect()
    }
}

/// Sums the points of a submission.
///
/// An empty submission scores 0.
pub fn total_score(answers: &[Answer]) -> Result<i32, AssessmentError> {
    let sum: i64 = answers.iter().map(|a| i64::from(a.points)).sum();
    i32::try_from(sum).map_err(|_| AssessmentError::ScoreOutOfRange(sum))
}
