#[cfg(test)]
#[path = "question_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::GenerationError;

/// A multiple choice question as returned by the generation service, plus the
/// answer the user has picked so far.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    #[serde(rename = "question")]
    pub text: String,
    pub answers: Vec<String>,
    pub correct_answer_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_answer: Option<usize>,
}

impl Question {
    pub fn new(id: i64, text: &str, answers: &[&str], correct_answer_index: usize) -> Question {
        return Question {
            id,
            text: text.to_string(),
            answers: answers.iter().map(|e| return e.to_string()).collect(),
            correct_answer_index,
            selected_answer: None,
        };
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.answers.is_empty() {
            return Err(GenerationError::InvalidQuestion {
                id: self.id,
                reason: "no answers were provided".to_string(),
            });
        }

        if self.correct_answer_index >= self.answers.len() {
            return Err(GenerationError::InvalidQuestion {
                id: self.id,
                reason: format!(
                    "correct answer index {} is out of bounds for {} answers",
                    self.correct_answer_index,
                    self.answers.len()
                ),
            });
        }

        return Ok(());
    }

    /// Records the selected answer. Indexes outside of the answer list are
    /// ignored and false is returned.
    pub fn select(&mut self, answer_index: usize) -> bool {
        if answer_index >= self.answers.len() {
            return false;
        }

        self.selected_answer = Some(answer_index);
        return true;
    }

    pub fn is_answered(&self) -> bool {
        return self.selected_answer.is_some();
    }

    pub fn is_correct(&self) -> Option<bool> {
        return self
            .selected_answer
            .map(|selected| return selected == self.correct_answer_index);
    }
}
