#[cfg(test)]
#[path = "quiz_session_test.rs"]
mod tests;

use std::collections::HashSet;

use crate::domain::models::Question;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub answered: usize,
    pub correct: usize,
    pub total: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
}

impl QuizSession {
    /// Replaces the whole session with freshly generated questions. Any
    /// selected answers present on the incoming questions are cleared, and
    /// questions repeating an id already seen are dropped.
    pub fn load(&mut self, questions: Vec<Question>) {
        let mut seen = HashSet::new();
        self.questions = questions
            .into_iter()
            .filter(|question| {
                if !seen.insert(question.id) {
                    tracing::warn!(id = question.id, "Dropping question with duplicate id");
                    return false;
                }
                return true;
            })
            .map(|mut question| {
                question.selected_answer = None;
                return question;
            })
            .collect();

        tracing::debug!(questions = self.questions.len(), "Loaded quiz session");
    }

    /// Records an answer for every question matching `question_id`. Unknown
    /// ids and out of range answers are ignored.
    pub fn select_answer(&mut self, question_id: i64, answer_index: usize) {
        for question in self.questions.iter_mut() {
            if question.id == question_id {
                question.select(answer_index);
            }
        }
    }

    pub fn question(&self, question_id: i64) -> Option<&Question> {
        return self.questions.iter().find(|e| return e.id == question_id);
    }

    pub fn questions(&self) -> &[Question] {
        return &self.questions;
    }

    pub fn is_empty(&self) -> bool {
        return self.questions.is_empty();
    }

    pub fn len(&self) -> usize {
        return self.questions.len();
    }

    pub fn is_answered(&self, question_id: i64) -> bool {
        return self
            .question(question_id)
            .map(|e| return e.is_answered())
            .unwrap_or(false);
    }

    pub fn is_correct(&self, question_id: i64) -> Option<bool> {
        return self.question(question_id).and_then(|e| return e.is_correct());
    }

    pub fn score(&self) -> Score {
        return Score {
            answered: self.questions.iter().filter(|e| return e.is_answered()).count(),
            correct: self
                .questions
                .iter()
                .filter(|e| return e.is_correct() == Some(true))
                .count(),
            total: self.questions.len(),
        };
    }
}
