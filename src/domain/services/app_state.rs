#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use super::InputController;
use super::QuizSession;
use crate::domain::models::GenerationError;
use crate::domain::models::QuizGeneratorBox;

pub struct AppState {
    pub controller: InputController,
    pub session: QuizSession,
}

impl AppState {
    pub fn new(generator: QuizGeneratorBox) -> AppState {
        return AppState {
            controller: InputController::new(generator),
            session: QuizSession::default(),
        };
    }

    /// Submits the current input and swaps in the generated questions. On
    /// failure the previous session is kept as is.
    pub async fn generate(&mut self) -> Result<usize, GenerationError> {
        let questions = self.controller.submit().await?;
        tracing::debug!(
            method = ?self.controller.method(),
            questions = questions.len(),
            "Replacing quiz session"
        );
        self.session.load(questions);

        return Ok(self.session.len());
    }
}
