use async_trait::async_trait;

use super::GenerationError;
use super::Question;

pub type QuizGeneratorBox = Box<dyn QuizGenerator + Send + Sync>;

#[async_trait]
pub trait QuizGenerator {
    /// Requests a list of questions generated from free text notes.
    async fn generate_from_notes(&self, notes: &str) -> Result<Vec<Question>, GenerationError>;

    /// Requests a list of questions generated from an uploaded `.txt` or
    /// `.pdf` document.
    ///
    /// `mime_type` has already been validated against the accepted upload
    /// types by the caller.
    async fn generate_from_file(
        &self,
        filename: &str,
        content: &[u8],
        mime_type: &str,
    ) -> Result<Vec<Question>, GenerationError>;
}
