#[cfg(test)]
#[path = "input_controller_test.rs"]
mod tests;

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use crate::domain::models::FileUpload;
use crate::domain::models::GenerationError;
use crate::domain::models::GenerationMethod;
use crate::domain::models::GenerationRequest;
use crate::domain::models::Question;
use crate::domain::models::QuizGeneratorBox;
use crate::domain::models::NOTES_MAX_LENGTH;

/// Clears the generating flag once a submission finishes, whichever way it
/// finishes.
struct GeneratingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> Drop for GeneratingGuard<'a> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

pub struct InputController {
    generator: QuizGeneratorBox,
    method: Option<GenerationMethod>,
    notes: String,
    file: Option<FileUpload>,
    generating: AtomicBool,
}

impl InputController {
    pub fn new(generator: QuizGeneratorBox) -> InputController {
        return InputController {
            generator,
            method: None,
            notes: "".to_string(),
            file: None,
            generating: AtomicBool::new(false),
        };
    }

    pub fn method(&self) -> Option<GenerationMethod> {
        return self.method;
    }

    pub fn notes(&self) -> &str {
        return &self.notes;
    }

    pub fn file(&self) -> Option<&FileUpload> {
        return self.file.as_ref();
    }

    pub fn is_generating(&self) -> bool {
        return self.generating.load(Ordering::SeqCst);
    }

    /// Switches the active generation method. Input entered for the other
    /// method is kept but ignored on submit.
    pub fn select_method(&mut self, method: GenerationMethod) {
        self.method = Some(method);
    }

    pub fn set_notes(&mut self, text: &str) {
        self.notes = text.chars().take(NOTES_MAX_LENGTH).collect();
    }

    pub fn set_file(&mut self, file: FileUpload) {
        self.file = Some(file);
    }

    pub fn build_request(&self) -> Result<GenerationRequest, GenerationError> {
        match self.method {
            None => return Err(GenerationError::NoMethodSelected),
            Some(GenerationMethod::Notes) => return GenerationRequest::from_notes(&self.notes),
            Some(GenerationMethod::File) => return GenerationRequest::from_file(self.file.as_ref()),
        }
    }

    /// Validates the active input and sends exactly one request to the
    /// generation service. A submit made while another is still outstanding
    /// is rejected with `AlreadyGenerating` and sends nothing.
    pub async fn submit(&self) -> Result<Vec<Question>, GenerationError> {
        if self
            .generating
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::warn!("Rejected submit while a generation request is outstanding");
            return Err(GenerationError::AlreadyGenerating);
        }
        let _guard = GeneratingGuard {
            flag: &self.generating,
        };

        let req = self.build_request()?;
        tracing::debug!(method = %req.method(), "Submitting generation request");

        let res = match &req {
            GenerationRequest::Notes { text } => self.generator.generate_from_notes(text).await,
            GenerationRequest::File {
                content,
                filename,
                mime_type,
            } => {
                self.generator
                    .generate_from_file(filename, content, mime_type)
                    .await
            }
        };

        if let Err(err) = &res {
            tracing::error!(error = ?err, method = %req.method(), "Generation request failed");
        }

        return res;
    }
}
