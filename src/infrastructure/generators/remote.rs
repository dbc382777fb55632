#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;

use async_trait::async_trait;
use reqwest::multipart;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::GenerationError;
use crate::domain::models::Question;
use crate::domain::models::QuizGenerator;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Client for the quiz generation service, which exposes one multipart
/// endpoint per generation method.
pub struct RemoteGenerator {
    url: String,
}

impl Default for RemoteGenerator {
    fn default() -> RemoteGenerator {
        return RemoteGenerator::new(&Config::get(ConfigKey::ServiceURL));
    }
}

impl RemoteGenerator {
    pub fn new(url: &str) -> RemoteGenerator {
        return RemoteGenerator {
            url: url.trim_end_matches('/').to_string(),
        };
    }

    async fn post(&self, path: &str, form: multipart::Form) -> Result<Vec<Question>, GenerationError> {
        let url = format!("{url}/{path}", url = self.url);
        tracing::debug!(url = url, "Sending generation request");

        let res = reqwest::Client::new()
            .post(&url)
            .multipart(form)
            .send()
            .await?;

        let status = res.status().as_u16();
        let body = res.text().await?;

        if status != 200 {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .map(|e| return e.error);
            tracing::error!(status = status, message = ?message, "Quiz generation service returned an error");
            return Err(GenerationError::HttpStatus { status, message });
        }

        let questions: Vec<Question> = serde_json::from_str(&body)?;
        for question in questions.iter() {
            question.validate()?;
        }

        tracing::debug!(questions = questions.len(), "Generation response");
        return Ok(questions);
    }
}

#[async_trait]
impl QuizGenerator for RemoteGenerator {
    #[allow(clippy::implicit_return)]
    async fn generate_from_notes(&self, notes: &str) -> Result<Vec<Question>, GenerationError> {
        let form = multipart::Form::new().text("notes", notes.to_string());
        return self.post("generatefromnotes", form).await;
    }

    #[allow(clippy::implicit_return)]
    async fn generate_from_file(
        &self,
        filename: &str,
        content: &[u8],
        mime_type: &str,
    ) -> Result<Vec<Question>, GenerationError> {
        let part = multipart::Part::bytes(content.to_vec())
            .file_name(filename.to_string())
            .mime_str(mime_type)?;
        let form = multipart::Form::new().part("file", part);

        return self.post("generatefromfile", form).await;
    }
}
