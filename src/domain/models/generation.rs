#[cfg(test)]
#[path = "generation_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use strum::EnumIter;
use strum::EnumVariantNames;
use tokio::fs;

use super::GenerationError;

/// Hard cap on the amount of notes text accepted by the notes input.
pub const NOTES_MAX_LENGTH: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum GenerationMethod {
    Notes,
    File,
}

impl GenerationMethod {
    pub fn title(&self) -> &'static str {
        match self {
            GenerationMethod::Notes => return "Generate from notes",
            GenerationMethod::File => return "Generate from file",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GenerationMethod::Notes => return "Enter notes to generate quiz questions",
            GenerationMethod::File => {
                return "Upload a .txt or a .pdf file to generate questions";
            }
        }
    }
}

/// A document picked by the user for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub filename: String,
    pub content: Vec<u8>,
}

impl FileUpload {
    pub fn new(filename: &str, content: Vec<u8>) -> FileUpload {
        return FileUpload {
            filename: filename.to_string(),
            content,
        };
    }

    pub async fn from_path(file_path: &path::Path) -> Result<FileUpload> {
        let content = fs::read(file_path).await?;
        let filename = file_path
            .file_name()
            .map(|name| return name.to_string_lossy().to_string())
            .unwrap_or_default();

        return Ok(FileUpload::new(&filename, content));
    }

    /// Mime type inferred from the file extension. Only `.txt` and `.pdf` are
    /// accepted by the generation service.
    pub fn mime_type(&self) -> Option<&'static str> {
        let (_, extension) = self.filename.rsplit_once('.')?;
        match extension.to_lowercase().as_str() {
            "txt" => return Some("text/plain"),
            "pdf" => return Some("application/pdf"),
            _ => return None,
        }
    }
}

/// A single validated submission to the generation service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationRequest {
    Notes {
        text: String,
    },
    File {
        content: Vec<u8>,
        filename: String,
        mime_type: String,
    },
}

impl GenerationRequest {
    pub fn from_notes(text: &str) -> Result<GenerationRequest, GenerationError> {
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyNotes);
        }

        return Ok(GenerationRequest::Notes {
            text: text.to_string(),
        });
    }

    pub fn from_file(file: Option<&FileUpload>) -> Result<GenerationRequest, GenerationError> {
        let file = match file {
            Some(file) => file,
            None => return Err(GenerationError::NoFileSelected),
        };

        let mime_type = match file.mime_type() {
            Some(mime_type) => mime_type,
            None => return Err(GenerationError::UnsupportedFileType(file.filename.to_string())),
        };

        return Ok(GenerationRequest::File {
            content: file.content.clone(),
            filename: file.filename.to_string(),
            mime_type: mime_type.to_string(),
        });
    }

    pub fn method(&self) -> GenerationMethod {
        match self {
            GenerationRequest::Notes { .. } => return GenerationMethod::Notes,
            GenerationRequest::File { .. } => return GenerationMethod::File,
        }
    }
}
