#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use std::error;
use std::fmt;

#[derive(Debug)]
pub enum GenerationError {
    /// Neither notes nor file was chosen as the generation method.
    NoMethodSelected,
    EmptyNotes,
    NoFileSelected,
    UnsupportedFileType(String),
    /// A previous submission is still waiting on the generation service.
    AlreadyGenerating,
    Transport(reqwest::Error),
    HttpStatus {
        status: u16,
        message: Option<String>,
    },
    Decode(serde_json::Error),
    InvalidQuestion {
        id: i64,
        reason: String,
    },
}

impl GenerationError {
    /// True for failures of the outbound call itself, as opposed to input that
    /// was rejected before anything was sent.
    pub fn is_request_failure(&self) -> bool {
        match self {
            GenerationError::Transport(_)
            | GenerationError::HttpStatus { .. }
            | GenerationError::Decode(_)
            | GenerationError::InvalidQuestion { .. } => return true,
            _ => return false,
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerationError::NoMethodSelected => {
                return write!(f, "Please select a method to generate and add content.");
            }
            GenerationError::EmptyNotes => {
                return write!(f, "Please add some notes before generating.");
            }
            GenerationError::NoFileSelected => {
                return write!(f, "Please select a file before generating.");
            }
            GenerationError::UnsupportedFileType(filename) => {
                return write!(
                    f,
                    "{filename} is not a supported file type. Please select a .txt or .pdf file."
                );
            }
            GenerationError::AlreadyGenerating => {
                return write!(f, "A quiz is already being generated. Please wait.");
            }
            GenerationError::Transport(err) => {
                return write!(f, "Could not reach the quiz generation service: {err}");
            }
            GenerationError::HttpStatus { status, message } => {
                if let Some(message) = message {
                    return write!(
                        f,
                        "Error generating quiz (status {status}): {message} Try again later!"
                    );
                }
                return write!(f, "Error generating quiz (status {status}). Try again later!");
            }
            GenerationError::Decode(err) => {
                return write!(
                    f,
                    "The quiz generation service returned an unreadable response: {err}"
                );
            }
            GenerationError::InvalidQuestion { id, reason } => {
                return write!(
                    f,
                    "The quiz generation service returned an invalid question {id}: {reason}"
                );
            }
        }
    }
}

impl error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            GenerationError::Transport(err) => return Some(err),
            GenerationError::Decode(err) => return Some(err),
            _ => return None,
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> GenerationError {
        return GenerationError::Transport(err);
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> GenerationError {
        return GenerationError::Decode(err);
    }
}
