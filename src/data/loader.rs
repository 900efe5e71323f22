use std::fs;
use std::io;
use std::path::Path;

use crate::models::Quiz;

/// Error loading a quiz from a JSON file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// The file is not a valid quiz document.
    Parse(serde_json::Error),
    /// The quiz has an empty question list.
    NoQuestions,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read quiz file: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse quiz file: {}", e),
            LoadError::NoQuestions => write!(f, "quiz file contains no questions"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::NoQuestions => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Load a quiz from a JSON file.
pub fn load_quiz_from_json<P: AsRef<Path>>(path: P) -> Result<Quiz, LoadError> {
    let json = fs::read_to_string(path)?;
    parse_quiz(&json)
}

fn parse_quiz(json: &str) -> Result<Quiz, LoadError> {
    let quiz: Quiz = serde_json::from_str(json)?;
    if quiz.questions.is_empty() {
        return Err(LoadError::NoQuestions);
    }
    Ok(quiz)
}
