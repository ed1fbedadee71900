use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Question, QuestionError};

/// Error type for loading a question file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse question: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid question: {0}")]
    Invalid(#[from] QuestionError),
}

/// On-disk shape of a question file.
#[derive(Deserialize)]
struct QuestionFile {
    prompt: String,
    choices: Vec<String>,
    correct_answer: usize,
    #[serde(default)]
    feedback: Option<String>,
}

pub fn load_question_from_json<P: AsRef<Path>>(path: P) -> Result<Question, LoadError> {
    let path = path.as_ref();
    debug!("reading question from {}", path.display());

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let question = parse_question(&json_content)?;
    info!(
        "loaded question {:?} with {} choices from {}",
        question.prompt(),
        question.choices().len(),
        path.display()
    );
    Ok(question)
}

pub fn parse_question(json: &str) -> Result<Question, LoadError> {
    let file: QuestionFile = serde_json::from_str(json)?;
    let question = Question::new(file.prompt, file.choices, file.correct_answer)?;

    Ok(match file.feedback {
        Some(feedback) => question.with_feedback(feedback),
        None => question,
    })
}
