use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Reasons a question cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("a question needs at least one choice")]
    NoChoices,
    #[error("correct answer {index} is out of range for {len} choices")]
    CorrectOutOfRange { index: usize, len: usize },
}

/// A single multiple-choice question.
///
/// Always holds at least one choice and exactly one correct choice index that
/// points into `choices`. Choice texts do not need to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    choices: Vec<String>,
    correct: usize,
    feedback: Option<String>,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        choices: Vec<String>,
        correct: usize,
    ) -> Result<Self, QuestionError> {
        if choices.is_empty() {
            return Err(QuestionError::NoChoices);
        }
        if correct >= choices.len() {
            return Err(QuestionError::CorrectOutOfRange {
                index: correct,
                len: choices.len(),
            });
        }

        Ok(Self {
            prompt: prompt.into(),
            choices,
            correct,
            feedback: None,
        })
    }

    /// Attach explanatory text shown once an answer has been graded.
    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn correct_index(&self) -> usize {
        self.correct
    }

    pub fn correct_choice(&self) -> &str {
        &self.choices[self.correct]
    }

    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Returns the same question with its choices in random order.
    ///
    /// The correct index follows the correct choice to its new position.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..self.choices.len()).collect();
        order.shuffle(rng);

        let mut correct = 0;
        let mut choices = Vec::with_capacity(order.len());
        for (position, &original) in order.iter().enumerate() {
            if original == self.correct {
                correct = position;
            }
            choices.push(self.choices[original].clone());
        }

        Self {
            prompt: self.prompt.clone(),
            choices,
            correct,
            feedback: self.feedback.clone(),
        }
    }
}

/// The checked choice at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Choice(usize),
}

impl From<Option<usize>> for Selection {
    fn from(checked: Option<usize>) -> Self {
        match checked {
            Some(index) => Selection::Choice(index),
            None => Selection::None,
        }
    }
}
