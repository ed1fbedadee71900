/// How a submission was graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was checked; no result is revealed.
    NoSelection,
    Correct,
    Incorrect,
}

impl Outcome {
    /// True when the outcome carries a verdict the screen should reveal.
    pub fn is_graded(self) -> bool {
        matches!(self, Outcome::Correct | Outcome::Incorrect)
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::NoSelection => "Please select an answer",
            Outcome::Correct => "Correct!",
            Outcome::Incorrect => "Incorrect.",
        }
    }
}

/// Outcome of one submission plus the text to display for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub outcome: Outcome,
    pub message: String,
}

impl From<Outcome> for EvaluationResult {
    fn from(outcome: Outcome) -> Self {
        Self {
            outcome,
            message: outcome.message().to_string(),
        }
    }
}
