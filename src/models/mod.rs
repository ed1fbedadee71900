mod evaluation;
mod question;

pub use evaluation::{EvaluationResult, Outcome};
pub use question::{Question, QuestionError, Selection};
