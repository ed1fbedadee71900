//! Answer grading.
//!
//! Grading is a pure function of the question and the current selection, so
//! it can be exercised without a terminal or any screen state.

use thiserror::Error;

use crate::models::{EvaluationResult, Outcome, Question, Selection};

/// Error type for grading a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateError {
    /// The selection points past the end of the question's choices.
    #[error("selected choice {index} does not exist (question has {len} choices)")]
    InvalidSelection { index: usize, len: usize },
}

/// Grade `selection` against `question`.
///
/// The selected choice is compared to the correct choice by exact text, so a
/// distractor spelled identically to the answer also grades as correct, while
/// a difference in case or whitespace grades as incorrect.
pub fn evaluate(
    question: &Question,
    selection: Selection,
) -> Result<EvaluationResult, EvaluateError> {
    let index = match selection {
        Selection::None => return Ok(Outcome::NoSelection.into()),
        Selection::Choice(index) => index,
    };

    let answer = question
        .choice(index)
        .ok_or(EvaluateError::InvalidSelection {
            index,
            len: question.choices().len(),
        })?;

    let outcome = if answer == question.correct_choice() {
        Outcome::Correct
    } else {
        Outcome::Incorrect
    };

    Ok(outcome.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::net_worth_question;

    fn question(texts: &[&str], correct: usize) -> Question {
        let choices = texts.iter().map(|text| text.to_string()).collect();
        Question::new("Which one?", choices, correct).unwrap()
    }

    fn index_of(question: &Question, text: &str) -> usize {
        question.choices().iter().position(|c| c == text).unwrap()
    }

    #[test]
    fn test_correct_choice_is_correct() {
        let question = question(&["a", "b", "c"], 2);
        let result = evaluate(&question, Selection::Choice(2)).unwrap();
        assert_eq!(result.outcome, Outcome::Correct);
        assert_eq!(result.message, "Correct!");
    }

    #[test]
    fn test_every_other_choice_is_incorrect() {
        let question = question(&["a", "b", "c", "d"], 1);
        for index in [0, 2, 3] {
            let result = evaluate(&question, Selection::Choice(index)).unwrap();
            assert_eq!(result.outcome, Outcome::Incorrect);
            assert_eq!(result.message, "Incorrect.");
        }
    }

    #[test]
    fn test_no_selection() {
        for correct in 0..3 {
            let question = question(&["a", "b", "c"], correct);
            let result = evaluate(&question, Selection::None).unwrap();
            assert_eq!(result.outcome, Outcome::NoSelection);
            assert!(!result.outcome.is_graded());
        }
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let question = question(&["a", "b"], 0);
        for selection in [Selection::None, Selection::Choice(0), Selection::Choice(1)] {
            let first = evaluate(&question, selection);
            let second = evaluate(&question, selection);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_out_of_range_selection() {
        let question = question(&["a", "b"], 0);
        let err = evaluate(&question, Selection::Choice(5)).unwrap_err();
        assert_eq!(err, EvaluateError::InvalidSelection { index: 5, len: 2 });
    }

    #[test]
    fn test_duplicate_text_counts_as_correct() {
        let question = question(&["same", "other", "same"], 0);
        let result = evaluate(&question, Selection::Choice(2)).unwrap();
        assert_eq!(result.outcome, Outcome::Correct);
    }

    #[test]
    fn test_net_worth_correct() {
        let question = net_worth_question();
        let index = index_of(&question, "Your total assets minus your total liabilities.");
        let result = evaluate(&question, Selection::Choice(index)).unwrap();
        assert_eq!(result.outcome, Outcome::Correct);
    }

    #[test]
    fn test_net_worth_monthly_income_is_incorrect() {
        let question = net_worth_question();
        let index = index_of(&question, "Your monthly income.");
        let result = evaluate(&question, Selection::Choice(index)).unwrap();
        assert_eq!(result.outcome, Outcome::Incorrect);
    }

    #[test]
    fn test_net_worth_nothing_selected() {
        let result = evaluate(&net_worth_question(), Selection::None).unwrap();
        assert_eq!(result.outcome, Outcome::NoSelection);
        assert_eq!(result.message, "Please select an answer");
    }

    #[test]
    fn test_comparison_is_exact() {
        let question = question(
            &[
                "Your total assets minus your total liabilities.",
                "your total assets minus your total liabilities.",
                "Your total assets minus your total liabilities. ",
            ],
            0,
        );
        for index in [1, 2] {
            let result = evaluate(&question, Selection::Choice(index)).unwrap();
            assert_eq!(result.outcome, Outcome::Incorrect);
        }
    }
}
