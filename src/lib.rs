//! # mcq-prototype
//!
//! A one-question multiple-choice quiz for the terminal.
//!
//! Grading lives in [`evaluate`], a pure function that can be used without
//! any screen at all. [`Quiz`] wraps it in a small terminal screen.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mcq_prototype::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Show the built-in question
//!     Quiz::default().run()?;
//!
//!     // Or load one from a JSON file
//!     Quiz::from_json("question.json")?.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Grading without a screen:
//!
//! ```rust
//! use mcq_prototype::{Outcome, Question, Selection, evaluate};
//!
//! let choices = vec!["Assets minus liabilities".to_string(), "Income".to_string()];
//! let question = Question::new("What is net worth?", choices, 0).unwrap();
//!
//! let result = evaluate(&question, Selection::Choice(1)).unwrap();
//! assert_eq!(result.outcome, Outcome::Incorrect);
//! ```

mod app;
mod data;
mod evaluator;
mod models;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{debug, info};
use rand::Rng;
use thiserror::Error;

pub use app::{App, NOTICE_DURATION, Notice};
pub use data::{LoadError, load_question_from_json, net_worth_question, parse_question};
pub use evaluator::{EvaluateError, evaluate};
pub use models::{EvaluationResult, Outcome, Question, QuestionError, Selection};

/// How long the event loop waits for input before redrawing.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load question: {0}")]
    Load(#[from] LoadError),
    #[error("Failed to grade answer: {0}")]
    Evaluate(#[from] EvaluateError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A single-question quiz that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(question: Question) -> Self {
        Self {
            app: App::new(question),
        }
    }

    /// Load the question from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use mcq_prototype::Quiz;
    ///
    /// let quiz = Quiz::from_json("question.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let question = load_question_from_json(path)?;
        Ok(Self::new(question))
    }

    /// Put the choices in random order before showing them.
    pub fn shuffle_choices<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        let question = self.app.question().shuffled(rng);
        debug!(
            "shuffled choices, correct answer now at {}",
            question.correct_index()
        );
        Self::new(question)
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal until the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new(net_worth_question())
    }
}

fn run_event_loop(
    terminal: &mut terminal::QuizTerminal,
    app: &mut App,
) -> Result<(), QuizError> {
    info!("showing question {:?}", app.question().prompt());

    loop {
        app.expire_notice(Instant::now());
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code)? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the quiz should exit.
fn handle_input(app: &mut App, key: KeyCode) -> Result<bool, EvaluateError> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.highlight_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.highlight_next(),
        KeyCode::Char(' ') => app.check_highlighted(),
        KeyCode::Enter => app.submit()?,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}
