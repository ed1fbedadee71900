use std::time::{Duration, Instant};

use log::{debug, info};

use crate::evaluator::{EvaluateError, evaluate};
use crate::models::{EvaluationResult, Question, Selection};

/// How long the "please select" notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(2);

/// A short-lived message shown over the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    shown_at: Instant,
}

impl Notice {
    fn new(message: impl Into<String>, shown_at: Instant) -> Self {
        Self {
            message: message.into(),
            shown_at,
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTICE_DURATION
    }
}

/// State of the single question screen.
pub struct App {
    question: Question,
    highlighted: usize,
    checked: Option<usize>,
    result: Option<EvaluationResult>,
    notice: Option<Notice>,
}

impl App {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            highlighted: 0,
            checked: None,
            result: None,
            notice: None,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn checked(&self) -> Option<usize> {
        self.checked
    }

    /// The revealed result, if a graded answer has been submitted.
    pub fn result(&self) -> Option<&EvaluationResult> {
        self.result.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn highlight_next(&mut self) {
        let len = self.question.choices().len();
        self.highlighted = (self.highlighted + 1) % len;
    }

    pub fn highlight_previous(&mut self) {
        let len = self.question.choices().len();
        self.highlighted = (self.highlighted + len - 1) % len;
    }

    /// Check the highlighted choice, unchecking any other.
    pub fn check_highlighted(&mut self) {
        self.checked = Some(self.highlighted);
        debug!("checked choice {}", self.highlighted);
    }

    pub fn submit(&mut self) -> Result<(), EvaluateError> {
        self.submit_at(Instant::now())
    }

    fn submit_at(&mut self, now: Instant) -> Result<(), EvaluateError> {
        let selection = Selection::from(self.checked);
        let evaluation = evaluate(&self.question, selection)?;
        info!("submitted {:?}: {:?}", selection, evaluation.outcome);

        if evaluation.outcome.is_graded() {
            self.notice = None;
            self.result = Some(evaluation);
        } else {
            self.notice = Some(Notice::new(evaluation.message, now));
        }
        Ok(())
    }

    /// Drop the notice once it has been visible for [`NOTICE_DURATION`].
    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|notice| notice.is_expired(now)) {
            debug!("notice expired");
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::net_worth_question;
    use crate::models::Outcome;

    #[test]
    fn test_highlight_wraps() {
        let mut app = App::new(net_worth_question());
        let len = app.question().choices().len();

        app.highlight_previous();
        assert_eq!(app.highlighted(), len - 1);
        app.highlight_next();
        assert_eq!(app.highlighted(), 0);
    }

    #[test]
    fn test_submit_without_selection_shows_notice() {
        let mut app = App::new(net_worth_question());
        app.submit().unwrap();

        assert!(app.result().is_none());
        assert_eq!(
            app.notice().map(|n| n.message.as_str()),
            Some("Please select an answer")
        );
    }

    #[test]
    fn test_submit_correct_answer() {
        let mut app = App::new(net_worth_question());
        app.check_highlighted();
        app.submit().unwrap();

        let result = app.result().unwrap();
        assert_eq!(result.outcome, Outcome::Correct);
        assert_eq!(result.message, "Correct!");
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_resubmit_after_changing_answer() {
        let mut app = App::new(net_worth_question());
        app.highlight_next();
        app.check_highlighted();
        app.submit().unwrap();
        assert_eq!(app.result().unwrap().outcome, Outcome::Incorrect);

        app.highlight_previous();
        app.check_highlighted();
        assert_eq!(app.checked(), Some(0));
        app.submit().unwrap();
        assert_eq!(app.result().unwrap().outcome, Outcome::Correct);
    }

    #[test]
    fn test_notice_expires() {
        let mut app = App::new(net_worth_question());
        let start = Instant::now();
        app.submit_at(start).unwrap();

        app.expire_notice(start + Duration::from_millis(500));
        assert!(app.notice().is_some());

        app.expire_notice(start + NOTICE_DURATION);
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_graded_submit_clears_notice() {
        let mut app = App::new(net_worth_question());
        app.submit().unwrap();
        assert!(app.notice().is_some());

        app.check_highlighted();
        app.submit().unwrap();
        assert!(app.notice().is_none());
        assert!(app.result().is_some());
    }
}
