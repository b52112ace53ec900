//! Multiple-choice quiz session.

use rand::seq::SliceRandom;
use rand::Rng;

/// Lifecycle of a choice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceState {
    /// Accepting the first answer.
    Open,
    /// Terminal: an answer was honored.
    Answered,
    /// Terminal: the timeout fired with no answer.
    Expired,
}

/// Outcome of offering a selection to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The selection was honored and graded.
    Graded {
        /// Whether the selected option matched the correct answer.
        correct: bool,
    },
    /// The session had already reached a terminal state; the selection is
    /// rejected, not silently processed.
    AlreadyClosed,
}

/// A quiz bound to one message: a question, a correct answer, and shuffled
/// options rendered as one control each.
#[derive(Debug, Clone)]
pub struct ChoiceSession {
    question: String,
    correct_answer: String,
    options: Vec<String>,
    state: ChoiceState,
}

impl ChoiceSession {
    /// Builds a session from the correct answer and its distractors,
    /// shuffling the combined options with a uniform permutation.
    ///
    /// The rng is injected so tests can fix the permutation.
    pub fn new<R: Rng>(
        question: impl Into<String>,
        correct_answer: impl Into<String>,
        distractors: Vec<String>,
        rng: &mut R,
    ) -> Self {
        let correct_answer = correct_answer.into();
        let mut options = distractors;
        options.push(correct_answer.clone());
        options.shuffle(rng);
        Self {
            question: question.into(),
            correct_answer,
            options,
            state: ChoiceState::Open,
        }
    }

    /// The question text.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The correct answer text.
    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// The shuffled options, one per rendered control.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ChoiceState {
        self.state
    }

    /// Option text for a control index, if in range.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Offers a selection. Exactly one selection is ever honored; the check
    /// and the transition happen in one step, so a later arrival observes
    /// [`SelectOutcome::AlreadyClosed`].
    pub fn select(&mut self, option: &str) -> SelectOutcome {
        if self.state != ChoiceState::Open {
            return SelectOutcome::AlreadyClosed;
        }
        self.state = ChoiceState::Answered;
        SelectOutcome::Graded {
            correct: option == self.correct_answer,
        }
    }

    /// Fires the timeout. Returns `true` if the session expired now; `false`
    /// when a terminal state was already reached, which suppresses the
    /// "time's up" finalization entirely.
    pub fn expire(&mut self) -> bool {
        if self.state != ChoiceState::Open {
            return false;
        }
        self.state = ChoiceState::Expired;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn capitals_session() -> ChoiceSession {
        let mut rng = StepRng::new(0, 1);
        ChoiceSession::new(
            "Capital of France?",
            "Paris",
            vec!["London".to_string(), "Berlin".to_string()],
            &mut rng,
        )
    }

    #[test]
    fn options_contain_correct_answer_exactly_once() {
        let session = capitals_session();
        assert_eq!(session.options().len(), 3);
        let hits = session
            .options()
            .iter()
            .filter(|option| option.as_str() == "Paris")
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn correct_selection_is_graded_correct() {
        let mut session = capitals_session();
        assert_eq!(
            session.select("Paris"),
            SelectOutcome::Graded { correct: true }
        );
        assert_eq!(session.state(), ChoiceState::Answered);
    }

    #[test]
    fn incorrect_selection_is_graded_incorrect() {
        let mut session = capitals_session();
        assert_eq!(
            session.select("Berlin"),
            SelectOutcome::Graded { correct: false }
        );
        assert_eq!(session.correct_answer(), "Paris");
        assert_eq!(session.state(), ChoiceState::Answered);
    }

    #[test]
    fn second_selection_is_rejected_not_processed() {
        let mut session = capitals_session();
        session.select("Paris");
        assert_eq!(session.select("Berlin"), SelectOutcome::AlreadyClosed);
        assert_eq!(session.state(), ChoiceState::Answered);
    }

    #[test]
    fn answering_cancels_the_pending_timeout() {
        let mut session = capitals_session();
        session.select("Paris");
        assert!(!session.expire());
        assert_eq!(session.state(), ChoiceState::Answered);
    }

    #[test]
    fn timeout_expires_an_open_session_once() {
        let mut session = capitals_session();
        assert!(session.expire());
        assert_eq!(session.state(), ChoiceState::Expired);
        assert!(!session.expire());
    }

    #[test]
    fn grading_is_final_even_when_the_message_edit_fails() {
        // Finalizing edits are best-effort; an edit failure leaves no trace
        // in the session, so nothing reopens and the timeout stays cancelled.
        let mut session = capitals_session();
        assert_eq!(
            session.select("Paris"),
            SelectOutcome::Graded { correct: true }
        );
        assert!(!session.expire());
        assert_eq!(session.select("Paris"), SelectOutcome::AlreadyClosed);
        assert_eq!(session.state(), ChoiceState::Answered);
    }

    #[test]
    fn selection_after_expiry_is_a_no_op() {
        let mut session = capitals_session();
        session.expire();
        assert_eq!(session.select("Paris"), SelectOutcome::AlreadyClosed);
        assert_eq!(session.state(), ChoiceState::Expired);
    }
}
