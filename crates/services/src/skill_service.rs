use std::sync::Arc;

use tracing::{debug, error, info, warn};

use leader_core::model::ContentCatalog;
use leader_core::speech;
use leader_core::{GradeReport, Grader, RandomSource};

use crate::error::SkillError;
use crate::reply::Reply;
use crate::sessions::{SessionState, SubmitOutcome};

/// Result of submitting answers in a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub reply: Reply,
    /// Answers still owed on the active question (zero once graded).
    pub remaining: usize,
    /// Present when this turn completed and graded the question.
    pub report: Option<GradeReport>,
}

/// Entry points the host calls for each conversational turn.
///
/// Holds only read-only collaborators, so one instance can serve any number
/// of sessions. Per-session data lives in the `SessionState` the host passes in.
#[derive(Debug)]
pub struct SkillService {
    catalog: Arc<ContentCatalog>,
    random: RandomSource,
    grader: Grader,
}

impl SkillService {
    /// Build the service and log catalog entries that will misbehave.
    #[must_use]
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        for issue in catalog.lint() {
            warn!(%issue, "catalog entry will not behave as expected");
        }
        Self {
            catalog,
            random: RandomSource::default_source(),
            grader: Grader::default(),
        }
    }

    #[must_use]
    pub fn with_random(mut self, random: RandomSource) -> Self {
        self.random = random;
        self
    }

    #[must_use]
    pub fn with_grader(mut self, grader: Grader) -> Self {
        self.grader = grader;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Open a session: fresh state plus the launch menu.
    #[must_use]
    pub fn on_session_start(&self) -> (Reply, SessionState) {
        let state = SessionState::new(&self.catalog);
        debug!(
            tips = state.remaining_tips().len(),
            questions = state.remaining_quiz_questions().len(),
            "session started"
        );
        let reply = Reply::ask(speech::LAUNCH_PROMPT).with_reprompt(speech::LAUNCH_REPROMPT);
        (reply, state)
    }

    /// Serve the next tip the user has not heard this session.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::Content` if the catalog has no tips.
    pub fn on_request_tip(&self, state: &mut SessionState) -> Result<Reply, SkillError> {
        let index = state.next_tip(&self.catalog, &self.random)?;
        let tip = self.catalog.tip(index).unwrap_or_default();
        debug!(index, remaining = state.remaining_tips().len(), "serving tip");

        Ok(Reply::ask(speech::tip_speech(tip))
            .with_reprompt(speech::TIP_FOLLOW_UP)
            .with_card(speech::CARD_TITLE, tip))
    }

    /// Ask the next unserved quiz question.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::Content` for an empty quiz or a question with an
    /// unknown kind. The session state is unchanged in both cases.
    pub fn on_start_quiz(&self, state: &mut SessionState) -> Result<Reply, SkillError> {
        let index = state.next_question(&self.catalog, &self.random)?;
        let question = self.catalog.quiz_question(index)?;
        debug!(
            index,
            kind = %question.kind,
            remaining = state.remaining_quiz_questions().len(),
            "asking quiz question"
        );

        Ok(Reply::ask(question.text.clone()))
    }

    /// Collect answers for the active question and grade once all are in.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::Content` if the stored progress refers to a
    /// question the catalog no longer has.
    pub fn on_submit_answers<I, S>(
        &self,
        state: &mut SessionState,
        answers: I,
    ) -> Result<AnswerResult, SkillError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let outcome = state.submit_answers(&self.catalog, &self.grader, answers)?;

        let result = match outcome {
            SubmitOutcome::NoActiveQuestion => {
                debug!("answers received with no active question");
                AnswerResult {
                    reply: Reply::ask(speech::NO_ACTIVE_QUESTION),
                    remaining: 0,
                    report: None,
                }
            }
            SubmitOutcome::NeedMore { remaining } => {
                debug!(remaining, "waiting for more answers");
                AnswerResult {
                    reply: Reply::ask(speech::need_more_answers(remaining)),
                    remaining,
                    report: None,
                }
            }
            SubmitOutcome::Graded {
                question_index,
                report,
            } => {
                info!(
                    question_index,
                    all_correct = report.all_correct,
                    correct = report.correct.len(),
                    incorrect = report.incorrect.len(),
                    missing = report.missing.len(),
                    "graded quiz answers"
                );
                let text = format!(
                    "{} {}",
                    speech::grade_summary(&report),
                    speech::CONTINUE_PROMPT
                );
                AnswerResult {
                    reply: Reply::ask(text),
                    remaining: 0,
                    report: Some(report),
                }
            }
        };

        Ok(result)
    }

    #[must_use]
    pub fn on_help(&self) -> Reply {
        Reply::ask(speech::HELP)
    }

    #[must_use]
    pub fn on_stop(&self) -> Reply {
        Reply::tell(speech::GOODBYE)
    }

    #[must_use]
    pub fn on_cancel(&self) -> Reply {
        Reply::tell(speech::GOODBYE)
    }

    /// Reply the host can speak when a turn was aborted by a `SkillError`.
    #[must_use]
    pub fn on_error(&self, err: &SkillError) -> Reply {
        error!(error = %err, "turn aborted");
        Reply::ask(speech::APOLOGY).with_reprompt(speech::LAUNCH_PROMPT)
    }

    /// Tear down a finished session.
    pub fn on_session_end(&self, state: SessionState) {
        debug!(activity = ?state.activity(), "session ended");
    }
}
