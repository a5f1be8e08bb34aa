use serde::{Deserialize, Serialize};

use leader_core::model::{ContentCatalog, ContentKind};
use leader_core::{ContentError, GradeReport, Grader, Pool, RandomSource};

use super::quiz::QuizProgress;

//
// ─── ACTIVITY ──────────────────────────────────────────────────────────────────
//

/// What the conversation is currently doing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "context", rename_all = "snake_case")]
pub enum Activity {
    #[default]
    Idle,
    Tip,
    Quiz(QuizProgress),
}

/// Result of handing answers to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No quiz question is waiting for answers.
    NoActiveQuestion,
    /// Answers were stored; `remaining` more are needed before grading.
    NeedMore { remaining: usize },
    /// The question was graded and the session is idle again.
    Graded {
        question_index: usize,
        report: GradeReport,
    },
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Everything the skill remembers about one conversation.
///
/// Owned by a single session. The host parks it between turns (it is
/// serde-serializable) and drops it when the session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    remaining_tips: Pool,
    remaining_quiz_questions: Pool,
    #[serde(default)]
    activity: Activity,
}

impl SessionState {
    /// Fresh state with every tip and question still unserved.
    #[must_use]
    pub fn new(catalog: &ContentCatalog) -> Self {
        Self {
            remaining_tips: Pool::full(catalog.tips().len()),
            remaining_quiz_questions: Pool::full(catalog.quiz_questions().len()),
            activity: Activity::Idle,
        }
    }

    #[must_use]
    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    #[must_use]
    pub fn quiz_progress(&self) -> Option<&QuizProgress> {
        match &self.activity {
            Activity::Quiz(progress) => Some(progress),
            _ => None,
        }
    }

    #[must_use]
    pub fn remaining_tips(&self) -> &Pool {
        &self.remaining_tips
    }

    #[must_use]
    pub fn remaining_quiz_questions(&self) -> &Pool {
        &self.remaining_quiz_questions
    }

    /// Draw the next unserved tip and switch to the tip activity.
    ///
    /// Any quiz in progress is abandoned.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::ContentUnavailable` if the catalog has no tips.
    pub fn next_tip(
        &mut self,
        catalog: &ContentCatalog,
        random: &RandomSource,
    ) -> Result<usize, ContentError> {
        let index = self.remaining_tips.pick_next(
            catalog.len_of(ContentKind::Tip),
            ContentKind::Tip,
            random,
        )?;
        self.activity = Activity::Tip;
        Ok(index)
    }

    /// Draw the next unserved quiz question and start collecting answers for it.
    ///
    /// Prior quiz progress is discarded. On error the state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::ContentUnavailable` for an empty quiz and
    /// `ContentError::UnknownQuestionType` for a question with an unknown kind.
    pub fn next_question(
        &mut self,
        catalog: &ContentCatalog,
        random: &RandomSource,
    ) -> Result<usize, ContentError> {
        let mut pool = self.remaining_quiz_questions.clone();
        let index = pool.pick_next(
            catalog.len_of(ContentKind::QuizQuestion),
            ContentKind::QuizQuestion,
            random,
        )?;
        let progress = QuizProgress::start(catalog, index)?;

        self.remaining_quiz_questions = pool;
        self.activity = Activity::Quiz(progress);
        Ok(index)
    }

    /// Make the question at `index` the active one, discarding prior progress.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the question is missing or of unknown kind.
    pub fn start_question(
        &mut self,
        catalog: &ContentCatalog,
        index: usize,
    ) -> Result<(), ContentError> {
        self.activity = Activity::Quiz(QuizProgress::start(catalog, index)?);
        Ok(())
    }

    /// Store answers for the active question and grade once all have arrived.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::UnknownQuestion` if the stored progress points
    /// past the end of the catalog. The state is not modified in that case.
    pub fn submit_answers<I, S>(
        &mut self,
        catalog: &ContentCatalog,
        grader: &Grader,
        answers: I,
    ) -> Result<SubmitOutcome, ContentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Activity::Quiz(progress) = &mut self.activity else {
            return Ok(SubmitOutcome::NoActiveQuestion);
        };

        let question_index = progress.question_index();
        let correct = catalog.quiz_question(question_index)?.answer_values();

        progress.accept(answers);
        if !progress.is_complete() {
            return Ok(SubmitOutcome::NeedMore {
                remaining: progress.remaining(),
            });
        }

        let report = grader.grade(progress.collected(), &correct);
        self.activity = Activity::Idle;

        Ok(SubmitOutcome::Graded {
            question_index,
            report,
        })
    }
}
