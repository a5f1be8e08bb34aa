use serde::{Deserialize, Serialize};

use leader_core::ContentError;
use leader_core::model::{ContentCatalog, QuestionKind};

use super::progress::AnswerProgress;

/// Answers collected so far for the active quiz question.
///
/// `collected` never grows past `expected`; the question is ready for grading
/// exactly when the two are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizProgress {
    question_index: usize,
    kind: QuestionKind,
    expected: usize,
    collected: Vec<String>,
}

impl QuizProgress {
    /// Begin tracking answers for the question at `question_index`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::UnknownQuestion` if the index is out of range and
    /// `ContentError::UnknownQuestionType` if the question kind is not recognised.
    pub fn start(catalog: &ContentCatalog, question_index: usize) -> Result<Self, ContentError> {
        let question = catalog.quiz_question(question_index)?;
        let expected = question.expected_responses(question_index)?;

        Ok(Self {
            question_index,
            kind: question.kind.clone(),
            expected,
            collected: Vec::with_capacity(expected),
        })
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    #[must_use]
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    #[must_use]
    pub fn expected(&self) -> usize {
        self.expected
    }

    #[must_use]
    pub fn collected(&self) -> &[String] {
        &self.collected
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.expected.saturating_sub(self.collected.len())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.collected.len() >= self.expected
    }

    #[must_use]
    pub fn progress(&self) -> AnswerProgress {
        AnswerProgress {
            expected: self.expected,
            collected: self.collected.len(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    /// Append answers in order, exactly as given, and return how many were kept.
    ///
    /// Blank answers are skipped (unfilled slots arrive as empty strings) and
    /// anything beyond the remaining count is dropped.
    pub fn accept<I, S>(&mut self, answers: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.collected.len();
        let room = self.remaining();
        self.collected.extend(
            answers
                .into_iter()
                .map(Into::<String>::into)
                .filter(|answer| !answer.trim().is_empty())
                .take(room),
        );
        self.collected.len() - before
    }
}

#[cfg(test)]
mod tests {
    use leader_core::model::{AnswerSpec, QuizQuestion};
    use proptest::prelude::*;

    use super::*;

    fn catalog() -> ContentCatalog {
        ContentCatalog::new(
            vec!["tip".into()],
            vec![
                QuizQuestion::new(
                    "Which trait matters most?",
                    QuestionKind::SinglePart,
                    vec![AnswerSpec::new("integrity"), AnswerSpec::new("honesty")],
                ),
                QuizQuestion::multi("Name the parts.", ["alpha", "beta", "gamma"]),
                QuizQuestion::new("Essay", QuestionKind::Unknown("essay".into()), Vec::new()),
            ],
        )
    }

    #[test]
    fn single_part_expects_one_answer() {
        let progress = QuizProgress::start(&catalog(), 0).unwrap();
        assert_eq!(progress.expected(), 1);
        assert_eq!(progress.kind(), &QuestionKind::SinglePart);
        assert!(progress.collected().is_empty());
    }

    #[test]
    fn multi_part_expects_every_answer() {
        let progress = QuizProgress::start(&catalog(), 1).unwrap();
        assert_eq!(progress.expected(), 3);
        assert_eq!(progress.remaining(), 3);
    }

    #[test]
    fn unknown_kind_fails_to_start() {
        let err = QuizProgress::start(&catalog(), 2).unwrap_err();
        assert!(matches!(err, ContentError::UnknownQuestionType { index: 2, .. }));
        assert!(matches!(
            QuizProgress::start(&catalog(), 9),
            Err(ContentError::UnknownQuestion { index: 9 })
        ));
    }

    #[test]
    fn answers_accumulate_across_turns() {
        let mut progress = QuizProgress::start(&catalog(), 1).unwrap();

        assert_eq!(progress.accept(["alpha"]), 1);
        assert_eq!(
            progress.progress(),
            AnswerProgress {
                expected: 3,
                collected: 1,
                remaining: 2,
                is_complete: false,
            }
        );

        assert_eq!(progress.accept(["beta", "gamma"]), 2);
        assert!(progress.is_complete());
        assert_eq!(progress.collected(), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn blanks_are_skipped_and_overflow_dropped() {
        let mut progress = QuizProgress::start(&catalog(), 0).unwrap();

        assert_eq!(progress.accept(["", "  "]), 0);
        assert_eq!(progress.remaining(), 1);

        assert_eq!(progress.accept(["honesty", "integrity"]), 1);
        assert_eq!(progress.collected(), ["honesty"]);
        assert_eq!(progress.accept(["more"]), 0);
    }

    #[test]
    fn answers_are_kept_verbatim() {
        let mut progress = QuizProgress::start(&catalog(), 1).unwrap();

        assert_eq!(progress.accept([" Alpha ", "", "beta\t"]), 2);
        assert_eq!(progress.collected(), [" Alpha ", "beta\t"]);
    }

    proptest! {
        #[test]
        fn collected_never_exceeds_expected(
            turns in proptest::collection::vec(
                proptest::collection::vec("[a-z ]{0,6}", 0..5),
                0..8,
            ),
        ) {
            let mut progress = QuizProgress::start(&catalog(), 1).unwrap();
            for turn in turns {
                let before = progress.collected().len();
                let kept = progress.accept(turn);
                prop_assert_eq!(progress.collected().len(), before + kept);
                prop_assert!(progress.collected().len() <= progress.expected());
                prop_assert_eq!(progress.is_complete(), progress.remaining() == 0);
            }
        }
    }
}
