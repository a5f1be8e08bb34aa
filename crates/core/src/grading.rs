use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use difflib::sequencematcher::SequenceMatcher;

/// Default similarity a spoken answer needs to count as a known answer.
pub const MATCH_CUTOFF: f32 = 0.8;

/// A submitted answer paired with the known answer it was accepted as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerMatch {
    pub submitted: String,
    pub expected: String,
}

/// Outcome of grading one set of answers.
///
/// Wrong and missing answers are ordinary data here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeReport {
    pub all_correct: bool,
    /// Accepted answers in submission order.
    pub correct: Vec<AnswerMatch>,
    /// Submitted answers that matched nothing still open.
    pub incorrect: Vec<String>,
    /// Known answers nobody claimed, in catalog order.
    pub missing: Vec<String>,
}

impl GradeReport {
    /// Submitted strings that were accepted, in submission order.
    #[must_use]
    pub fn correct_submissions(&self) -> Vec<&str> {
        self.correct.iter().map(|m| m.submitted.as_str()).collect()
    }

    /// The known answer accepted for `submitted`, if any.
    #[must_use]
    pub fn matched(&self, submitted: &str) -> Option<&str> {
        self.correct
            .iter()
            .find(|m| m.submitted == submitted)
            .map(|m| m.expected.as_str())
    }
}

/// Fuzzy answer grader.
///
/// Each submission, in order, claims the closest still-unclaimed known answer
/// whose similarity reaches the cutoff. A claimed answer cannot be matched
/// again, so repeating one correct word does not fill two slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grader {
    cutoff: f32,
}

impl Default for Grader {
    fn default() -> Self {
        Self {
            cutoff: MATCH_CUTOFF,
        }
    }
}

impl Grader {
    /// Grader with a custom cutoff. Values outside `(0, 1]` are clamped.
    #[must_use]
    pub fn with_cutoff(cutoff: f32) -> Self {
        let cutoff = if cutoff.is_finite() {
            cutoff.clamp(f32::EPSILON, 1.0)
        } else {
            MATCH_CUTOFF
        };
        Self { cutoff }
    }

    #[must_use]
    pub fn cutoff(&self) -> f32 {
        self.cutoff
    }

    /// Grade `submitted` answers against the known `correct` answers.
    #[must_use]
    pub fn grade<S: AsRef<str>>(&self, submitted: &[S], correct: &[String]) -> GradeReport {
        let mut pool: Vec<String> = correct.to_vec();
        let mut report = GradeReport::default();

        for answer in submitted {
            let answer = answer.as_ref();
            match self.best_match(answer, &pool) {
                Some(slot) => {
                    let expected = pool.remove(slot);
                    report.correct.push(AnswerMatch {
                        submitted: answer.to_owned(),
                        expected,
                    });
                }
                None => report.incorrect.push(answer.to_owned()),
            }
        }

        report.missing = pool;
        report.all_correct = report.incorrect.is_empty() && report.missing.is_empty();
        report
    }

    /// Position in `candidates` of the closest match at or above the cutoff.
    ///
    /// Equal scores go to the lexicographically greater candidate.
    #[must_use]
    pub fn best_match(&self, answer: &str, candidates: &[String]) -> Option<usize> {
        candidates
            .iter()
            .enumerate()
            .map(|(slot, candidate)| (slot, candidate, similarity(candidate, answer)))
            .filter(|(_, _, score)| *score >= self.cutoff)
            .max_by(|(_, a, sa), (_, b, sb)| {
                sa.partial_cmp(sb)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.cmp(b))
            })
            .map(|(slot, _, _)| slot)
    }
}

/// Ratcliff/Obershelp similarity of `submitted` against a known `candidate`,
/// in `[0, 1]`.
///
/// The longest common block is matched first, then the pieces on either side
/// of it, recursively; the score is twice the matched characters over the
/// combined length. Case-sensitive. Two empty strings score 1.
#[must_use]
pub fn similarity(candidate: &str, submitted: &str) -> f32 {
    let candidate: Vec<char> = candidate.chars().collect();
    let submitted: Vec<char> = submitted.chars().collect();
    SequenceMatcher::new(&candidate, &submitted).ratio()
}
