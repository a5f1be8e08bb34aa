use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

//
// ─── QUESTION KIND ─────────────────────────────────────────────────────────────
//

/// How many answers a quiz question expects.
///
/// Catalog files tag each question with `single_part` or `multi_part`. Any other
/// tag is kept verbatim so that the question only fails once it is started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionKind {
    /// Exactly one answer is expected, whatever the stored answer count.
    SinglePart,
    /// One answer is expected per stored answer.
    MultiPart,
    /// Unrecognised tag from the catalog file.
    Unknown(String),
}

impl QuestionKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            QuestionKind::SinglePart => "single_part",
            QuestionKind::MultiPart => "multi_part",
            QuestionKind::Unknown(raw) => raw,
        }
    }
}

impl From<String> for QuestionKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "single_part" => QuestionKind::SinglePart,
            "multi_part" => QuestionKind::MultiPart,
            _ => QuestionKind::Unknown(raw),
        }
    }
}

impl From<QuestionKind> for String {
    fn from(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::Unknown(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// One accepted answer for a quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSpec {
    pub value: String,
}

impl AnswerSpec {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A quiz question as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(rename = "question")]
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub answers: Vec<AnswerSpec>,
}

impl QuizQuestion {
    #[must_use]
    pub fn new(text: impl Into<String>, kind: QuestionKind, answers: Vec<AnswerSpec>) -> Self {
        Self {
            text: text.into(),
            kind,
            answers,
        }
    }

    #[must_use]
    pub fn single(text: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::new(text, QuestionKind::SinglePart, vec![AnswerSpec::new(answer)])
    }

    #[must_use]
    pub fn multi<I, S>(text: impl Into<String>, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            text,
            QuestionKind::MultiPart,
            answers.into_iter().map(AnswerSpec::new).collect(),
        )
    }

    /// Number of answers the user must give before the question is graded.
    ///
    /// `index` is only used to label the error.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::UnknownQuestionType` for an unrecognised kind tag.
    pub fn expected_responses(&self, index: usize) -> Result<usize, ContentError> {
        match &self.kind {
            QuestionKind::SinglePart => Ok(1),
            QuestionKind::MultiPart => Ok(self.answers.len()),
            QuestionKind::Unknown(kind) => Err(ContentError::UnknownQuestionType {
                index,
                kind: kind.clone(),
            }),
        }
    }

    /// Canonical answer strings in catalog order.
    #[must_use]
    pub fn answer_values(&self) -> Vec<String> {
        self.answers.iter().map(|a| a.value.clone()).collect()
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Which half of the catalog a selection draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Tip,
    QuizQuestion,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Tip => f.write_str("leadership tips"),
            ContentKind::QuizQuestion => f.write_str("quiz questions"),
        }
    }
}

/// Something in the catalog that loads fine but will misbehave at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    NoTips,
    NoQuizQuestions,
    UnknownQuestionType { index: usize, kind: String },
    NoAnswers { index: usize },
    /// Single-part questions are graded against every stored answer, so extra
    /// answers always show up as missing.
    ExtraSinglePartAnswers { index: usize, count: usize },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::NoTips => f.write_str("catalog has no leadership tips"),
            CatalogIssue::NoQuizQuestions => f.write_str("catalog has no quiz questions"),
            CatalogIssue::UnknownQuestionType { index, kind } => {
                write!(f, "quiz question {index} has unknown type {kind:?}")
            }
            CatalogIssue::NoAnswers { index } => write!(f, "quiz question {index} has no answers"),
            CatalogIssue::ExtraSinglePartAnswers { index, count } => write!(
                f,
                "single-part quiz question {index} stores {count} answers"
            ),
        }
    }
}

/// Immutable bank of leadership tips and quiz questions.
///
/// Built once at startup and shared read-only for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCatalog {
    #[serde(rename = "leadership_tips", default)]
    tips: Vec<String>,
    #[serde(rename = "quiz", default)]
    quiz_questions: Vec<QuizQuestion>,
}

impl ContentCatalog {
    #[must_use]
    pub fn new(tips: Vec<String>, quiz_questions: Vec<QuizQuestion>) -> Self {
        Self {
            tips,
            quiz_questions,
        }
    }

    /// Parse a catalog from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Parse` when the document does not match the catalog shape.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a catalog from a JSON reader.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Parse` when the document does not match the catalog shape.
    pub fn from_reader(reader: impl Read) -> Result<Self, ContentError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Io` if the file cannot be opened and
    /// `ContentError::Parse` if its contents are not a catalog.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    #[must_use]
    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    #[must_use]
    pub fn quiz_questions(&self) -> &[QuizQuestion] {
        &self.quiz_questions
    }

    #[must_use]
    pub fn tip(&self, index: usize) -> Option<&str> {
        self.tips.get(index).map(String::as_str)
    }

    /// Look up a quiz question by index.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::UnknownQuestion` when `index` is out of range.
    pub fn quiz_question(&self, index: usize) -> Result<&QuizQuestion, ContentError> {
        self.quiz_questions
            .get(index)
            .ok_or(ContentError::UnknownQuestion { index })
    }

    #[must_use]
    pub fn len_of(&self, content: ContentKind) -> usize {
        match content {
            ContentKind::Tip => self.tips.len(),
            ContentKind::QuizQuestion => self.quiz_questions.len(),
        }
    }

    /// Entries that load fine but will fail or grade oddly once served.
    #[must_use]
    pub fn lint(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        if self.tips.is_empty() {
            issues.push(CatalogIssue::NoTips);
        }
        if self.quiz_questions.is_empty() {
            issues.push(CatalogIssue::NoQuizQuestions);
        }

        for (index, question) in self.quiz_questions.iter().enumerate() {
            if question.answers.is_empty() {
                issues.push(CatalogIssue::NoAnswers { index });
            }
            match &question.kind {
                QuestionKind::Unknown(kind) => issues.push(CatalogIssue::UnknownQuestionType {
                    index,
                    kind: kind.clone(),
                }),
                QuestionKind::SinglePart if question.answers.len() > 1 => {
                    issues.push(CatalogIssue::ExtraSinglePartAnswers {
                        index,
                        count: question.answers.len(),
                    });
                }
                _ => {}
            }
        }

        issues
    }
}
