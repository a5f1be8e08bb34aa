use thiserror::Error;

use crate::model::ContentKind;

/// Errors raised by the content catalog and the selectors built on it.
///
/// These are configuration problems. Wrong answers are never reported here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("quiz question {index} has unknown question type {kind:?}")]
    UnknownQuestionType { index: usize, kind: String },

    #[error("no {content} available in the catalog")]
    ContentUnavailable { content: ContentKind },

    #[error("quiz question {index} does not exist")]
    UnknownQuestion { index: usize },

    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
