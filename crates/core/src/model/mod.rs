mod catalog;

pub use catalog::{
    AnswerSpec, CatalogIssue, ContentCatalog, ContentKind, QuestionKind, QuizQuestion,
};
