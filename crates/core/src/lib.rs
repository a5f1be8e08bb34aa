#![forbid(unsafe_code)]

pub mod error;
pub mod grading;
pub mod model;
pub mod random;
pub mod selector;
pub mod speech;

pub use error::ContentError;
pub use grading::{AnswerMatch, GradeReport, Grader, MATCH_CUTOFF};
pub use random::RandomSource;
pub use selector::Pool;
