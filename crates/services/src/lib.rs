#![forbid(unsafe_code)]

pub mod error;
pub mod reply;
pub mod sessions;
pub mod skill_service;

pub use leader_core::RandomSource;
pub use sessions as session;

pub use error::SkillError;
pub use reply::{Card, Reply};
pub use sessions::{Activity, AnswerProgress, QuizProgress, SessionState, SubmitOutcome};
pub use skill_service::{AnswerResult, SkillService};
