mod progress;
mod quiz;
mod state;

// Public API of the session subsystem.
pub use progress::AnswerProgress;
pub use quiz::QuizProgress;
pub use state::{Activity, SessionState, SubmitOutcome};
