//! Shared error types for the services crate.

use thiserror::Error;

use leader_core::ContentError;

/// Errors that abort a conversational turn.
///
/// These come from a broken catalog. The host should answer with a generic
/// apology and keep the session open.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SkillError {
    #[error(transparent)]
    Content(#[from] ContentError),
}
