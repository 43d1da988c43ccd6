use async_trait::async_trait;

use crate::modules::contact::domain::ContactMessage;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Submission transport failed: {0}")]
    Transport(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Delivers a contact message somewhere the site owner will read it.
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    async fn submit(&self, message: ContactMessage) -> Result<(), SubmissionError>;
}
