use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::email::application::ports::outgoing::{EmailSendError, EmailSender};
use crate::modules::contact::application::ports::outgoing::{ContactSubmitter, SubmissionError};
use crate::modules::contact::domain::ContactMessage;

/// Forwards contact messages to the owner's inbox as plain-text mail.
pub struct EmailContactSubmitter {
    sender: Arc<dyn EmailSender + Send + Sync>,
    inbox: String,
}

impl EmailContactSubmitter {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, inbox: &str) -> Self {
        Self {
            sender,
            inbox: inbox.to_string(),
        }
    }

    fn subject(message: &ContactMessage) -> String {
        format!("[Portfolio] {}", message.subject)
    }

    fn body(message: &ContactMessage) -> String {
        format!(
            "From: {} <{}>\nSubject: {}\n\n{}\n",
            message.name, message.email, message.subject, message.message
        )
    }
}

impl From<EmailSendError> for SubmissionError {
    fn from(err: EmailSendError) -> Self {
        match err {
            EmailSendError::InvalidAddress(msg) => SubmissionError::Rejected(msg),
            EmailSendError::Build(msg) | EmailSendError::Transport(msg) => {
                SubmissionError::Transport(msg)
            }
        }
    }
}

#[async_trait]
impl ContactSubmitter for EmailContactSubmitter {
    async fn submit(&self, message: ContactMessage) -> Result<(), SubmissionError> {
        self.sender
            .send_email(
                &self.inbox,
                Some(&message.email),
                &Self::subject(&message),
                &Self::body(&message),
            )
            .await?;

        info!(inbox = %self.inbox, "Contact message forwarded by email");
        Ok(())
    }
}
