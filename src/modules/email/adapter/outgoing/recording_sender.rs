use crate::email::application::ports::outgoing::{EmailSendError, EmailSender};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct SentEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
}

/// Keeps sent mail in memory, or fails every send when built with `failing`.
#[derive(Clone, Default)]
pub struct RecordingEmailSender {
    sent_emails: Arc<Mutex<Vec<SentEmail>>>,
    failure: Option<EmailSendError>,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: EmailSendError) -> Self {
        Self {
            sent_emails: Arc::default(),
            failure: Some(error),
        }
    }

    pub fn get_sent_emails(&self) -> Vec<SentEmail> {
        self.sent_emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send_email(
        &self,
        to: &str,
        reply_to: Option<&str>,
        subject: &str,
        body: &str,
    ) -> Result<(), EmailSendError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        self.sent_emails.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            reply_to: reply_to.map(str::to_string),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
