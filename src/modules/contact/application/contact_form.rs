use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{info, warn};

use crate::modules::contact::application::ports::outgoing::{ContactSubmitter, SubmissionError};
use crate::modules::contact::domain::{Acknowledgment, ContactField, FormState};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, thiserror::Error)]
pub enum ContactFormError {
    #[error("Missing required fields: {}", field_list(.0))]
    MissingFields(Vec<ContactField>),

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("Submission failed: {source}")]
    Submission {
        source: SubmissionError,
        ack: Acknowledgment,
    },
}

fn field_list(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(ContactField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

//
// ──────────────────────────────────────────────────────────
// Form
// ──────────────────────────────────────────────────────────
//

/// Contact form state plus its submission lifecycle.
///
/// Clones share the same state, so a pending submission is visible
/// through any handle.
#[derive(Clone)]
pub struct ContactForm {
    state: Arc<Mutex<FormState>>,
    submitter: Arc<dyn ContactSubmitter + Send + Sync>,
}

/// Clears `submitting` even if the submit future is dropped mid-flight.
struct SubmittingGuard<'a> {
    form: &'a ContactForm,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.form.lock().submitting = false;
    }
}

impl ContactForm {
    pub fn new(submitter: Arc<dyn ContactSubmitter + Send + Sync>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::default())),
            submitter,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> FormState {
        self.lock().clone()
    }

    pub fn set_field(&self, field: ContactField, value: impl Into<String>) {
        self.lock().set(field, value);
    }

    pub fn missing_fields(&self) -> Vec<ContactField> {
        self.lock().missing_fields()
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().submitting
    }

    pub fn can_submit(&self) -> bool {
        let state = self.lock();
        !state.submitting && state.missing_fields().is_empty() && state.has_valid_email()
    }

    /// Sends the current fields through the submitter.
    ///
    /// Refusals never reach the submitter. On success the four fields are
    /// cleared; on failure they are kept for a retry.
    pub async fn submit(&self) -> Result<Acknowledgment, ContactFormError> {
        let message = {
            let mut state = self.lock();
            if state.submitting {
                return Err(ContactFormError::AlreadySubmitting);
            }
            let missing = state.missing_fields();
            if !missing.is_empty() {
                return Err(ContactFormError::MissingFields(missing));
            }
            if !state.has_valid_email() {
                return Err(ContactFormError::InvalidEmail);
            }
            state.submitting = true;
            state.to_message()
        };

        let _guard = SubmittingGuard { form: self };

        match self.submitter.submit(message).await {
            Ok(()) => {
                self.lock().clear_fields();
                info!("Contact message submitted");
                Ok(Acknowledgment::sent())
            }
            Err(err) => {
                warn!(error = %err, "Contact submission failed, keeping form contents");
                Err(ContactFormError::Submission {
                    source: err,
                    ack: Acknowledgment::failed(),
                })
            }
        }
    }
}
