use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

/// In-progress contact submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitting: bool,
}

impl FormState {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Required fields that are empty or whitespace only, in form order.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }

    pub fn has_valid_email(&self) -> bool {
        EmailAddress::is_valid(self.email.trim())
    }

    pub fn clear_fields(&mut self) {
        for field in ContactField::ALL {
            self.field_mut(field).clear();
        }
    }

    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Payload handed to the submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AckStatus {
    Sent,
    Failed,
}

/// User-visible outcome of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgment {
    pub status: AckStatus,
    pub title: String,
    pub description: String,
}

impl Acknowledgment {
    pub fn sent() -> Self {
        Self {
            status: AckStatus::Sent,
            title: "Message Sent!".to_string(),
            description: "Thank you for reaching out. I'll get back to you soon!".to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            status: AckStatus::Failed,
            title: "Message Not Sent".to_string(),
            description: "Something went wrong while sending your message. Your text is still in the form, please try again."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's talk".to_string(),
            submitting: false,
        }
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let mut state = filled();
        state.set(ContactField::Subject, "   ");
        state.set(ContactField::Name, "");

        assert_eq!(
            state.missing_fields(),
            vec![ContactField::Name, ContactField::Subject]
        );
    }

    #[test]
    fn email_must_parse() {
        let mut state = filled();
        assert!(state.has_valid_email());

        state.set(ContactField::Email, "not an email");
        assert!(!state.has_valid_email());
    }

    #[test]
    fn clearing_leaves_submitting_flag_alone() {
        let mut state = filled();
        state.submitting = true;
        state.clear_fields();

        assert_eq!(state.missing_fields().len(), 4);
        assert!(state.submitting);
    }

    #[test]
    fn message_is_trimmed() {
        let mut state = filled();
        state.set(ContactField::Name, "  Ada  ");

        assert_eq!(state.to_message().name, "Ada");
    }
}
