use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::{ContactForm, ContactFormError};
use crate::modules::contact::domain::{AckStatus, Acknowledgment, ContactField};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

/// Contact form payload
#[derive(Deserialize, ToSchema)]
pub struct ContactRequestDto {
    /// Sender's full name
    #[schema(example = "Ada Lovelace")]
    #[serde(default)]
    pub name: String,

    /// Reply address
    #[schema(example = "ada@example.com")]
    #[serde(default)]
    pub email: String,

    #[schema(example = "Project inquiry")]
    #[serde(default)]
    pub subject: String,

    #[schema(example = "I'd like to talk about a project.")]
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct AcknowledgmentDto {
    /// `sent` or `failed`
    #[schema(example = "sent")]
    pub status: String,

    #[schema(example = "Message Sent!")]
    pub title: String,

    #[schema(example = "Thank you for reaching out. I'll get back to you soon!")]
    pub description: String,
}

impl From<Acknowledgment> for AcknowledgmentDto {
    fn from(ack: Acknowledgment) -> Self {
        let status = match ack.status {
            AckStatus::Sent => "sent",
            AckStatus::Failed => "failed",
        };
        Self {
            status: status.to_string(),
            title: ack.title,
            description: ack.description,
        }
    }
}

/// Submit the contact form
///
/// Validates the four required fields and hands the message to the configured
/// submission transport.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequestDto,
    responses(
        (
            status = 200,
            description = "Message accepted",
            body = inline(SuccessResponse<AcknowledgmentDto>),
            example = json!({
                "success": true,
                "data": {
                    "status": "sent",
                    "title": "Message Sent!",
                    "description": "Thank you for reaching out. I'll get back to you soon!"
                }
            })
        ),
        (
            status = 400,
            description = "Missing fields or invalid email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "MISSING_FIELDS",
                    "message": "Missing required fields: subject, message"
                }
            })
        ),
        (
            status = 502,
            description = "The submission transport failed; the form should keep its contents",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "SUBMISSION_FAILED",
                    "message": "Submission transport failed: connection refused"
                }
            })
        )
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    data: web::Data<AppState>,
    payload: web::Json<ContactRequestDto>,
) -> impl Responder {
    let request = payload.into_inner();

    let form = ContactForm::new(data.contact_submitter.clone());
    form.set_field(ContactField::Name, request.name);
    form.set_field(ContactField::Email, request.email);
    form.set_field(ContactField::Subject, request.subject);
    form.set_field(ContactField::Message, request.message);

    match form.submit().await {
        Ok(ack) => {
            info!("Contact form accepted");
            ApiResponse::success(AcknowledgmentDto::from(ack))
        }
        Err(err) => map_contact_error(err),
    }
}

fn map_contact_error(err: ContactFormError) -> HttpResponse {
    match err {
        ContactFormError::MissingFields(_) => {
            ApiResponse::bad_request("MISSING_FIELDS", &err.to_string())
        }
        ContactFormError::InvalidEmail => ApiResponse::bad_request("INVALID_EMAIL", &err.to_string()),
        ContactFormError::AlreadySubmitting => {
            ApiResponse::conflict("ALREADY_SUBMITTING", &err.to_string())
        }
        ContactFormError::Submission { source, ack } => {
            warn!(error = %source, "Contact submission failed");
            ApiResponse::error_with_data(
                StatusCode::BAD_GATEWAY,
                AcknowledgmentDto::from(ack),
                "SUBMISSION_FAILED",
                &source.to_string(),
            )
        }
    }
}
