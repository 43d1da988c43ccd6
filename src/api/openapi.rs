use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::modules::contact::adapter::incoming::web::routes::{AcknowledgmentDto, ContactRequestDto};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "View models and contact endpoint for the single-page portfolio",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Portfolio document
        crate::modules::config::adapter::incoming::web::routes::get_portfolio::get_portfolio_handler,
        crate::modules::config::adapter::incoming::web::routes::lookup_portfolio::lookup_portfolio_handler,

        // Sections
        crate::modules::sections::adapter::incoming::web::routes::get_section::get_section_handler,
        crate::modules::skills::adapter::incoming::web::routes::get_skills::get_skills_handler,
        crate::modules::projects::adapter::incoming::web::routes::get_projects::get_projects_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact::submit_contact_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<AcknowledgmentDto>,
            ErrorResponse,
            ErrorDetail,

            ContactRequestDto,
            AcknowledgmentDto,
        )
    ),
    tags(
        (name = "portfolio", description = "Portfolio document"),
        (name = "sections", description = "Hero, about, experience, footer and navigation"),
        (name = "skills", description = "Skill board"),
        (name = "projects", description = "Featured feed and static projects"),
        (name = "contact", description = "Contact form submission"),
    )
)]
pub struct ApiDoc;
