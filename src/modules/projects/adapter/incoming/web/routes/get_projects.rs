use actix_web::{get, web, Responder};

use crate::modules::projects::domain::ProjectsView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Projects section
///
/// Combines the remote featured feed (whatever state it is in) with the
/// static "other projects" grid, which is always present.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Featured feed state and static project cards")
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    let all_projects_url = data.config.social_by_name("GitHub").map(|link| link.url.clone());

    ApiResponse::success(ProjectsView::build(
        &data.project_feed.state(),
        data.config.projects(),
        all_projects_url,
        &data.config.animations().projects,
    ))
}
