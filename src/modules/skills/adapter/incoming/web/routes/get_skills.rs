use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::modules::skills::application::SkillBoard;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SkillsQuery {
    /// Category key; the first category is active when omitted
    pub category: Option<String>,
}

/// Skill board with one active category
///
/// An unknown category yields an empty grid, not an error.
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    params(SkillsQuery),
    responses(
        (status = 200, description = "Tabs, active category and its staggered grid")
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(
    data: web::Data<AppState>,
    query: web::Query<SkillsQuery>,
) -> impl Responder {
    let mut board = SkillBoard::new(
        data.config.skill_categories(),
        data.config.animations().skills.clone(),
    );

    if let Some(category) = query.into_inner().category {
        board.select(&category);
    }

    ApiResponse::success(board.view())
}
