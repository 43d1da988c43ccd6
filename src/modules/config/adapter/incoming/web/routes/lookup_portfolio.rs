use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::config::application::KeyPathError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LookupQuery {
    /// Key path such as `social[name="GitHub"].url` or `skills.languages`
    pub path: String,
}

#[derive(Serialize, ToSchema)]
pub struct LookupResponse {
    #[schema(example = "personal.email")]
    path: String,
    #[schema(value_type = Object)]
    value: serde_json::Value,
}

/// Read one node of the portfolio document by key path
#[utoipa::path(
    get,
    path = "/api/portfolio/lookup",
    tag = "portfolio",
    params(LookupQuery),
    responses(
        (status = 200, description = "Node found", body = inline(SuccessResponse<LookupResponse>)),
        (status = 400, description = "Malformed key path", body = ErrorResponse),
        (status = 404, description = "Nothing at that path", body = ErrorResponse)
    )
)]
#[get("/api/portfolio/lookup")]
pub async fn lookup_portfolio_handler(
    data: web::Data<AppState>,
    query: web::Query<LookupQuery>,
) -> impl Responder {
    let path = query.into_inner().path;

    match data.config.lookup(&path) {
        Ok(Some(value)) => ApiResponse::success(LookupResponse {
            path,
            value: value.clone(),
        }),
        Ok(None) => ApiResponse::not_found("KEY_NOT_FOUND", &format!("Nothing at '{}'", path)),
        Err(err) => map_key_path_error(err),
    }
}

fn map_key_path_error(err: KeyPathError) -> HttpResponse {
    ApiResponse::bad_request("INVALID_KEY_PATH", &err.to_string())
}
