use actix_web::{get, web, HttpResponse, Responder};
use chrono::{Datelike, Utc};

use crate::api::schemas::ErrorResponse;
use crate::modules::sections::application::{
    AboutView, ContactView, ExperienceView, FooterView, HeroView, Navigation,
};
use crate::modules::typewriter::application::Typewriter;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Section view model
///
/// Returns the view model of one page section: `hero`, `about`,
/// `experience`, `contact`, `footer` or `navigation`.
#[utoipa::path(
    get,
    path = "/api/sections/{name}",
    tag = "sections",
    params(
        ("name" = String, Path, description = "hero, about, experience, contact, footer or navigation")
    ),
    responses(
        (status = 200, description = "Section view model"),
        (
            status = 404,
            description = "Unknown section",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "SECTION_NOT_FOUND",
                    "message": "No section named 'blog'"
                }
            })
        )
    )
)]
#[get("/api/sections/{name}")]
pub async fn get_section_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let name = path.into_inner();
    let store = data.config.as_ref();

    match name.to_ascii_lowercase().as_str() {
        "hero" => ApiResponse::success(HeroView::build(store, Typewriter::DEFAULT_DELAY)),
        "about" => ApiResponse::success(AboutView::build(store)),
        "experience" => ApiResponse::success(ExperienceView::build(store)),
        "contact" => ApiResponse::success(ContactView::build(store)),
        "footer" => ApiResponse::success(FooterView::build(store, Utc::now().year())),
        "navigation" => ApiResponse::success(Navigation::from_items(store.navigation())),
        _ => section_not_found(&name),
    }
}

fn section_not_found(name: &str) -> HttpResponse {
    ApiResponse::not_found("SECTION_NOT_FOUND", &format!("No section named '{}'", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_section_handler),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn hero_includes_title_frames() {
        let (status, json) = get("/api/sections/hero").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["titleFrames"][0]["atMs"], 100);
        assert_eq!(json["data"]["callsToAction"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn footer_carries_current_year() {
        let (status, json) = get("/api/sections/footer").await;

        assert_eq!(status, StatusCode::OK);
        let copyright = json["data"]["copyright"].as_str().unwrap();
        assert!(copyright.contains(&Utc::now().year().to_string()));
        assert_eq!(json["data"]["hireMe"]["action"]["anchor"], "#contact");
    }

    #[actix_web::test]
    async fn contact_lists_details_and_social() {
        let (status, json) = get("/api/sections/contact").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["details"][0]["href"], "mailto:sam@example.com");
        assert_eq!(json["data"]["details"][1]["label"], "Location");
        assert_eq!(json["data"]["social"][0]["icon"], "github");
        assert!(json["data"]["reveal"]["threshold"].is_number());
    }

    #[actix_web::test]
    async fn navigation_lists_links() {
        let (status, json) = get("/api/sections/navigation").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!json["data"]["links"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn unknown_section_is_not_found() {
        let (status, json) = get("/api/sections/blog").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "SECTION_NOT_FOUND");
    }
}
