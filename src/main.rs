pub mod api;
pub mod health;
pub mod modules;
pub mod settings;
pub mod shared;

pub use modules::email;

use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::modules::config::adapter::outgoing::{EmbeddedConfigSource, FileConfigSource};
use crate::modules::config::application::ConfigStore;
use crate::modules::contact::adapter::outgoing::{
    EmailContactSubmitter, SimulatedContactSubmitter,
};
use crate::modules::contact::application::ports::outgoing::ContactSubmitter;
use crate::modules::projects::adapter::outgoing::GithubRepoListing;
use crate::modules::projects::application::{FeedOptions, ProjectFeed};
use crate::settings::{AppSettings, ContactTransport, SmtpSettings};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ConfigStore>,
    pub project_feed: Arc<ProjectFeed>,
    pub contact_submitter: Arc<dyn ContactSubmitter + Send + Sync>,
}

#[cfg(not(tarpaulin_include))]
fn load_config(settings: &AppSettings) -> anyhow::Result<ConfigStore> {
    let store = match &settings.config_path {
        Some(path) => ConfigStore::load(&FileConfigSource::new(path)),
        None => ConfigStore::load(&EmbeddedConfigSource),
    };
    store.context("Failed to load portfolio document")
}

#[cfg(not(tarpaulin_include))]
fn contact_submitter(
    settings: &AppSettings,
    store: &ConfigStore,
) -> anyhow::Result<Arc<dyn ContactSubmitter + Send + Sync>> {
    let submitter: Arc<dyn ContactSubmitter + Send + Sync> = match &settings.contact {
        ContactTransport::Simulated { delay } => {
            info!(delay_ms = delay.as_millis() as u64, "Contact form uses simulated delivery");
            Arc::new(SimulatedContactSubmitter::new(*delay))
        }
        ContactTransport::Smtp(smtp) => {
            let sender = match smtp {
                SmtpSettings::Local { host, port, from } => {
                    SmtpEmailSender::new_local(host, *port, from)
                }
                SmtpSettings::Relay {
                    server,
                    username,
                    password,
                    from,
                } => SmtpEmailSender::new(server, username, password, from)
                    .context("Failed to configure SMTP relay")?,
            };
            let inbox = settings
                .contact_inbox
                .clone()
                .unwrap_or_else(|| store.profile().email.clone());
            info!(%inbox, "Contact form forwards messages by email");
            Arc::new(EmailContactSubmitter::new(Arc::new(sender), &inbox))
        }
    };
    Ok(submitter)
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let settings = AppSettings::from_env().context("Invalid configuration")?;
    let server_url = settings.server_url();

    let store = load_config(&settings)?;
    let contact_submitter = contact_submitter(&settings, &store)?;

    // One feed for the lifetime of the process; the repo account comes from the document.
    let listing = Arc::new(GithubRepoListing::new(&settings.repo_api_base));
    let project_feed = ProjectFeed::mount(
        listing,
        FeedOptions {
            account: store.repo_account(),
            marker: settings.repo_marker.clone(),
            page_size: settings.repo_page_size,
        },
    );

    let state = AppState {
        config: Arc::new(store),
        project_feed: Arc::new(project_feed),
        contact_submitter,
    };

    info!(env = %settings.rust_env, "Server run on: {}", server_url);

    let openapi = api::openapi::ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()))
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio document
    cfg.service(crate::modules::config::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::modules::config::adapter::incoming::web::routes::lookup_portfolio_handler);
    // Sections
    cfg.service(crate::modules::sections::adapter::incoming::web::routes::get_section_handler);
    cfg.service(crate::modules::skills::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::modules::projects::adapter::incoming::web::routes::get_projects_handler);
    // Contact
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
