use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::modules::contact::adapter::outgoing::simulated_submitter::DEFAULT_SIMULATED_DELAY;
use crate::modules::projects::adapter::outgoing::github_repo_listing::{
    DEFAULT_API_BASE, MAX_PAGE_SIZE,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpSettings {
    /// Authenticated TLS relay.
    Relay {
        server: String,
        username: String,
        password: String,
        from: String,
    },
    /// Plain local relay, used when `RUST_ENV=test`.
    Local { host: String, port: u16, from: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactTransport {
    Simulated { delay: Duration },
    Smtp(SmtpSettings),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub rust_env: String,
    pub host: String,
    pub port: u16,
    pub config_path: Option<PathBuf>,
    pub repo_api_base: String,
    pub repo_marker: String,
    pub repo_page_size: u8,
    pub contact: ContactTransport,
    /// Recipient for forwarded contact mail; the profile email when unset.
    pub contact_inbox: Option<String>,
}

impl AppSettings {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(SettingsError::Missing(key));

        let rust_env = get("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let port = parse_or(get("PORT"), "PORT", 8080u16)?;
        let page_size = parse_or(get("REPO_PAGE_SIZE"), "REPO_PAGE_SIZE", u32::from(MAX_PAGE_SIZE))?
            .clamp(1, u32::from(MAX_PAGE_SIZE)) as u8;

        let contact = match get("CONTACT_TRANSPORT").as_deref() {
            None | Some("simulated") => {
                let delay_ms = parse_or(
                    get("CONTACT_SIMULATED_DELAY_MS"),
                    "CONTACT_SIMULATED_DELAY_MS",
                    DEFAULT_SIMULATED_DELAY.as_millis() as u64,
                )?;
                ContactTransport::Simulated {
                    delay: Duration::from_millis(delay_ms),
                }
            }
            Some("smtp") => {
                let from = require("EMAIL_FROM")?;
                if rust_env == "test" {
                    ContactTransport::Smtp(SmtpSettings::Local {
                        host: get("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                        port: parse_or(get("SMTP_PORT"), "SMTP_PORT", 1025u16)?,
                        from,
                    })
                } else {
                    ContactTransport::Smtp(SmtpSettings::Relay {
                        server: require("SMTP_SERVER")?,
                        username: require("SMTP_USERNAME")?,
                        password: require("SMTP_PASSWORD")?,
                        from,
                    })
                }
            }
            Some(other) => {
                return Err(SettingsError::Invalid {
                    key: "CONTACT_TRANSPORT",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            config_path: get("PORTFOLIO_CONFIG_PATH").map(PathBuf::from),
            repo_api_base: get("REPO_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            repo_marker: get("REPO_MARKER_TAG").unwrap_or_else(|| "featured".to_string()),
            repo_page_size: page_size,
            contact,
            contact_inbox: get("CONTACT_INBOX"),
            rust_env,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, SettingsError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| SettingsError::Invalid { key, value }),
    }
}
