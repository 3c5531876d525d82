use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use url::Url;

use stafflink_core::AppError;
use stafflink_domain::{SYSTEM_MANAGEMENT_ROLE_ID, USER_MANAGEMENT_ROLE_ID};
use stafflink_infrastructure::{IdentitySourceConfig, ResolverRetry};

/// Runtime configuration resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub database_url: String,
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub identity_source: IdentitySourceConfig,
    pub admin_role_ids: Vec<i64>,
}

impl ApiConfig {
    /// Loads configuration from process environment variables.
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

        let database_url = required_env("DATABASE_URL")?;
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        let sso_api_url = required_env("SSO_API_URL")?;
        let base_url = Url::parse(sso_api_url.as_str())
            .map_err(|error| AppError::Validation(format!("invalid SSO_API_URL: {error}")))?;

        let timeout_ms = env::var("SSO_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(10_000);

        let identity_source = IdentitySourceConfig {
            base_url,
            api_key: required_env("SSO_API_KEY")?,
            api_secret: required_env("SSO_API_SECRET")?,
            timeout: Duration::from_millis(timeout_ms),
            retry: ResolverRetry::default(),
        };

        let admin_role_ids = match env::var("ADMIN_ROLE_IDS") {
            Ok(value) => parse_role_ids(value.as_str())?,
            Err(_) => vec![SYSTEM_MANAGEMENT_ROLE_ID, USER_MANAGEMENT_ROLE_ID],
        };

        Ok(Self {
            migrate_only,
            database_url,
            frontend_url,
            api_host,
            api_port,
            identity_source,
            admin_role_ids,
        })
    }

    /// Returns the bind address derived from host and port settings.
    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;

        Ok(SocketAddr::from((host, self.api_port)))
    }
}

/// Initializes the process-wide tracing subscriber.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}

fn parse_role_ids(value: &str) -> Result<Vec<i64>, AppError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>().map_err(|error| {
                AppError::Validation(format!("invalid ADMIN_ROLE_IDS entry '{part}': {error}"))
            })
        })
        .collect()
}
