use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;
use url::Url;

use stafflink_application::{DirectoryFilter, IdentityLookup};
use stafflink_core::{AppError, AppResult};
use stafflink_domain::{ExternalUser, StaffId};


/// Retry policy for idempotent identity reads.
#[derive(Debug, Clone)]
pub struct ResolverRetry {
    /// Maximum attempts per request, including the first.
    pub max_attempts: u8,
    /// Base delay, multiplied by the attempt number between retries.
    pub backoff: Duration,
}

impl Default for ResolverRetry {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(250),
        }
    }
}

/// Explicit configuration for the identity provider client.
///
/// Passed whole into the constructor; the resolver never reads ambient
/// process state at call time.
#[derive(Debug, Clone)]
pub struct IdentitySourceConfig {
    /// Base URL of the SSO API.
    pub base_url: Url,
    /// API key half of the bearer credential.
    pub api_key: String,
    /// API secret half of the bearer credential.
    pub api_secret: String,
    /// Per-request timeout; the provider defines no latency bound itself.
    pub timeout: Duration,
    /// Retry policy for idempotent reads.
    pub retry: ResolverRetry,
}

/// HTTP client over the external identity provider.
///
/// The provider authenticates requests with a composed bearer credential
/// (`{key}@{secret}`) and wraps every payload in a `data` envelope.
pub struct HttpIdentityResolver {
    http_client: reqwest::Client,
    config: IdentitySourceConfig,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

impl HttpIdentityResolver {
    /// Creates a resolver from explicit configuration.
    pub fn new(config: IdentitySourceConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| {
                AppError::Internal(format!("failed to build identity http client: {error}"))
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| AppError::Internal("identity base URL cannot be a base".to_owned()))?
            .pop_if_empty()
            .extend(path.split('/'));

        Ok(url)
    }

    fn bearer_header(&self) -> String {
        format!("Bearer {}@{}", self.config.api_key, self.config.api_secret)
    }

    async fn get_with_retry<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(String, String)],
    ) -> AppResult<T> {
        let mut attempt = 0_u8;
        let mut last_error: Option<String> = None;

        while attempt < self.config.retry.max_attempts.max(1) {
            attempt = attempt.saturating_add(1);

            let response = self
                .http_client
                .get(url.clone())
                .query(query)
                .header(AUTHORIZATION, self.bearer_header())
                .send()
                .await;

            match response {
                Ok(response) if response.status().is_success() => {
                    return response
                        .json::<Envelope<T>>()
                        .await
                        .map(|envelope| envelope.data)
                        .map_err(|error| {
                            AppError::Upstream(format!("invalid identity payload: {error}"))
                        });
                }
                Ok(response) if response.status() == StatusCode::NOT_FOUND => {
                    return Err(AppError::NotFound(
                        "user was not found in the identity provider".to_owned(),
                    ));
                }
                Ok(response)
                    if response.status().is_server_error()
                        || response.status() == StatusCode::TOO_MANY_REQUESTS =>
                {
                    last_error = Some(format!(
                        "transient identity provider status {}",
                        response.status()
                    ));
                }
                Ok(response) => {
                    return Err(AppError::Upstream(format!(
                        "identity provider returned status {}",
                        response.status()
                    )));
                }
                Err(error) => {
                    last_error = Some(format!("identity provider transport error: {error}"));
                }
            }

            if attempt < self.config.retry.max_attempts {
                warn!(
                    attempt,
                    max_attempts = self.config.retry.max_attempts,
                    "identity provider read failed, retrying"
                );
                tokio::time::sleep(self.config.retry.backoff * u32::from(attempt)).await;
            }
        }

        Err(AppError::Upstream(last_error.unwrap_or_else(|| {
            "identity provider read exhausted retries".to_owned()
        })))
    }
}

#[async_trait]
impl IdentityLookup for HttpIdentityResolver {
    async fn find_user(&self, staff_id: StaffId) -> AppResult<ExternalUser> {
        let url = self.endpoint(&format!("users/{staff_id}"))?;

        self.get_with_retry::<ExternalUser>(url, &[])
            .await
            .map_err(|error| match error {
                AppError::NotFound(_) => AppError::NotFound(format!(
                    "user '{staff_id}' was not found in the identity provider"
                )),
                other => other,
            })
    }

    async fn list_users(&self, filter: &DirectoryFilter) -> AppResult<Vec<ExternalUser>> {
        let url = self.endpoint("users")?;
        self.get_with_retry(url, &filter.params).await
    }
}
