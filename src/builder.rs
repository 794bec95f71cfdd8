use std::borrow::Cow;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
    /// Returned when an environment variable holds an unexpected value.
    #[error("invalid value {value:?} for environment variable {name}")]
    InvalidVariable { name: &'static str, value: String },
}

fn parse_env<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, Error> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::InvalidVariable { name, value }),
        Err(_) => Ok(None),
    }
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// ```
/// use grafana_api::{ClientBuilder, Credentials};
/// use std::time::Duration;
///
/// let _client = ClientBuilder::default()
///    .with_base_url("https://grafana.example.com")
///    .with_credentials(Credentials::api_key("my-key"))
///    .with_timeout(Duration::from_secs(10))
///    .build()
///    .expect("unable to build client");
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Cow<'static, str>,
    client_builder: Option<reqwest::ClientBuilder>,
    credentials: crate::Credentials,
    org_id: Option<i64>,
    timeout: Option<Duration>,
}

impl Default for ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings:
    ///
    /// - Base URL is set to a local instance.
    /// - No credentials are set.
    /// - No custom `reqwest::ClientBuilder` is used.
    fn default() -> Self {
        Self {
            base_url: Cow::Borrowed(DEFAULT_BASE_URL),
            client_builder: None,
            credentials: crate::Credentials::Anonymous,
            org_id: None,
            timeout: None,
        }
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - Uses `GRAFANA_URL` for the endpoint, falls back to a local instance.
    /// - Uses `GRAFANA_AUTH` for the credentials, see [`Credentials::parse`](crate::Credentials::parse).
    /// - Uses `GRAFANA_ORG_ID` for the organisation.
    /// - Uses `GRAFANA_TIMEOUT` for the timeout, in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVariable`] if the organisation or the timeout are not numbers.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = std::env::var("GRAFANA_URL")
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(DEFAULT_BASE_URL));
        let credentials = crate::Credentials::from_env().unwrap_or_default();

        Ok(Self {
            base_url,
            client_builder: None,
            credentials,
            org_id: parse_env("GRAFANA_ORG_ID")?,
            timeout: parse_env::<u64>("GRAFANA_TIMEOUT")?.map(Duration::from_millis),
        })
    }
}

impl ClientBuilder {
    /// Sets the base URL of the Grafana instance.
    pub fn set_base_url(&mut self, base_url: impl Into<Cow<'static, str>>) {
        self.base_url = base_url.into();
    }

    /// Sets the base URL and returns the modified builder.
    pub fn with_base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.set_base_url(base_url);
        self
    }

    /// Sets a custom `reqwest::ClientBuilder`.
    pub fn set_client_builder(&mut self, client_builder: reqwest::ClientBuilder) {
        self.client_builder = Some(client_builder);
    }

    /// Sets a custom `reqwest::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, client_builder: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(client_builder);
        self
    }

    /// Sets the credentials for API authentication.
    pub fn set_credentials(&mut self, credentials: crate::Credentials) {
        self.credentials = credentials;
    }

    /// Sets the credentials and returns the modified builder.
    pub fn with_credentials(mut self, credentials: crate::Credentials) -> Self {
        self.set_credentials(credentials);
        self
    }

    /// Sets the organisation the requests are made on behalf of.
    pub fn set_org_id(&mut self, org_id: i64) {
        self.org_id = Some(org_id);
    }

    pub fn with_org_id(mut self, org_id: i64) -> Self {
        self.set_org_id(org_id);
        self
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let mut builder = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let executor = crate::HttpExecutor {
            base_url: self.base_url,
            credentials: self.credentials,
            org_id: self.org_id,
            inner: builder.build()?,
        };
        Ok(crate::Client::with_executor(executor))
    }
}
