//! The ways to authenticate with the Grafana API.

/// The different kind of credentials used for authentication
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    /// Service account token or API key, sent as a bearer token
    ApiKey { token: String },
    /// Basic authentication
    Basic { username: String, password: String },
    #[default]
    Anonymous,
}

impl Credentials {
    /// Creates a credential based on the `GRAFANA_AUTH` environment variable.
    ///
    /// See [`Credentials::parse`] for the expected format.
    ///
    /// ```rust
    /// use grafana_api::credentials::Credentials;
    ///
    /// match Credentials::from_env() {
    ///     Some(Credentials::ApiKey { .. }) => println!("uses an api key"),
    ///     Some(Credentials::Basic { .. }) => println!("uses a username and a password"),
    ///     _ => eprintln!("no credentials provided"),
    /// }
    /// ```
    pub fn from_env() -> Option<Self> {
        std::env::var("GRAFANA_AUTH")
            .ok()
            .map(|value| Self::parse(&value))
    }

    /// Parses an auth string, `username:password` gives a basic authentication,
    /// anything else is considered as an API key.
    pub fn parse(value: &str) -> Self {
        match value.split_once(':') {
            Some((username, password)) => Self::basic(username, password),
            None => Self::api_key(value),
        }
    }

    pub fn api_key<S: Into<String>>(token: S) -> Self {
        Self::ApiKey {
            token: token.into(),
        }
    }

    pub fn basic<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    pub(crate) fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::ApiKey { token } => builder.bearer_auth(token),
            Self::Basic { username, password } => builder.basic_auth(username, Some(password)),
            Self::Anonymous => builder,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey { .. } => f.debug_struct("ApiKey").field("token", &"***").finish(),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Self::Anonymous => f.write_str("Anonymous"),
        }
    }
}
