//! Typed client for the [Grafana](https://grafana.com/docs/grafana/latest/developers/http_api/folder/) folder API.
//!
//! ```no_run
//! use grafana_api::{Client, Credentials};
//!
//! # tokio_test::block_on(async {
//! let client = Client::new("http://localhost:3000", Credentials::api_key("my-key")).unwrap();
//! let folders = client.list_folders().await.unwrap();
//! # })
//! ```

use std::borrow::Cow;

pub mod builder;
pub mod credentials;
pub mod error;
pub mod executor;
pub mod folder;
pub mod http;

pub use builder::ClientBuilder;
pub use credentials::Credentials;
pub use error::{Error, RemoteError};
pub use executor::{Request, RequestExecutor, Response};
pub use folder::Folder;
pub use http::HttpExecutor;

/// The default user agent for the http executor
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub type Result<V> = std::result::Result<V, Error>;

/// Client for the Grafana folder API.
///
/// The client doesn't hold any state besides its executor, every call is a single round trip.
#[derive(Clone, Debug)]
pub struct Client<E = HttpExecutor> {
    executor: E,
}

impl Client<HttpExecutor> {
    /// Creates a client for the given base url, using the default http executor.
    pub fn new(
        base_url: impl Into<Cow<'static, str>>,
        credentials: Credentials,
    ) -> std::result::Result<Self, builder::Error> {
        ClientBuilder::default()
            .with_base_url(base_url)
            .with_credentials(credentials)
            .build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }
}

impl<E> Client<E> {
    /// Creates a client sending its requests through a custom executor.
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }
}

impl<E: RequestExecutor> Client<E> {
    pub(crate) async fn send(&self, request: Request) -> Result<Response> {
        self.executor.execute(request).await
    }
}
