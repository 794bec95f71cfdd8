//! The seam between the folder operations and the transport.
//!
//! The operations only describe a [`Request`] and read a [`Response`], sending them is
//! the job of a [`RequestExecutor`]. The [`HttpExecutor`](crate::HttpExecutor) is the one
//! used by default, any other implementation can be injected with
//! [`Client::with_executor`](crate::Client::with_executor).

use crate::error::{Error, RemoteError};
use bytes::Bytes;
use reqwest::{Method, StatusCode};
use std::borrow::Cow;

/// A request relative to the base url of the service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: Cow<'static, str>,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Bytes>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<Cow<'static, str>>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    #[inline]
    pub fn get(path: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::GET, path)
    }

    #[inline]
    pub fn post(path: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::POST, path)
    }

    #[inline]
    pub fn put(path: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::PUT, path)
    }

    #[inline]
    pub fn delete(path: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Serializes the payload as the JSON body of the request.
    pub fn with_json<P: serde::Serialize>(mut self, payload: &P) -> Result<Self, Error> {
        let body = serde_json::to_vec(payload).map_err(Error::Encode)?;
        self.body = Some(Bytes::from(body));
        Ok(self)
    }
}

/// The raw response of the service
#[derive(Clone, Debug)]
pub struct Response {
    pub status: StatusCode,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The service only answers `200 OK` on success.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Turns any unexpected status into a [`RemoteError`] with the status only.
    pub fn error_for_status(self) -> Result<Self, RemoteError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(RemoteError::new(self.status))
        }
    }

    /// Turns any unexpected status into a [`RemoteError`] keeping the body of the response.
    pub fn error_for_status_with_body(self) -> Result<Self, RemoteError> {
        if self.is_success() {
            Ok(self)
        } else {
            let body = String::from_utf8_lossy(&self.body).into_owned();
            Err(RemoteError::with_body(self.status, body))
        }
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(Error::from)
    }
}

/// Sends a request and returns the raw response, whatever its status.
///
/// Authentication, base url and timeouts are the concern of the implementation.
#[async_trait::async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, Error>;
}

#[async_trait::async_trait]
impl<E: RequestExecutor + ?Sized> RequestExecutor for std::sync::Arc<E> {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        (**self).execute(request).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{Request, RequestExecutor, Response};
    use crate::error::Error;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    /// Executor keeping the requests it receives and answering a fixed response.
    pub(crate) struct RecordingExecutor {
        pub requests: Mutex<Vec<Request>>,
        response: Response,
    }

    impl RecordingExecutor {
        pub fn new(status: StatusCode, body: &'static str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                response: Response::new(status, body),
            }
        }

        pub fn last_request(&self) -> Request {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl RequestExecutor for RecordingExecutor {
        async fn execute(&self, request: Request) -> Result<Response, Error> {
            self.requests.lock().unwrap().push(request);
            Ok(self.response.clone())
        }
    }

    struct FailingExecutor;

    #[async_trait::async_trait]
    impl RequestExecutor for FailingExecutor {
        async fn execute(&self, _request: Request) -> Result<Response, Error> {
            Err(Error::transport("connection refused"))
        }
    }

    #[test]
    fn should_build_request_with_query() {
        let req = Request::get("/api/search")
            .with_query("type", "dash-folder")
            .with_query("query", "ops");
        assert_eq!(req.method, reqwest::Method::GET);
        assert_eq!(
            req.query,
            vec![("type", "dash-folder".to_string()), ("query", "ops".to_string())]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn should_only_accept_ok() {
        assert!(Response::new(StatusCode::OK, "").error_for_status().is_ok());
        let err = Response::new(StatusCode::CREATED, "{}")
            .error_for_status()
            .unwrap_err();
        assert_eq!(err.status, StatusCode::CREATED);
        assert!(err.body.is_none());
    }

    #[test]
    fn should_keep_body_on_error() {
        let err = Response::new(StatusCode::BAD_REQUEST, "invalid title")
            .error_for_status_with_body()
            .unwrap_err();
        assert_eq!(err.body.as_deref(), Some("invalid title"));
    }

    #[tokio::test]
    async fn should_propagate_transport_error() {
        crate::tests::init();
        let client = crate::Client::with_executor(FailingExecutor);
        let err = client.list_folders().await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(err.to_string(), "unable to send request: connection refused");
    }

    #[tokio::test]
    async fn should_share_executor() {
        let executor = std::sync::Arc::new(RecordingExecutor::new(StatusCode::OK, "[]"));
        let client = crate::Client::with_executor(executor.clone());
        client.list_folders().await.unwrap();
        client.list_folders().await.unwrap();
        assert_eq!(executor.requests.lock().unwrap().len(), 2);
    }
}
