//! The default executor, sending the requests with [`reqwest`].

use crate::credentials::Credentials;
use crate::error::Error;
use crate::executor::{Request, RequestExecutor, Response};
use std::borrow::Cow;

pub const ORG_ID_HEADER: &str = "X-Grafana-Org-Id";

/// Executor authenticating and sending the requests to a Grafana instance
#[derive(Clone, Debug)]
pub struct HttpExecutor {
    pub(crate) base_url: Cow<'static, str>,
    pub(crate) credentials: Credentials,
    pub(crate) org_id: Option<i64>,
    pub(crate) inner: reqwest::Client,
}

impl HttpExecutor {
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl RequestExecutor for HttpExecutor {
    #[tracing::instrument(name = "http", skip_all, fields(method = %request.method, path = %request.path))]
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        let uri = self.build_url(&request.path);
        tracing::debug!("calling {uri}");
        let mut builder = self.inner.request(request.method, uri);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        builder = self.credentials.apply(builder);
        if let Some(org_id) = self.org_id {
            builder = builder.header(ORG_ID_HEADER, org_id);
        }
        if let Some(body) = request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }
        let res = builder.send().await?;
        let status = res.status();
        tracing::debug!("responded with status {status:?}");
        let body = res.bytes().await?;
        Ok(Response { status, body })
    }
}
