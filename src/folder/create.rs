use super::{Folder, BASE_PATH};
use crate::executor::{Request, RequestExecutor};

#[derive(Debug, serde::Serialize)]
struct FolderCreatePayload<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    uid: Option<&'a str>,
}

impl<E: RequestExecutor> crate::Client<E> {
    async fn post_folder(&self, payload: &FolderCreatePayload<'_>) -> crate::Result<Folder> {
        let request = Request::post(BASE_PATH).with_json(payload)?;
        self.send(request)
            .await?
            .error_for_status_with_body()?
            .json()
    }

    /// Create a folder, the server assigns both identifiers
    ///
    /// When the server doesn't answer `200 OK`, the error holds the body of the response.
    #[tracing::instrument(skip(self))]
    pub async fn create_folder(&self, title: &str) -> crate::Result<Folder> {
        self.post_folder(&FolderCreatePayload { title, uid: None })
            .await
    }

    /// Create a folder with a chosen unique identifier
    ///
    /// Same as [`create_folder`](crate::Client::create_folder), useful when provisioning
    /// or migrating folders from another instance.
    #[tracing::instrument(skip(self))]
    pub async fn create_folder_with_uid(&self, title: &str, uid: &str) -> crate::Result<Folder> {
        self.post_folder(&FolderCreatePayload {
            title,
            uid: Some(uid),
        })
        .await
    }
}
