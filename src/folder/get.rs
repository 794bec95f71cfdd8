use super::{folder_path, Folder, BASE_PATH};
use crate::executor::{Request, RequestExecutor};

impl<E: RequestExecutor> crate::Client<E> {
    /// Get a folder by its numeric identifier
    #[tracing::instrument(skip(self))]
    pub async fn get_folder(&self, id: i64) -> crate::Result<Folder> {
        self.send(Request::get(format!("{BASE_PATH}/id/{id}")))
            .await?
            .error_for_status()?
            .json()
    }

    /// Get a folder by its unique identifier
    #[tracing::instrument(skip(self))]
    pub async fn get_folder_by_uid(&self, uid: &str) -> crate::Result<Folder> {
        self.send(Request::get(folder_path(uid)))
            .await?
            .error_for_status()?
            .json()
    }
}
