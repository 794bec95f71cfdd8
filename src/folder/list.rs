use super::Folder;
use crate::executor::{Request, RequestExecutor};

impl<E: RequestExecutor> crate::Client<E> {
    /// List all the folders the credentials can see
    #[tracing::instrument(skip(self))]
    pub async fn list_folders(&self) -> crate::Result<Vec<Folder>> {
        self.send(Request::get("/api/folders/"))
            .await?
            .error_for_status()?
            .json()
    }
}
