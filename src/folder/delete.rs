use super::folder_path;
use crate::executor::{Request, RequestExecutor};

impl<E: RequestExecutor> crate::Client<E> {
    /// Delete a folder, with the dashboards it contains
    #[tracing::instrument(skip(self))]
    pub async fn delete_folder(&self, id: &str) -> crate::Result<()> {
        self.send(Request::delete(folder_path(id)))
            .await?
            .error_for_status()?;
        Ok(())
    }
}
