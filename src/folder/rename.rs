use super::folder_path;
use crate::executor::{Request, RequestExecutor};

// The server expects `name` here even though the attribute is `title` everywhere else.
#[derive(Debug, serde::Serialize)]
struct FolderRenamePayload<'a> {
    name: &'a str,
}

impl<E: RequestExecutor> crate::Client<E> {
    /// Rename a folder
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier of the folder, or its numeric identifier as a string.
    /// * `name` - New title for the folder.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn rename_folder(&self, id: &str, name: &str) -> crate::Result<()> {
        let request = Request::put(folder_path(id)).with_json(&FolderRenamePayload { name })?;
        self.send(request).await?.error_for_status()?;
        Ok(())
    }
}
