use super::Folder;
use crate::executor::{Request, RequestExecutor};

/// The search type restricting the results to folders
pub const FOLDER_TYPE: &str = "dash-folder";

impl<E: RequestExecutor> crate::Client<E> {
    /// Search the folders matching the query
    ///
    /// This relies on the generic search endpoint, the order of the results is the one of the server.
    #[tracing::instrument(skip(self))]
    pub async fn search_folders(&self, query: &str) -> crate::Result<Vec<Folder>> {
        let request = Request::get("/api/search")
            .with_query("type", FOLDER_TYPE)
            .with_query("query", query);
        self.send(request).await?.error_for_status()?.json()
    }
}
