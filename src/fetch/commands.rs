use crate::client::{ClientError, SearchRequest};
use crate::types::Question;

/// Commands understood by the background fetch worker.
#[derive(Debug)]
pub enum FetchCommand {
    /// Run one paginated search against the question service.
    Search {
        /// Generation id correlating the response with the originating query.
        id: u64,
        request: SearchRequest,
    },
    /// Stop the worker thread.
    Shutdown,
}

/// Completed fetch emitted back to the UI thread.
#[derive(Debug)]
pub struct FetchResult {
    /// Generation id of the [`FetchCommand::Search`] that produced this result.
    pub id: u64,
    pub outcome: Result<Vec<Question>, ClientError>,
}
