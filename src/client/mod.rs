//! Client-side view of the question search service.
//!
//! The service contract is a single paginated endpoint:
//! `GET {base}/search?title=<text>&page=<n>&per_page=<n>` returning a JSON
//! array of question records. [`QuestionService`] is the seam between the
//! fetch worker and the transport so tests can substitute a scripted
//! implementation.

mod http;

pub use http::HttpQuestionService;

use thiserror::Error;

use crate::types::Question;

/// Parameters for one paginated title search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Title text to match, as typed.
    pub title: String,
    /// 1-based page cursor.
    pub page: u32,
    /// Records per page.
    pub per_page: u32,
}

/// Failures raised while talking to the question service.
///
/// The UI collapses every variant into one generic message; the distinction
/// exists for the log file and for tests.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("question service returned status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Executes paginated searches against the backing service.
pub trait QuestionService: Send {
    fn search(&self, request: &SearchRequest) -> Result<Vec<Question>, ClientError>;
}
