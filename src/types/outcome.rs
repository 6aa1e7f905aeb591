use crate::types::Question;

/// Result of an interactive browsing session.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseOutcome {
    /// Whether the user accepted a question or abandoned the session.
    pub accepted: bool,
    /// Query text at the moment the session ended.
    pub query: String,
    /// The accepted question, when there is one.
    pub selection: Option<Question>,
}
