use std::time::Duration;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::debug;
use ureq::Agent;

use super::{ClientError, QuestionService, SearchRequest};
use crate::types::Question;

/// Blocking HTTP implementation of [`QuestionService`].
///
/// Stateless per request: every search issues a fresh GET against the
/// configured base address. Without an explicit timeout the transport
/// default applies.
pub struct HttpQuestionService {
    agent: Agent,
    base_url: String,
}

impl HttpQuestionService {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            base_url: base_url.into(),
        }
    }
}

impl QuestionService for HttpQuestionService {
    fn search(&self, request: &SearchRequest) -> Result<Vec<Question>, ClientError> {
        let url = search_url(&self.base_url, request);
        debug!(%url, "issuing search request");
        let response = self.agent.get(&url).call().map_err(|err| match err {
            ureq::Error::Status(code, _) => ClientError::Status(code),
            ureq::Error::Transport(transport) => ClientError::Transport(transport.to_string()),
        })?;
        response
            .into_json::<Vec<Question>>()
            .map_err(|err| ClientError::Decode(err.to_string()))
    }
}

/// Build the full request URL for a search, percent-encoding the title.
pub(crate) fn search_url(base: &str, request: &SearchRequest) -> String {
    format!(
        "{}/search?title={}&page={}&per_page={}",
        base.trim_end_matches('/'),
        utf8_percent_encode(&request.title, NON_ALPHANUMERIC),
        request.page,
        request.per_page
    )
}
