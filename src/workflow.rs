use anyhow::Result;
use qbx::{App, AppOptions, BrowseOutcome, HttpQuestionService};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive browsing session.
pub(crate) struct BrowseWorkflow {
    app: App,
}

impl BrowseWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Self {
        let ResolvedConfig {
            base_url,
            page_size,
            timeout,
            initial_query,
            theme,
            ui,
            ..
        } = config;

        let service = HttpQuestionService::new(base_url, timeout);
        let options = AppOptions {
            initial_query,
            page_size,
            ui,
            theme,
        };

        Self {
            app: App::new(Box::new(service), options),
        }
    }

    pub(crate) fn run(mut self) -> Result<BrowseOutcome> {
        self.app.run()
    }
}
