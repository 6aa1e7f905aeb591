use std::time::Duration;

use qbx::{Theme, UiConfig};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub(crate) base_url: String,
    pub(crate) page_size: u32,
    pub(crate) timeout: Option<Duration>,
    pub(crate) initial_query: String,
    pub(crate) theme_name: String,
    pub(crate) theme: Theme,
    pub(crate) ui: UiConfig,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    pub(crate) fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Service base URL: {}", self.base_url);
        println!("  Page size: {}", self.page_size);
        match self.timeout {
            Some(timeout) => println!("  Request timeout: {}s", timeout.as_secs()),
            None => println!("  Request timeout: (transport default)"),
        }
        println!("  Theme: {}", self.theme_name);
        if let Some(title) = &self.ui.input_title {
            println!("  Prompt title: {title}");
        }
        if !self.initial_query.is_empty() {
            println!("  Initial query: {}", self.initial_query);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prints_without_panic() {
        let config = ResolvedConfig {
            base_url: "http://localhost:5000".into(),
            page_size: 10,
            timeout: Some(Duration::from_secs(5)),
            initial_query: "capital".into(),
            theme_name: "slate".into(),
            theme: Theme::default(),
            ui: UiConfig {
                input_title: Some("Bank".into()),
                ..UiConfig::default()
            },
        };

        config.print_summary();
    }
}
