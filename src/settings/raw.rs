use std::time::Duration;

use anyhow::{Result, anyhow, ensure};
use serde::Deserialize;

use qbx::{DEFAULT_PAGE_SIZE, UiConfig, theme};

use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

/// Endpoint the original front-end hard-coded, kept as the default here.
pub(super) const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const DEFAULT_THEME: &str = "slate";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    service: ServiceSection,
    ui: UiSection,
}

/// Question-service options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ServiceSection {
    base_url: Option<String>,
    page_size: Option<u32>,
    timeout_secs: Option<u64>,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    input_title: Option<String>,
    initial_query: Option<String>,
    theme: Option<String>,
    empty_message: Option<String>,
    detail_title: Option<String>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(url) = cli.base_url.clone() {
            self.service.base_url = Some(url);
        }
        if let Some(size) = cli.page_size {
            self.service.page_size = Some(size);
        }
        if let Some(secs) = cli.timeout {
            self.service.timeout_secs = Some(secs);
        }

        if let Some(title) = cli.title.clone() {
            self.ui.input_title = Some(title);
        }
        if let Some(query) = cli.initial_query.clone() {
            self.ui.initial_query = Some(query);
        }
        if let Some(name) = cli.theme.clone() {
            self.ui.theme = Some(name);
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating
    /// and filling defaults where required.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let base_url = self
            .service
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        ensure!(
            base_url.starts_with("http://") || base_url.starts_with("https://"),
            "service base URL must start with http:// or https://"
        );

        let page_size = self.service.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        ensure!(page_size > 0, "page-size must be greater than zero");

        if let Some(secs) = self.service.timeout_secs {
            ensure!(secs > 0, "timeout must be at least one second");
        }
        let timeout = self.service.timeout_secs.map(Duration::from_secs);

        let theme_name = self.ui.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
        let theme =
            theme::by_name(&theme_name).ok_or_else(|| anyhow!("unknown theme: {theme_name}"))?;

        let mut ui = UiConfig::default();
        ui.input_title = self.ui.input_title;
        if let Some(message) = self.ui.empty_message {
            ui.empty_message = message;
        }
        if let Some(title) = self.ui.detail_title {
            ui.detail_title = title;
        }

        Ok(ResolvedConfig {
            base_url,
            page_size,
            timeout,
            initial_query: self.ui.initial_query.unwrap_or_default(),
            theme_name,
            theme,
            ui,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let resolved = RawConfig::default().resolve().unwrap();
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.page_size, DEFAULT_PAGE_SIZE);
        assert!(resolved.timeout.is_none());
        assert_eq!(resolved.theme_name, "slate");
        assert_eq!(resolved.initial_query, "");
    }

    #[test]
    fn cli_overrides_take_precedence() {
        let mut cli = CliArgs::parse_from(["qbx"]);
        cli.base_url = Some("http://questions.local:9000".into());
        cli.page_size = Some(25);
        cli.timeout = Some(5);
        cli.title = Some("Bank".into());
        cli.initial_query = Some("capital".into());
        cli.theme = Some("light".into());

        let mut config = RawConfig::default();
        config.service.base_url = Some("http://file-value:1234".into());
        config.ui.theme = Some("slate".into());
        config.apply_cli_overrides(&cli);

        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.base_url, "http://questions.local:9000");
        assert_eq!(resolved.page_size, 25);
        assert_eq!(resolved.timeout, Some(Duration::from_secs(5)));
        assert_eq!(resolved.ui.input_title.as_deref(), Some("Bank"));
        assert_eq!(resolved.initial_query, "capital");
        assert_eq!(resolved.theme_name, "light");
    }

    #[test]
    fn trailing_slash_is_trimmed_from_the_base_url() {
        let mut config = RawConfig::default();
        config.service.base_url = Some("http://localhost:5000/".into());
        assert_eq!(config.resolve().unwrap().base_url, "http://localhost:5000");
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let mut config = RawConfig::default();
        config.service.base_url = Some("ftp://questions".into());
        assert!(config.resolve().is_err());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut config = RawConfig::default();
        config.service.page_size = Some(0);
        assert!(config.resolve().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = RawConfig::default();
        config.service.timeout_secs = Some(0);
        assert!(config.resolve().is_err());
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let mut config = RawConfig::default();
        config.ui.theme = Some("mauve".into());
        assert!(config.resolve().is_err());
    }
}
