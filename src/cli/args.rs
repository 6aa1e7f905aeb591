use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, ValueEnum};

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `qbx` binary.
#[derive(Parser, Debug)]
#[command(
    name = "qbx",
    version,
    long_version = long_version(),
    about = "Interactive terminal browser for a remote question bank",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "QBX_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'u',
        long = "base-url",
        value_name = "URL",
        env = "QBX_BASE_URL",
        help = "Question service base address (default: http://localhost:5000)"
    )]
    pub(crate) base_url: Option<String>,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "QUERY",
        help = "Provide an initial search query (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        long = "page-size",
        value_name = "NUM",
        help = "Results requested per page (default: 10)"
    )]
    pub(crate) page_size: Option<u32>,
    #[arg(
        long,
        value_name = "SECONDS",
        help = "Overall request timeout (default: transport default)"
    )]
    pub(crate) timeout: Option<u64>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the input prompt title (default: Search)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the accepted question"
    )]
    pub(crate) output: OutputFormat,
}

/// Output formats supported for the session outcome.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}
