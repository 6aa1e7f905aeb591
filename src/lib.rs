//! Core crate exports for building and running the `qbx` terminal interface.
//!
//! The root module re-exports the types an embedder needs to configure and
//! launch a browsing session without digging through the module hierarchy.

pub mod app;
pub mod app_dirs;
pub mod client;
pub mod fetch;
pub mod logging;
pub mod theme;
pub mod types;

mod input;
mod modal;
mod statusbar;
mod tables;

pub use app::{App, AppOptions, DEFAULT_PAGE_SIZE, QueryState};
pub use client::{ClientError, HttpQuestionService, QuestionService, SearchRequest};
pub use theme::Theme;
pub use types::{AnagramBlock, BrowseOutcome, ChoiceOption, Question, QuestionKind, UiConfig};
