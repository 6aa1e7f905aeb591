//! Types shared across the user interface and the question-service client.

mod outcome;
mod question;
mod ui;

pub use outcome::BrowseOutcome;
pub use question::{AnagramBlock, ChoiceOption, Question, QuestionKind};
pub use ui::UiConfig;
