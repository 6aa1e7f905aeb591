/// Labels and titles the embedding binary can customize.
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Prompt label in front of the search input.
    pub input_title: Option<String>,
    /// Message shown when a page comes back empty.
    pub empty_message: String,
    /// Header of the detail overlay.
    pub detail_title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            input_title: None,
            empty_message: "No results found. Try a different search term.".to_string(),
            detail_title: "Question Details".to_string(),
        }
    }
}
