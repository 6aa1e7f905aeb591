use crate::client::SearchRequest;

/// The user's current search text plus pagination cursor.
///
/// Changing the text always snaps the cursor back to the first page; the
/// service reports no total count, so "is there a next page" is inferred from
/// whether the last page came back full.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    text: String,
    page: u32,
    page_size: u32,
}

impl QueryState {
    pub fn new(initial_text: impl Into<String>, page_size: u32) -> Self {
        Self {
            text: initial_text.into(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// True when the query is blank and no fetch should be issued.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the search text, resetting the cursor to page 1.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.page = 1;
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Move back one page, never below 1.
    pub fn prev_page(&mut self) {
        self.page = self.page.max(2) - 1;
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Heuristic last-page signal: a short page means no page follows.
    pub fn has_next(&self, last_result_len: usize) -> bool {
        last_result_len as u64 >= u64::from(self.page_size)
    }

    /// Request parameters for the current text and page.
    pub fn to_request(&self) -> SearchRequest {
        SearchRequest {
            title: self.text.clone(),
            page: self.page,
            per_page: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_text_resets_the_page_cursor() {
        let mut query = QueryState::new("", 10);
        query.next_page();
        query.next_page();
        assert_eq!(query.page(), 3);

        query.set_text("paris");
        assert_eq!(query.page(), 1);
        assert_eq!(query.to_request().page, 1);
    }

    #[test]
    fn prev_page_saturates_at_one() {
        let mut query = QueryState::new("paris", 10);
        query.prev_page();
        assert_eq!(query.page(), 1);
        assert!(!query.has_prev());

        query.next_page();
        assert!(query.has_prev());
        query.prev_page();
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn short_page_means_no_next_page() {
        let query = QueryState::new("paris", 10);
        assert!(query.has_next(10));
        assert!(!query.has_next(9));
        assert!(!query.has_next(0));
    }

    #[test]
    fn blank_detection_ignores_whitespace() {
        assert!(QueryState::new("", 10).is_blank());
        assert!(QueryState::new("   ", 10).is_blank());
        assert!(!QueryState::new("a", 10).is_blank());
    }

    #[test]
    fn request_carries_text_page_and_size() {
        let mut query = QueryState::new("capital", 25);
        query.next_page();

        let request = query.to_request();
        assert_eq!(request.title, "capital");
        assert_eq!(request.page, 2);
        assert_eq!(request.per_page, 25);
    }

    #[test]
    fn page_size_is_clamped_to_at_least_one() {
        assert_eq!(QueryState::new("x", 0).page_size(), 1);
    }
}
