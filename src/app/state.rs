use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;
use tracing::debug;

use super::QueryState;
use crate::client::QuestionService;
use crate::fetch::{self, FetchCommand, FetchResult};
use crate::input::SearchInput;
use crate::theme::Theme;
use crate::types::{Question, UiConfig};

/// Message surfaced for every failed fetch, whatever the cause.
pub(crate) const FETCH_ERROR_MESSAGE: &str = "Error fetching questions.";

/// Knobs the embedding binary can set before launching the UI.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub initial_query: String,
    pub page_size: u32,
    pub ui: UiConfig,
    pub theme: Theme,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            initial_query: String::new(),
            page_size: super::DEFAULT_PAGE_SIZE,
            ui: UiConfig::default(),
            theme: Theme::default(),
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.fetch_tx.send(FetchCommand::Shutdown);
    }
}

/// Aggregate state of the interactive session.
///
/// Owns the current query, the last successfully fetched page, the transient
/// loading/error flags, the modal slot, and the channel ends of the fetch
/// worker.
pub struct App {
    pub(crate) query: QueryState,
    pub(crate) results: Vec<Question>,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    /// Captured question while the detail overlay is open. `Some` is the
    /// `Open` state of the modal; the invariant "modal open implies a
    /// selection exists" holds by construction.
    pub(crate) modal: Option<Question>,
    pub(crate) search_input: SearchInput,
    pub(crate) table_state: TableState,
    pub(crate) ui: UiConfig,
    pub theme: Theme,
    pub(crate) throbber_state: ThrobberState,
    fetch_tx: Sender<FetchCommand>,
    fetch_rx: Receiver<FetchResult>,
    fetch_latest_generation: Arc<AtomicU64>,
    next_generation: u64,
    latest_generation: Option<u64>,
}

impl App {
    pub fn new(service: Box<dyn QuestionService>, options: AppOptions) -> Self {
        let (fetch_tx, fetch_rx, fetch_latest_generation) = fetch::spawn(service);
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        let mut app = Self {
            query: QueryState::new(options.initial_query.clone(), options.page_size),
            results: Vec::new(),
            loading: false,
            error: None,
            modal: None,
            search_input: SearchInput::new(options.initial_query),
            table_state,
            ui: options.ui,
            theme: options.theme,
            throbber_state: ThrobberState::default(),
            fetch_tx,
            fetch_rx,
            fetch_latest_generation,
            next_generation: 0,
            latest_generation: None,
        };
        app.request_fetch();
        app
    }

    /// Issue a fetch for the current query, unless the query is blank.
    ///
    /// Allocates the next generation id and publishes it so the worker can
    /// skip superseded work.
    pub(crate) fn request_fetch(&mut self) {
        if self.query.is_blank() {
            return;
        }
        self.next_generation = self.next_generation.saturating_add(1);
        let id = self.next_generation;
        self.latest_generation = Some(id);
        self.loading = true;
        self.fetch_latest_generation
            .store(id, AtomicOrdering::Release);
        let _ = self.fetch_tx.send(FetchCommand::Search {
            id,
            request: self.query.to_request(),
        });
    }

    /// Drain any fetch results waiting on the receiver channel.
    pub(crate) fn pump_fetch_results(&mut self) {
        loop {
            match self.fetch_rx.try_recv() {
                Ok(result) => self.handle_fetch_result(result),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Apply a completed fetch if it corresponds to the latest generation.
    fn handle_fetch_result(&mut self, result: FetchResult) {
        if Some(result.id) != self.latest_generation {
            debug!(id = result.id, "ignoring stale fetch result");
            return;
        }

        self.loading = false;
        match result.outcome {
            Ok(questions) => {
                self.results = questions;
                self.error = None;
                self.ensure_selection();
            }
            Err(_) => {
                // Previous results stay on screen: stale data over no data.
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Keep the row selection valid for the current result page.
    pub(crate) fn ensure_selection(&mut self) {
        if self.results.is_empty() {
            self.table_state.select(None);
        } else if self.table_state.selected().is_none() {
            self.table_state.select(Some(0));
        } else if let Some(selected) = self.table_state.selected() {
            let len = self.results.len();
            if selected >= len {
                self.table_state.select(Some(len.saturating_sub(1)));
            }
        }
    }

    pub(crate) fn selected_question(&self) -> Option<&Question> {
        self.results.get(self.table_state.selected()?)
    }
}
