use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use tracing::{debug, warn};

use super::{FetchCommand, FetchResult};
use crate::client::QuestionService;

/// Launch the background fetch worker and return its communication channels.
///
/// The returned atomic holds the latest issued generation id; the worker
/// consults it to skip superseded work.
pub fn spawn(
    service: Box<dyn QuestionService>,
) -> (Sender<FetchCommand>, Receiver<FetchResult>, Arc<AtomicU64>) {
    let (command_tx, command_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let latest_generation = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_generation);

    thread::spawn(move || worker_loop(service.as_ref(), &command_rx, &result_tx, &thread_latest));

    (command_tx, result_rx, latest_generation)
}

fn worker_loop(
    service: &dyn QuestionService,
    command_rx: &Receiver<FetchCommand>,
    result_tx: &Sender<FetchResult>,
    latest_generation: &AtomicU64,
) {
    while let Ok(command) = command_rx.recv() {
        match drain_to_newest(command_rx, command) {
            FetchCommand::Search { id, request } => {
                if is_stale(id, latest_generation) {
                    debug!(id, "skipping superseded fetch");
                    continue;
                }
                debug!(id, title = %request.title, page = request.page, "fetching page");
                let outcome = service.search(&request);
                if let Err(err) = &outcome {
                    warn!(id, error = %err, "fetch failed");
                }
                if is_stale(id, latest_generation) {
                    debug!(id, "dropping stale response");
                    continue;
                }
                if result_tx.send(FetchResult { id, outcome }).is_err() {
                    break;
                }
            }
            FetchCommand::Shutdown => break,
        }
    }
}

/// Collapse a burst of queued commands down to the most recent one.
/// Shutdown always wins over queued searches.
fn drain_to_newest(command_rx: &Receiver<FetchCommand>, mut newest: FetchCommand) -> FetchCommand {
    loop {
        match command_rx.try_recv() {
            Ok(FetchCommand::Shutdown) => return FetchCommand::Shutdown,
            Ok(command) => newest = command,
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => return newest,
        }
    }
}

fn is_stale(id: u64, latest_generation: &AtomicU64) -> bool {
    latest_generation.load(AtomicOrdering::Acquire) != id
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering as AtomicOrdering;
    use std::time::Duration;

    use super::*;
    use crate::client::{ClientError, SearchRequest};
    use crate::types::{Question, QuestionKind};

    /// Service stub that labels each page with the requested page number.
    struct PageEchoService;

    impl QuestionService for PageEchoService {
        fn search(&self, request: &SearchRequest) -> Result<Vec<Question>, ClientError> {
            Ok(vec![Question {
                id: format!("page-{}", request.page),
                title: request.title.clone(),
                kind: QuestionKind::Other,
            }])
        }
    }

    fn search_command(id: u64, page: u32) -> FetchCommand {
        FetchCommand::Search {
            id,
            request: SearchRequest {
                title: "paris".into(),
                page,
                per_page: 10,
            },
        }
    }

    #[test]
    fn current_generation_produces_a_result() {
        let (tx, rx, latest) = spawn(Box::new(PageEchoService));
        latest.store(1, AtomicOrdering::Release);
        tx.send(search_command(1, 1)).unwrap();

        let result = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(result.id, 1);
        assert_eq!(result.outcome.unwrap()[0].id, "page-1");
    }

    #[test]
    fn superseded_generation_is_never_delivered() {
        let (tx, rx, latest) = spawn(Box::new(PageEchoService));

        // Generation 2 is already the latest before the worker sees id 1.
        latest.store(2, AtomicOrdering::Release);
        tx.send(search_command(1, 1)).unwrap();
        tx.send(search_command(2, 2)).unwrap();

        let result = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(result.id, 2);
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn queued_commands_collapse_to_the_newest() {
        let (tx, rx) = mpsc::channel();
        tx.send(search_command(2, 2)).unwrap();
        tx.send(search_command(3, 3)).unwrap();

        let newest = drain_to_newest(&rx, search_command(1, 1));
        let FetchCommand::Search { id, request } = newest else {
            panic!("expected a search command");
        };
        assert_eq!(id, 3);
        assert_eq!(request.page, 3);
    }

    #[test]
    fn queued_shutdown_wins() {
        let (tx, rx) = mpsc::channel();
        tx.send(search_command(2, 2)).unwrap();
        tx.send(FetchCommand::Shutdown).unwrap();

        assert!(matches!(
            drain_to_newest(&rx, search_command(1, 1)),
            FetchCommand::Shutdown
        ));
    }

    #[test]
    fn shutdown_stops_the_worker() {
        let (tx, rx, _latest) = spawn(Box::new(PageEchoService));
        tx.send(FetchCommand::Shutdown).unwrap();

        // The worker exits and drops its result sender.
        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(1)),
            Err(mpsc::RecvTimeoutError::Disconnected)
        ));
    }
}
