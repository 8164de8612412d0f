use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use board_logging::{board_debug, board_error, board_warn};

use crate::source::{BoardSource, FetchSettings, ReqwestBoardSource};
use crate::{EngineEvent, FetchError, PageRequest, Ticket};

enum EngineCommand {
    Fetch { ticket: Ticket, request: PageRequest },
}

/// Runs page fetches on a background tokio runtime.
///
/// Fetches are independent: several may be in flight and their events arrive
/// in completion order, not submission order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let source = ReqwestBoardSource::new(settings)?;
        Ok(Self::with_source(Arc::new(source)))
    }

    pub fn with_source(source: Arc<dyn BoardSource>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    board_error!("Failed to start fetch runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch(&self, ticket: Ticket, request: PageRequest) {
        if self
            .cmd_tx
            .send(EngineCommand::Fetch { ticket, request })
            .is_err()
        {
            board_warn!("Fetch runtime is gone; dropping ticket {}", ticket);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    source: &dyn BoardSource,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { ticket, request } => {
            board_debug!(
                "Fetching page {} status={} sorting={} ticket={}",
                request.page,
                request.status_id,
                request.sorting,
                ticket
            );
            let result = source.fetch_page(&request).await;
            if let Err(err) = &result {
                board_warn!("Fetch for ticket {} failed: {}", ticket, err);
            }
            let _ = event_tx.send(EngineEvent::PageFetched { ticket, result });
        }
    }
}
