use std::sync::Arc;
use std::time::Duration;

use board_engine::{
    BoardItem, BoardSource, EngineEvent, EngineHandle, FailureKind, FetchError, PageMeta,
    PageRequest, PageResponse,
};

/// Answers page N after `delays[N]` milliseconds; page 9 always fails.
struct DelayedSource {
    delays: Vec<u64>,
}

#[async_trait::async_trait]
impl BoardSource for DelayedSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Option<PageResponse>, FetchError> {
        if request.page == 9 {
            return Err(FetchError {
                kind: FailureKind::HttpStatus(500),
                message: "boom".to_string(),
            });
        }
        let delay = self.delays.get(request.page as usize).copied().unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(Some(PageResponse {
            items: vec![BoardItem {
                id: format!("item-{}", request.page),
                title: "Alpha".to_string(),
                provider: "Acme".to_string(),
                status: None,
                extra: Default::default(),
            }],
            meta: PageMeta {
                page: request.page,
                total_pages: 3,
                total_elements: None,
                content_size: Some(1),
            },
        }))
    }
}

fn request(page: u32) -> PageRequest {
    PageRequest {
        page,
        status_id: "All".to_string(),
        sorting: "NameAsc".to_string(),
        expr: None,
    }
}

#[test]
fn events_arrive_in_completion_order_with_tickets() {
    let engine = EngineHandle::with_source(Arc::new(DelayedSource {
        delays: vec![300, 10],
    }));
    engine.fetch(100, request(0));
    engine.fetch(200, request(1));

    let mut tickets = Vec::new();
    for _ in 0..2 {
        match engine.recv_timeout(Duration::from_secs(5)).expect("event") {
            EngineEvent::PageFetched { ticket, result } => {
                let page = result.expect("ok").expect("payload");
                assert_eq!(page.items[0].id, format!("item-{}", page.meta.page));
                tickets.push(ticket);
            }
        }
    }
    assert_eq!(tickets, vec![200, 100]);
    assert!(engine.try_recv().is_none());
}

#[test]
fn failures_are_reported_as_events() {
    let engine = EngineHandle::with_source(Arc::new(DelayedSource { delays: Vec::new() }));
    engine.fetch(7, request(9));

    match engine.recv_timeout(Duration::from_secs(5)).expect("event") {
        EngineEvent::PageFetched { ticket, result } => {
            assert_eq!(ticket, 7);
            assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(500));
        }
    }
}
