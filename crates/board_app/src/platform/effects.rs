use board_core::{Effect, Item, Msg, Page, Query, QueryFingerprint};
use board_engine::{BoardItem, EngineEvent, EngineHandle, PageRequest, PageResponse};
use board_logging::{board_debug, board_info, board_warn};

/// Navigation collaborator for item clicks.
pub trait Router {
    fn navigate_to_detail(&mut self, kind: &str, id: &str);
}

/// Announces the detail route on stdout.
pub struct ConsoleRouter;

impl Router for ConsoleRouter {
    fn navigate_to_detail(&mut self, kind: &str, id: &str) {
        let path = Effect::detail_path(kind, id);
        board_info!("Navigate {}", path);
        println!("-> {path}");
    }
}

pub struct EffectRunner<R: Router> {
    engine: EngineHandle,
    router: R,
}

impl<R: Router> EffectRunner<R> {
    pub fn new(engine: EngineHandle, router: R) -> Self {
        Self { engine, router }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch { fingerprint, query } => {
                    board_debug!(
                        "Fetch page={} status={:?} sort={:?} search_len={}",
                        query.page,
                        query.status,
                        query.sort,
                        query.search.len()
                    );
                    self.engine.fetch(fingerprint.as_u64(), page_request(&query));
                }
                Effect::NavigateToDetail { kind, id } => {
                    self.router.navigate_to_detail(&kind, &id);
                }
            }
        }
    }

    /// Drains finished fetches as board messages.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(event_to_msg(event));
        }
        inbox
    }
}

pub fn page_request(query: &Query) -> PageRequest {
    PageRequest {
        page: query.page,
        status_id: query.status.as_wire().to_string(),
        sorting: query.sort.as_wire().to_string(),
        expr: Some(query.search.clone()).filter(|expr| !expr.is_empty()),
    }
}

pub fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched { ticket, result } => {
            let fingerprint = QueryFingerprint::from_u64(ticket);
            match result {
                Ok(page) => Msg::PageLoaded {
                    fingerprint,
                    page: page.map(map_page),
                },
                Err(err) => {
                    board_warn!("Board fetch failed: {}", err);
                    Msg::FetchFailed { fingerprint }
                }
            }
        }
    }
}

fn map_page(response: PageResponse) -> Page {
    Page {
        items: response.items.into_iter().map(map_item).collect(),
        page_index: response.meta.page,
        total_pages: response.meta.total_pages,
    }
}

fn map_item(item: BoardItem) -> Item {
    Item {
        id: item.id,
        title: item.title,
        provider: item.provider,
        status: item.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::{SortKey, StatusFilter};
    use board_engine::{FailureKind, FetchError, PageMeta};

    #[test]
    fn query_maps_to_wire_request() {
        let query = Query {
            page: 3,
            status: StatusFilter::All,
            sort: SortKey::TitleAsc,
            search: String::new(),
        };
        let request = page_request(&query);
        assert_eq!(request.page, 3);
        assert_eq!(request.status_id, "All");
        assert_eq!(request.sorting, "NameAsc");
        assert_eq!(request.expr, None);

        let request = page_request(&Query {
            search: "fleet".to_string(),
            ..query
        });
        assert_eq!(request.expr.as_deref(), Some("fleet"));
    }

    #[test]
    fn events_carry_the_fingerprint_back() {
        let fingerprint = Query::default().fingerprint();
        let msg = event_to_msg(EngineEvent::PageFetched {
            ticket: fingerprint.as_u64(),
            result: Ok(Some(PageResponse {
                items: vec![BoardItem {
                    id: "1".to_string(),
                    title: "Alpha".to_string(),
                    provider: "Acme".to_string(),
                    status: Some("IN_REVIEW".to_string()),
                    extra: Default::default(),
                }],
                meta: PageMeta {
                    page: 0,
                    total_pages: 4,
                    total_elements: Some(50),
                    content_size: Some(1),
                },
            })),
        });
        let mut expected_item = Item::new("1", "Alpha", "Acme");
        expected_item.status = Some("IN_REVIEW".to_string());
        assert_eq!(
            msg,
            Msg::PageLoaded {
                fingerprint,
                page: Some(Page {
                    items: vec![expected_item],
                    page_index: 0,
                    total_pages: 4,
                }),
            }
        );

        let msg = event_to_msg(EngineEvent::PageFetched {
            ticket: 9,
            result: Err(FetchError {
                kind: FailureKind::Timeout,
                message: "slow".to_string(),
            }),
        });
        assert_eq!(
            msg,
            Msg::FetchFailed {
                fingerprint: QueryFingerprint::from_u64(9)
            }
        );
    }
}
