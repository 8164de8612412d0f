use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

/// Opaque tag the caller attaches to a request; echoed back with the result.
pub type Ticket = u64;

/// Parameters of one page request, already in wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub status_id: String,
    pub sorting: String,
    /// Omitted from the request when `None` or empty.
    pub expr: Option<String>,
}

/// An entry as delivered by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardItem {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub status: Option<String>,
    /// Remaining fields, kept opaque.
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub page: u32,
    pub total_pages: u32,
    pub total_elements: Option<u64>,
    pub content_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    pub items: Vec<BoardItem>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// `Ok(None)` means the backend answered without a usable payload.
    PageFetched {
        ticket: Ticket,
        result: Result<Option<PageResponse>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Decode => write!(f, "malformed response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
