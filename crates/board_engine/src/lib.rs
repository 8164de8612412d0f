//! Admin board engine: REST data source and fetch execution.
mod decode;
mod engine;
mod source;
mod types;

pub use decode::decode_page;
pub use engine::EngineHandle;
pub use source::{BoardSource, FetchSettings, ReqwestBoardSource, ResponseShape};
pub use types::{
    BoardItem, EngineEvent, FailureKind, FetchError, PageMeta, PageRequest, PageResponse, Ticket,
};
