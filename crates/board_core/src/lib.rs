//! Admin board core: pure list controller state machine and view-model helpers.
mod accumulator;
mod config;
mod debounce;
mod effect;
mod item;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use accumulator::{Page, ResultAccumulator};
pub use config::{BoardConfig, SearchMode};
pub use debounce::SearchDebouncer;
pub use effect::Effect;
pub use item::{local_filter, Item};
pub use msg::Msg;
pub use query::{ListQueryState, Query, QueryFingerprint, SortKey, StatusFilter};
pub use state::{has_more_pages, BoardState};
pub use update::update;
pub use view_model::{BoardViewModel, ResultPhase};
