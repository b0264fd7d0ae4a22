pub mod catalog;
pub mod feedback;
pub mod layout;
pub mod selection;

pub use catalog::{catalog, filter_by_query, find_cuisine, suggest, CatalogView, CuisineEntry};
pub use feedback::{
    emit_quietly, FeedbackCue, FeedbackError, FeedbackSink, NoopFeedback, TerminalBell,
};
pub use layout::grid_columns;
pub use selection::BALANCED_PRESET;
