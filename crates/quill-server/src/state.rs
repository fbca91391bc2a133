//! Application state.
//!
//! Shared state for all request handlers.

use crate::PageSettings;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Layout of generated pages.
    pub(crate) page: PageSettings,
}
