//! CitySift - Interactive city search
//!
//! A search bar bound to a fixed, in-memory list of city names,
//! filtering a table as the user types or commits a search.
//!
//! # Features
//!
//! - **Debounced input**: rapid keystrokes collapse into one filter
//!   pass per 300 ms window, trailing-edge, with duplicate settled
//!   values suppressed
//! - **Immediate commit**: an explicit search request bypasses the
//!   window and always re-renders
//! - **Prefix filter**: case-sensitive `starts_with` over the city
//!   list, dataset order preserved; the empty query shows everything
//! - **Two surfaces**: a ratatui screen and one-shot CLI commands
//!   over the same dataset and filter code path
//!
//! # Example
//!
//! ```
//! use citysift::{Dataset, ListModel, QueryPipeline};
//! use std::time::{Duration, Instant};
//!
//! let mut model = ListModel::new(Dataset::builtin());
//! let mut pipeline = QueryPipeline::new();
//!
//! let start = Instant::now();
//! pipeline.note_input(Some("Lo"), start);
//!
//! // The event loop polls; the burst settles after 300ms.
//! if let Some(query) = pipeline.poll(start + Duration::from_millis(300)) {
//!     model.apply(&query);
//! }
//!
//! assert_eq!(model.row_count(), 2); // London, Los Angeles
//! ```

pub mod dataset;
pub mod error;
pub mod list;
pub mod logging;
pub mod query;
pub mod tui;

// Re-export main types
pub use dataset::Dataset;
pub use error::{CitySiftError, Result};
pub use list::{prefix_match_indices, ListModel};
pub use query::{QueryPipeline, DEBOUNCE_WINDOW};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
