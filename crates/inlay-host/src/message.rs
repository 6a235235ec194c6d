//! Events marshaled onto the host UI loop

use inlay_catalog::DecodeFailure;
use inlay_core::{Book, EditorResult, Error};

/// One completed piece of outside work, delivered to the UI loop.
///
/// The catalog fetch runs on a spawned task; everything that touches
/// list or view state runs on the loop, driven by exactly one of these
/// per completion. There is no other cross-thread traffic.
#[derive(Debug)]
pub enum HostEvent {
    /// Fetch finished and decoded; failures ride along for inspection.
    CatalogLoaded {
        books: Vec<Book>,
        failures: Vec<DecodeFailure>,
    },

    /// Fetch failed; list population is abandoned.
    CatalogFailed { error: Error },

    /// The embedded editor screen closed, saved or cancelled.
    EditorClosed { result: EditorResult },
}
