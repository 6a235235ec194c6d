//! # inlay-core - Core Domain Types
//!
//! Foundation crate for Inlay. Provides the catalog record, the
//! host/embedded boundary messages, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`book`)
//! - [`Book`] - One catalog volume; replaced wholesale when an edit
//!   round-trip completes
//!
//! ### Boundary Messages (`events`)
//! - [`EditorResult`] / [`EditStatus`] - Outcome of one embedded-editor
//!   round-trip, correlated by integer token
//! - [`CELL_CHANNEL`] / [`SET_CELL_NUMBER`] - The one-way cell-position
//!   notice sent after an embedded view attaches
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable`
//!   classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use inlay_core::prelude::*;
//! ```

pub mod book;
pub mod error;
pub mod events;
pub mod logging;

/// Prelude for common imports used throughout all Inlay crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use book::Book;
pub use error::{Error, Result};
pub use events::{EditStatus, EditorResult, CELL_CHANNEL, SET_CELL_NUMBER};
