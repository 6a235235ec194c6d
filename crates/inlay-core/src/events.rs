//! Messages crossing the host/embedded boundary

use serde::{Deserialize, Serialize};

use crate::book::Book;

/// Channel carrying the one-way cell-position notice.
pub const CELL_CHANNEL: &str = "example/cell";

/// Method name of the cell-position notice.
pub const SET_CELL_NUMBER: &str = "setCellNumber";

/// How the embedded editor screen was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EditStatus {
    Saved,
    Cancelled,
}

/// Outcome of one editor round-trip, correlated back to the launching
/// card by the integer token it was launched with.
///
/// Status and payload travel separately across the boundary, so a
/// `Saved` status with a missing payload is representable here; the
/// card list treats that combination as a broken handoff.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorResult {
    pub token: usize,
    pub status: EditStatus,
    #[serde(default)]
    pub payload: Option<Book>,
}

impl EditorResult {
    /// A completed edit carrying the replacement record.
    pub fn saved(token: usize, book: Book) -> Self {
        Self {
            token,
            status: EditStatus::Saved,
            payload: Some(book),
        }
    }

    /// A dismissed editor; the list must stay untouched.
    pub fn cancelled(token: usize) -> Self {
        Self {
            token,
            status: EditStatus::Cancelled,
            payload: None,
        }
    }
}
