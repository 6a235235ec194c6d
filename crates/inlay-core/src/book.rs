//! The catalog record shared between the host list and the embedded editor

use serde::{Deserialize, Serialize};

/// One catalog volume, as rendered on a host card and edited by the
/// embedded detail screen.
///
/// Identity is positional (the record's index in the owning list).
/// Edits replace the whole record; there is no partial-field mutation.
/// The wire form uses camelCase keys (`publishDate`, `pageCount`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// First listed author only; co-authors are dropped on decode.
    pub author: String,
    pub description: String,
    pub publish_date: String,
    pub page_count: i64,
}

impl Book {
    /// Author line as shown on a host card.
    pub fn by_line(&self) -> String {
        format!("by {}", self.author)
    }
}
