//! The catalog card list and its embedded detail editor

use inlay_core::prelude::*;
use inlay_core::{Book, EditStatus, EditorResult};

use crate::message::HostEvent;

/// Host-toolkit surface the card list renders into.
///
/// One method per mutation the flow performs; what a card looks like is
/// the toolkit's business.
pub trait ListSurface {
    /// A card appended during initial population.
    fn card_added(&mut self, index: usize, book: &Book);

    /// An existing card re-rendered in place after an edit landed.
    fn card_updated(&mut self, index: usize, book: &Book);

    /// The loading indicator is done; cards are populated.
    fn loading_finished(&mut self);

    /// The fetch failed and population was abandoned.
    fn loading_failed(&mut self, message: &str);
}

/// Launches the embedded editor screen.
///
/// The launch is one-way; the outcome arrives later as
/// [`HostEvent::EditorClosed`] carrying the same token.
pub trait EditorLauncher {
    fn launch(&mut self, token: usize, book: &Book) -> Result<()>;
}

/// Owner of the fetched book list and the per-book card views.
///
/// The list is index-stable for its lifetime: population happens once,
/// and a completed edit replaces exactly one record in place.
pub struct CardList<S, E> {
    books: Vec<Book>,
    surface: S,
    editor: E,
}

impl<S: ListSurface, E: EditorLauncher> CardList<S, E> {
    pub fn new(surface: S, editor: E) -> Self {
        Self {
            books: Vec::new(),
            surface,
            editor,
        }
    }

    /// Decoded books in fetch order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Take ownership of the fetched books and render one card each.
    pub fn initialize(&mut self, books: Vec<Book>) {
        self.books = books;
        for (index, book) in self.books.iter().enumerate() {
            self.surface.card_added(index, book);
        }
        self.surface.loading_finished();
        info!(count = self.books.len(), "card list populated");
    }

    /// Open the embedded editor for the card at `index`.
    ///
    /// The book is re-read from the list at call time, so a previous
    /// edit's replacement is what crosses the boundary. The index rides
    /// along as the correlation token.
    pub fn request_edit(&mut self, index: usize) -> Result<()> {
        let book = self.books.get(index).ok_or_else(|| {
            Error::protocol(format!("edit requested for unknown card index {index}"))
        })?;
        debug!(index, title = %book.title, "launching embedded editor");
        self.editor.launch(index, book)
    }

    /// Reconcile a closed editor back into the list.
    ///
    /// A saved result replaces exactly one record and re-renders
    /// exactly that card; a cancellation changes nothing. A saved
    /// result without a payload means the handoff itself is broken,
    /// and nothing is touched.
    pub fn complete_edit(&mut self, result: EditorResult) -> Result<()> {
        match result.status {
            EditStatus::Cancelled => {
                debug!(token = result.token, "edit cancelled, list untouched");
                Ok(())
            }
            EditStatus::Saved => {
                let book = result.payload.ok_or_else(|| {
                    Error::protocol(format!(
                        "editor reported saved for token {} without the edited record",
                        result.token
                    ))
                })?;
                let slot = self.books.get_mut(result.token).ok_or_else(|| {
                    Error::protocol(format!("editor result for unknown token {}", result.token))
                })?;
                *slot = book;
                self.surface.card_updated(result.token, &self.books[result.token]);
                Ok(())
            }
        }
    }

    /// Drive the flow from one marshaled loop event.
    pub fn apply_event(&mut self, event: HostEvent) -> Result<()> {
        match event {
            HostEvent::CatalogLoaded { books, failures } => {
                if !failures.is_empty() {
                    warn!(count = failures.len(), "volumes dropped during decode");
                }
                self.initialize(books);
                Ok(())
            }
            HostEvent::CatalogFailed { error } => {
                self.surface.loading_failed(&error.to_string());
                Err(error)
            }
            HostEvent::EditorClosed { result } => self.complete_edit(result),
        }
    }
}
