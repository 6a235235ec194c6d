//! Flow A end to end: fetch marshaling, population, and the editor
//! round-trip against recording seams

use std::cell::RefCell;
use std::rc::Rc;

use inlay_catalog::{decode_volumes, CatalogClient, VolumesQuery};
use inlay_core::{Book, EditStatus, EditorResult, Error, Result};
use inlay_host::{
    spawn_catalog_fetch, CardList, EditorLauncher, HostEvent, ListSurface,
};
use serde_json::{json, Value};

// ─────────────────────────────────────────────────────────────────
// Recording seams
// ─────────────────────────────────────────────────────────────────

#[derive(Default)]
struct SurfaceLog {
    added: Vec<(usize, String)>,
    updated: Vec<(usize, String)>,
    finished: bool,
    failed: Option<String>,
}

#[derive(Clone, Default)]
struct RecordingSurface(Rc<RefCell<SurfaceLog>>);

impl ListSurface for RecordingSurface {
    fn card_added(&mut self, index: usize, book: &Book) {
        self.0.borrow_mut().added.push((index, book.title.clone()));
    }

    fn card_updated(&mut self, index: usize, book: &Book) {
        self.0.borrow_mut().updated.push((index, book.title.clone()));
    }

    fn loading_finished(&mut self) {
        self.0.borrow_mut().finished = true;
    }

    fn loading_failed(&mut self, message: &str) {
        self.0.borrow_mut().failed = Some(message.to_string());
    }
}

#[derive(Clone, Default)]
struct RecordingLauncher(Rc<RefCell<Vec<(usize, Book)>>>);

impl EditorLauncher for RecordingLauncher {
    fn launch(&mut self, token: usize, book: &Book) -> Result<()> {
        self.0.borrow_mut().push((token, book.clone()));
        Ok(())
    }
}

fn card_list() -> (
    CardList<RecordingSurface, RecordingLauncher>,
    Rc<RefCell<SurfaceLog>>,
    Rc<RefCell<Vec<(usize, Book)>>>,
) {
    let surface = RecordingSurface::default();
    let launcher = RecordingLauncher::default();
    let log = surface.0.clone();
    let launches = launcher.0.clone();
    (CardList::new(surface, launcher), log, launches)
}

fn volume(title: &str, author: &str) -> Value {
    json!({
        "volumeInfo": {
            "title": title,
            "authors": [author],
            "description": format!("About {title}."),
            "publishedDate": "2001",
            "pageCount": 200
        }
    })
}

fn fetched_books() -> Vec<Book> {
    let (books, failures) = decode_volumes(vec![
        volume("The Burning", "Tim Madigan"),
        volume("Tulsa, 1921", "Randy Krehbiel"),
        volume("Black Wall Street", "Hannibal B. Johnson"),
    ]);
    assert!(failures.is_empty());
    books
}

// ─────────────────────────────────────────────────────────────────
// Round-trip behavior
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_population_then_edit_round_trip_updates_one_card() {
    let (mut list, log, launches) = card_list();

    list.apply_event(HostEvent::CatalogLoaded {
        books: fetched_books(),
        failures: Vec::new(),
    })
    .unwrap();

    {
        let log = log.borrow();
        assert_eq!(log.added.len(), 3);
        assert!(log.finished);
    }

    // Edit the middle card.
    list.request_edit(1).unwrap();
    assert_eq!(launches.borrow().len(), 1);
    assert_eq!(launches.borrow()[0].0, 1);

    let mut edited = launches.borrow()[0].1.clone();
    edited.title = "Tulsa, 1921 (annotated)".to_string();
    list.apply_event(HostEvent::EditorClosed {
        result: EditorResult::saved(1, edited),
    })
    .unwrap();

    assert_eq!(list.books()[0].title, "The Burning");
    assert_eq!(list.books()[1].title, "Tulsa, 1921 (annotated)");
    assert_eq!(list.books()[2].title, "Black Wall Street");
    assert_eq!(
        log.borrow().updated,
        vec![(1, "Tulsa, 1921 (annotated)".to_string())]
    );
}

#[test]
fn test_cancelled_editor_changes_nothing() {
    let (mut list, log, _) = card_list();
    list.initialize(fetched_books());
    let before: Vec<Book> = list.books().to_vec();

    list.request_edit(2).unwrap();
    list.apply_event(HostEvent::EditorClosed {
        result: EditorResult::cancelled(2),
    })
    .unwrap();

    assert_eq!(list.books(), before.as_slice());
    assert!(log.borrow().updated.is_empty());
}

#[test]
fn test_saved_without_a_record_is_fatal_and_touches_nothing() {
    let (mut list, log, _) = card_list();
    list.initialize(fetched_books());
    let before: Vec<Book> = list.books().to_vec();

    let err = list
        .apply_event(HostEvent::EditorClosed {
            result: EditorResult {
                token: 0,
                status: EditStatus::Saved,
                payload: None,
            },
        })
        .unwrap_err();

    assert!(matches!(err, Error::Protocol { .. }));
    assert!(err.is_fatal());
    assert_eq!(list.books(), before.as_slice());
    assert!(log.borrow().updated.is_empty());
}

#[test]
fn test_consecutive_edits_of_the_same_card_compose() {
    let (mut list, log, launches) = card_list();
    list.initialize(fetched_books());

    list.request_edit(0).unwrap();
    list.complete_edit(EditorResult::saved(0, {
        let mut b = list.books()[0].clone();
        b.page_count = 337;
        b
    }))
    .unwrap();

    // The relaunch sees the edited record, not the fetched one.
    list.request_edit(0).unwrap();
    assert_eq!(launches.borrow()[1].1.page_count, 337);
    assert_eq!(log.borrow().updated.len(), 1);
}

// ─────────────────────────────────────────────────────────────────
// Fetch marshaling
// ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_failed_fetch_marshals_back_and_aborts_population() {
    let (mut list, log, _) = card_list();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    // Port 0 is never connectable; the task posts CatalogFailed.
    let client = CatalogClient::new("http://127.0.0.1:0/volumes");
    let handle = spawn_catalog_fetch(client, VolumesQuery::default(), tx);

    let event = rx.recv().await.expect("one completion event");
    let err = list.apply_event(event).unwrap_err();

    assert!(matches!(err, Error::Network { .. }));
    assert!(err.is_recoverable());
    let log = log.borrow();
    assert!(log.failed.is_some());
    assert!(!log.finished);
    assert!(log.added.is_empty());

    handle.await.expect("fetch task does not panic");
    assert!(rx.recv().await.is_none(), "task posts exactly one event");
}
