//! The catalog fetch task

use inlay_catalog::{decode_volumes, CatalogClient, VolumesQuery};
use inlay_core::prelude::*;
use serde_json::Value;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::message::HostEvent;

/// Run the catalog fetch off the UI loop and post one completion event
/// back onto it.
///
/// This is the only cross-thread handoff in either flow: the task
/// fetches, decodes, and sends; list and view state stay on the loop.
pub fn spawn_catalog_fetch(
    client: CatalogClient,
    query: VolumesQuery,
    events: UnboundedSender<HostEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let event = completion_event(client.fetch(&query).await);
        if events.send(event).is_err() {
            let err = Error::channel_send("host event loop");
            warn!(%err, "loop was gone before the catalog fetch finished");
        }
    })
}

/// Map a finished fetch onto the event that reports it.
fn completion_event(outcome: Result<Vec<Value>>) -> HostEvent {
    match outcome {
        Ok(records) => {
            let (books, failures) = decode_volumes(records);
            info!(
                books = books.len(),
                failures = failures.len(),
                "catalog fetch complete"
            );
            HostEvent::CatalogLoaded { books, failures }
        }
        Err(error) => HostEvent::CatalogFailed { error },
    }
}
