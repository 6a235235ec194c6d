//! The embedded-runtime engine seam

use inlay_core::events::{CELL_CHANNEL, SET_CELL_NUMBER};
use inlay_core::prelude::*;
use serde_json::{json, Value};

/// Identifies a cell's container view in the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub u64);

/// The opaque embedded-runtime engine.
///
/// Real engines carry isolate and render machinery that is none of the
/// host's business. The host attaches the engine's view to a container,
/// detaches it, and releases the engine, in that order, plus posts
/// one-way messages.
pub trait EmbeddedEngine {
    /// Attach the engine's view to a container. Rendering starts here.
    fn attach(&mut self, container: ViewId) -> Result<()>;

    /// Detach the view from its container.
    fn detach(&mut self);

    /// Tear down engine resources. Consuming: nothing runs after this.
    fn release(self: Box<Self>);

    /// Fire-and-forget method call on a named channel into the
    /// embedded runtime.
    fn notify(&mut self, channel: &str, method: &str, args: Value);
}

/// Hands out engines for embedded cells.
///
/// Engines are scarce. Every acquisition must end in the handle's
/// [`dispose`](EmbeddedViewHandle::dispose), or the pool drains under
/// fast scrolling.
pub trait EngineProvider {
    fn acquire(&mut self) -> Result<Box<dyn EmbeddedEngine>>;
}

/// One live engine/view pairing.
///
/// Construction attaches; [`dispose`](Self::dispose) detaches and then
/// releases, consuming the handle so the order can be neither skipped
/// nor repeated.
pub struct EmbeddedViewHandle {
    engine: Box<dyn EmbeddedEngine>,
    container: ViewId,
}

impl std::fmt::Debug for EmbeddedViewHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedViewHandle")
            .field("engine", &"<engine>")
            .field("container", &self.container)
            .finish()
    }
}

impl EmbeddedViewHandle {
    /// Attach `engine` to `container`, producing the live pairing.
    ///
    /// A failed attach still releases the engine; acquisition and
    /// release stay paired even on the error path.
    pub fn attach(mut engine: Box<dyn EmbeddedEngine>, container: ViewId) -> Result<Self> {
        if let Err(err) = engine.attach(container) {
            engine.release();
            return Err(err);
        }
        Ok(Self { engine, container })
    }

    /// Tell the embedded side which list position it is rendering.
    ///
    /// One-way; sent after the attach, never acknowledged.
    pub fn send_cell_number(&mut self, position: usize) {
        self.engine.notify(CELL_CHANNEL, SET_CELL_NUMBER, json!(position));
    }

    /// Detach the view, then release the engine.
    pub fn dispose(mut self) {
        self.engine.detach();
        self.engine.release();
        debug!(container = self.container.0, "embedded pairing disposed");
    }
}
