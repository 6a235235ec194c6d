//! Cell bind/recycle lifecycle for the mixed list

use inlay_core::prelude::*;

use crate::engine::{EmbeddedViewHandle, EngineProvider, ViewId};
use crate::policy::{CellPolicy, Renderer};

/// One recyclable list cell.
///
/// Holds at most one live embedded pairing; `label` is the native text
/// content. A cell must be recycled before it is bound again.
pub struct Cell {
    container: ViewId,
    position: Option<usize>,
    label: Option<String>,
    handle: Option<EmbeddedViewHandle>,
}

impl Cell {
    pub fn new(container: ViewId) -> Self {
        Self {
            container,
            position: None,
            label: None,
            handle: None,
        }
    }

    /// Position this cell was last bound for, if any.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Native text content; present only after a native bind.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether an embedded pairing is currently attached.
    pub fn is_embedded(&self) -> bool {
        self.handle.is_some()
    }
}

/// Binds cells as they scroll in and tears them down as they recycle.
///
/// The policy decides the renderer; this type owns the engine pairing
/// discipline around that decision.
pub struct CellManager<P> {
    policy: CellPolicy,
    engines: P,
    count: usize,
}

impl<P: EngineProvider> CellManager<P> {
    pub fn new(policy: CellPolicy, engines: P, count: usize) -> Self {
        Self {
            policy,
            engines,
            count,
        }
    }

    /// Number of positions the list exposes.
    pub fn cell_count(&self) -> usize {
        self.count
    }

    /// Bind `cell` for display at `position`.
    ///
    /// Embedded binds acquire an engine, attach it to the cell's
    /// container, and post the cell-position notice; native binds set
    /// the position number as text. The cell must have been recycled
    /// since its last bind: a live handle here is a broken recycler
    /// contract, whichever renderer the policy would pick.
    pub fn bind(&mut self, cell: &mut Cell, position: usize) -> Result<Renderer> {
        if cell.handle.is_some() {
            return Err(Error::protocol(format!(
                "bind at position {position} on a cell still holding an embedded view"
            )));
        }

        let renderer = self.policy.choose(position);
        match renderer {
            Renderer::Embedded => {
                let engine = self.engines.acquire()?;
                let mut handle = EmbeddedViewHandle::attach(engine, cell.container)?;
                handle.send_cell_number(position);
                cell.label = None;
                cell.handle = Some(handle);
            }
            Renderer::Native => {
                cell.label = Some(position.to_string());
            }
        }
        cell.position = Some(position);
        Ok(renderer)
    }

    /// Tear down `cell`'s embedded pairing, if any, ahead of reuse.
    ///
    /// Detach, release, clear, in that order. A cell holding no pairing
    /// is already recycled; calling this again is a no-op.
    pub fn recycle(&mut self, cell: &mut Cell) {
        if let Some(handle) = cell.handle.take() {
            handle.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EmbeddedEngine;
    use serde_json::Value;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct PooledEngine {
        id: usize,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl EmbeddedEngine for PooledEngine {
        fn attach(&mut self, container: ViewId) -> Result<()> {
            self.log
                .borrow_mut()
                .push(format!("attach:{}:{}", self.id, container.0));
            Ok(())
        }

        fn detach(&mut self) {
            self.log.borrow_mut().push(format!("detach:{}", self.id));
        }

        fn release(self: Box<Self>) {
            self.log.borrow_mut().push(format!("release:{}", self.id));
        }

        fn notify(&mut self, channel: &str, method: &str, args: Value) {
            self.log
                .borrow_mut()
                .push(format!("notify:{}:{channel}:{method}:{args}", self.id));
        }
    }

    #[derive(Clone, Default)]
    struct PooledProvider {
        log: Rc<RefCell<Vec<String>>>,
        next_id: Rc<RefCell<usize>>,
    }

    impl EngineProvider for PooledProvider {
        fn acquire(&mut self) -> Result<Box<dyn EmbeddedEngine>> {
            let mut next = self.next_id.borrow_mut();
            let id = *next;
            *next += 1;
            self.log.borrow_mut().push(format!("acquire:{id}"));
            Ok(Box::new(PooledEngine {
                id,
                log: self.log.clone(),
            }))
        }
    }

    fn manager(one_in: u32) -> (CellManager<PooledProvider>, Rc<RefCell<Vec<String>>>) {
        let provider = PooledProvider::default();
        let log = provider.log.clone();
        (
            CellManager::new(CellPolicy::with_seed(one_in, 7), provider, 100),
            log,
        )
    }

    #[test]
    fn test_embedded_bind_attaches_then_notifies() {
        let (mut manager, log) = manager(1);
        let mut cell = Cell::new(ViewId(3));

        let renderer = manager.bind(&mut cell, 12).unwrap();

        assert_eq!(renderer, Renderer::Embedded);
        assert!(cell.is_embedded());
        assert_eq!(cell.position(), Some(12));
        assert_eq!(cell.label(), None);
        assert_eq!(
            *log.borrow(),
            vec![
                "acquire:0",
                "attach:0:3",
                "notify:0:example/cell:setCellNumber:12"
            ]
        );
    }

    #[test]
    fn test_native_bind_sets_the_position_label() {
        let (mut manager, log) = manager(1);
        let mut cell = Cell::new(ViewId(0));

        // 8 embeds first, making 2 a behind-the-frontier native bind.
        manager.bind(&mut cell, 8).unwrap();
        manager.recycle(&mut cell);
        let renderer = manager.bind(&mut cell, 2).unwrap();

        assert_eq!(renderer, Renderer::Native);
        assert!(!cell.is_embedded());
        assert_eq!(cell.label(), Some("2"));
        // No engine traffic for the native bind.
        assert_eq!(log.borrow().iter().filter(|l| l.starts_with("acquire")).count(), 1);
    }

    #[test]
    fn test_recycle_detaches_then_releases_then_clears() {
        let (mut manager, log) = manager(1);
        let mut cell = Cell::new(ViewId(5));

        manager.bind(&mut cell, 0).unwrap();
        manager.recycle(&mut cell);

        assert!(!cell.is_embedded());
        assert_eq!(
            *log.borrow(),
            vec![
                "acquire:0",
                "attach:0:5",
                "notify:0:example/cell:setCellNumber:0",
                "detach:0",
                "release:0"
            ]
        );
    }

    #[test]
    fn test_recycle_twice_is_a_no_op() {
        let (mut manager, log) = manager(1);
        let mut cell = Cell::new(ViewId(5));

        manager.bind(&mut cell, 0).unwrap();
        manager.recycle(&mut cell);
        let after_first = log.borrow().len();

        manager.recycle(&mut cell);

        assert_eq!(log.borrow().len(), after_first);
    }

    #[test]
    fn test_bind_without_recycle_is_a_protocol_violation() {
        let (mut manager, log) = manager(1);
        let mut cell = Cell::new(ViewId(1));

        manager.bind(&mut cell, 0).unwrap();
        let before = log.borrow().len();

        let err = manager.bind(&mut cell, 1).unwrap_err();

        assert!(matches!(err, Error::Protocol { .. }));
        assert!(err.is_fatal());
        // The failed bind consulted nothing and touched nothing.
        assert_eq!(log.borrow().len(), before);
        assert!(cell.is_embedded());
        assert_eq!(cell.position(), Some(0));
    }

    #[test]
    fn test_acquisitions_and_releases_stay_paired_under_fast_scrolling() {
        let (mut manager, log) = manager(2);
        let mut cell = Cell::new(ViewId(9));

        for position in 0..manager.cell_count() {
            manager.bind(&mut cell, position).unwrap();
            manager.recycle(&mut cell);
        }
        for position in (0..manager.cell_count()).rev() {
            manager.bind(&mut cell, position).unwrap();
            manager.recycle(&mut cell);
        }

        let log = log.borrow();
        let acquires = log.iter().filter(|l| l.starts_with("acquire")).count();
        let releases = log.iter().filter(|l| l.starts_with("release")).count();
        assert!(acquires > 0);
        assert_eq!(acquires, releases);
    }
}
