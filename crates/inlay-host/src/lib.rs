//! # inlay-host - Sample Flows
//!
//! Both host-side samples. Flow A fetches a catalog, renders one card
//! per book, and hands a single book off to the embedded editor,
//! reconciling the result back into exactly one card. Flow B is a
//! scrolling list whose cells render natively or embedded per a sticky
//! random policy, with strict engine pairing as cells recycle.
//!
//! ## Public API
//!
//! ### Flow A (`card_list`, `fetch`, `message`)
//! - [`CardList`] - Owner of the book list and per-book cards;
//!   `initialize` / `request_edit` / `complete_edit` / `apply_event`
//! - [`ListSurface`] / [`EditorLauncher`] - Seams to the host toolkit
//!   and the screen-navigation layer
//! - [`spawn_catalog_fetch`] - The one cross-thread handoff: fetch off
//!   the loop, one [`HostEvent`] back onto it
//!
//! ### Flow B (`policy`, `engine`, `cell_manager`)
//! - [`CellPolicy`] / [`Renderer`] - Sticky per-position renderer
//!   choice, seedable for replay
//! - [`EmbeddedEngine`] / [`EngineProvider`] - The opaque engine seam
//! - [`EmbeddedViewHandle`] - One live engine/view pairing; disposal
//!   detaches then releases, in that order
//! - [`Cell`] / [`CellManager`] - Recyclable cells and the bind/recycle
//!   discipline around them
//!
//! ### Configuration (`config`)
//! - [`Settings`] / [`load_settings`] - `.inlay/config.toml`, every key
//!   optional

pub mod card_list;
pub mod cell_manager;
pub mod config;
pub mod engine;
pub mod fetch;
pub mod message;
pub mod policy;

pub use card_list::{CardList, EditorLauncher, ListSurface};
pub use cell_manager::{Cell, CellManager};
pub use config::{load_settings, CatalogSettings, CellSettings, Settings};
pub use engine::{EmbeddedEngine, EmbeddedViewHandle, EngineProvider, ViewId};
pub use fetch::spawn_catalog_fetch;
pub use message::HostEvent;
pub use policy::{CellPolicy, Renderer};
