//! # inlay-catalog - Catalog Fetch & Decode
//!
//! The catalog leaf of the card-list flow: one asynchronous volumes
//! request plus per-record decoding with partial-failure collection.
//!
//! ## Public API
//!
//! ### Fetch (`client`)
//! - [`CatalogClient`] - Parameterized GET against the volumes
//!   endpoint; failures surface as `Error::Network`, never retried
//! - [`VolumesQuery`] - Search terms and result cap
//!
//! ### Decode (`decode`)
//! - [`decode_volumes`] - Raw records in, `(books, failures)` out; one
//!   malformed record never aborts the batch
//! - [`DecodeFailure`] / [`DecodeError`] - The offending record, kept
//!   verbatim, plus its typed cause

pub mod client;
pub mod decode;

pub use client::{CatalogClient, VolumesQuery, DEFAULT_BASE_URL};
pub use decode::{decode_volume, decode_volumes, DecodeError, DecodeFailure};
