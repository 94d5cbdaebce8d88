// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP front for drawing secret gift recipients in named groups ("trekkingen").
//!
//! Every endpoint loads the group from a [`GroupStore`](trekking_store::GroupStore), applies one
//! operation on it and writes it back. See [`router`] for the list of endpoints.
pub mod api;
pub mod config;
pub mod error;

pub use api::router;
pub use config::{Config, StoreKind};
pub use error::ApiError;
