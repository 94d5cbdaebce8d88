// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core data types and algorithms for drawing secret gift recipients ("lootjes trekken").
//!
//! A [`Group`] collects participants while it is open. Drawing it shuffles the roster and
//! assigns every participant a recipient using [`derange`], which guarantees that nobody draws
//! themselves and that everybody is drawn exactly once.
//!
//! All randomness is passed in by the caller. Use a seeded generator to get reproducible draws:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use trekking_core::Group;
//!
//! let mut group = Group::new("family");
//! group.add_participant("anna").unwrap();
//! group.add_participant("bram").unwrap();
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(1);
//! group.draw(&mut rng).unwrap();
//!
//! assert_eq!(group.recipient("anna").unwrap(), "bram");
//! assert_eq!(group.recipient("bram").unwrap(), "anna");
//! ```
//!
//! This crate does not deal with persistence. Groups are plain values, storing them and writing
//! changes back is up to the caller (see `trekking-store`).
pub mod derange;
pub mod group;

pub use derange::{DerangeError, derange};
pub use group::{Group, GroupError};
