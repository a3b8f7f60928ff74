//! Domain core for the shopping-list service.
//!
//! # Overview
//! Holds the item model, the in-memory item store and the five list
//! operations (list, get, create, update, delete). Nothing here knows about
//! HTTP; the server crate maps `ItemError` onto status codes and JSON bodies.
//!
//! # Design
//! - `ItemStore` is a plain value. Callers construct and own it, so each
//!   test or server instance gets its own list.
//! - Operations return `Result<_, ItemError>` and fail fast on the first
//!   validation or lookup failure.

pub mod error;
pub mod item;
pub mod ops;
pub mod store;

pub use error::{ErrorKind, ItemError};
pub use item::{Item, ItemPatch, NewItem};
pub use store::ItemStore;
