//! Products domain module.
//!
//! This crate contains the shared product types and the ordered collection
//! container, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage).

pub mod product;
pub mod stash;

pub use product::{Category, Product, ProductDraft, Rating};
pub use stash::Stash;
