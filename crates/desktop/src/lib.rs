//! `stash-desktop`
//!
//! **Responsibility:** the inventory view — a form to add a product record
//! and a table listing the collection, over transient in-memory state.
//!
//! This crate provides:
//! - `state`: the pure view controller (host-testable, no UI dependencies)
//! - `frontend`: the Leptos (CSR/WASM) rendering of that controller
//!
//! State lives for the lifetime of the view; nothing is persisted.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use state::InventoryView;
