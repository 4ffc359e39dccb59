//! Products domain module.
//!
//! This crate contains the catalog types invoicing snapshots from,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::{Product, ProductData, ProductId, ProductType};
