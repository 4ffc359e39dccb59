//! Clients domain module.
//!
//! This crate contains the client identity types consumed by invoicing,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod client;

pub use client::{Client, ClientData, ClientId};
