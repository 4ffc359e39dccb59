//! Invoicing domain module.
//!
//! This crate contains the business rules for turning an [`InvoiceRequest`]
//! into a tax-annotated [`Invoice`], implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).
//!
//! [`BookKeeper::issuance`] is the whole workflow: obtain an empty invoice
//! from the [`InvoiceFactory`], compute tax for each request item via the
//! [`TaxPolicy`], append one line per item, return the populated invoice.

pub mod book_keeper;
pub mod invoice;
pub mod request;
pub mod tax;

pub use book_keeper::{BookKeeper, InvoiceFactory, StandardInvoiceFactory};
pub use invoice::{Invoice, InvoiceId, InvoiceLine};
pub use request::{InvoiceRequest, RequestItem};
pub use tax::{Tax, TaxPolicy, VatTaxPolicy};
