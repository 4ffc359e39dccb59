use tallybook_clients::ClientData;
use tallybook_core::{AggregateId, DomainResult};

use crate::invoice::{Invoice, InvoiceId, InvoiceLine};
use crate::request::InvoiceRequest;
use crate::tax::TaxPolicy;

/// Strategy for creating a fresh, empty invoice for a client.
pub trait InvoiceFactory {
    fn create(&self, client: &ClientData) -> DomainResult<Invoice>;
}

/// Factory producing invoices with freshly generated identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardInvoiceFactory;

impl StandardInvoiceFactory {
    pub fn new() -> Self {
        Self
    }
}

impl InvoiceFactory for StandardInvoiceFactory {
    fn create(&self, client: &ClientData) -> DomainResult<Invoice> {
        Ok(Invoice::new(
            InvoiceId::new(AggregateId::new()),
            client.clone(),
        ))
    }
}

/// Issues invoices from requests.
///
/// The only real logic in this crate: one tax computation and one appended
/// line per request item, in insertion order.
#[derive(Debug)]
pub struct BookKeeper<F: InvoiceFactory> {
    factory: F,
}

impl<F: InvoiceFactory> BookKeeper<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Issue an invoice for `request`, taxing each item via `tax_policy`.
    ///
    /// The returned invoice is the one obtained from the factory, populated
    /// with exactly one line per request item. Collaborator errors propagate
    /// unchanged.
    pub fn issuance(
        &self,
        request: &InvoiceRequest,
        tax_policy: &impl TaxPolicy,
    ) -> DomainResult<Invoice> {
        let mut invoice = self.factory.create(request.client_data())?;
        for item in request.items() {
            let tax = tax_policy
                .calculate_tax(item.product_data().product_type(), item.total_cost())?;
            invoice.add_line(InvoiceLine::new(item.clone(), tax))?;
        }
        Ok(invoice)
    }
}
