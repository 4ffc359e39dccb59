use serde::{Deserialize, Serialize};

use tallybook_clients::ClientData;
use tallybook_core::{Money, ValueObject};
use tallybook_products::ProductData;

/// One line of an invoice request: a product snapshot, a quantity, and the
/// pre-computed total cost for that line.
///
/// `total_cost` is supplied by the caller and is deliberately not checked
/// against `quantity` times the snapshot price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    product_data: ProductData,
    quantity: u32,
    total_cost: Money,
}

impl RequestItem {
    pub fn new(product_data: ProductData, quantity: u32, total_cost: Money) -> Self {
        Self {
            product_data,
            quantity,
            total_cost,
        }
    }

    pub fn product_data(&self) -> &ProductData {
        &self.product_data
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_cost(&self) -> &Money {
        &self.total_cost
    }
}

impl ValueObject for RequestItem {}

/// A request to invoice a client for an ordered list of items.
///
/// Insertion order is invoicing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    client_data: ClientData,
    items: Vec<RequestItem>,
}

impl InvoiceRequest {
    /// Create an empty request for a client.
    pub fn new(client_data: ClientData) -> Self {
        Self {
            client_data,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: RequestItem) {
        self.items.push(item);
    }

    pub fn client_data(&self) -> &ClientData {
        &self.client_data
    }

    pub fn items(&self) -> &[RequestItem] {
        &self.items
    }
}
