use serde::{Deserialize, Serialize};

use tallybook_clients::ClientData;
use tallybook_core::{AggregateId, AggregateRoot, DomainResult, Entity, Money};

use crate::request::RequestItem;
use crate::tax::Tax;

/// Invoice identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub AggregateId);

impl InvoiceId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One invoice entry: a request item paired with its computed tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    item: RequestItem,
    tax: Tax,
}

impl InvoiceLine {
    pub fn new(item: RequestItem, tax: Tax) -> Self {
        Self { item, tax }
    }

    pub fn item(&self) -> &RequestItem {
        &self.item
    }

    pub fn tax(&self) -> &Tax {
        &self.tax
    }

    /// Net amount of the line: the item's caller-supplied total cost.
    pub fn net(&self) -> &Money {
        self.item.total_cost()
    }

    /// Gross amount of the line: net plus tax.
    pub fn gross(&self) -> DomainResult<Money> {
        self.net().add(self.tax.amount())
    }
}

/// Aggregate root: Invoice.
///
/// Created empty by an [`InvoiceFactory`](crate::InvoiceFactory), populated
/// line by line during issuance, and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    id: InvoiceId,
    client_data: ClientData,
    lines: Vec<InvoiceLine>,
    net: Money,
    gross: Money,
}

impl Invoice {
    /// Create an empty invoice for a client.
    pub fn new(id: InvoiceId, client_data: ClientData) -> Self {
        Self {
            id,
            client_data,
            lines: Vec::new(),
            net: Money::zero(),
            gross: Money::zero(),
        }
    }

    pub fn id_typed(&self) -> InvoiceId {
        self.id
    }

    pub fn client_data(&self) -> &ClientData {
        &self.client_data
    }

    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    /// Net total across all lines.
    pub fn net(&self) -> &Money {
        &self.net
    }

    /// Gross total across all lines.
    pub fn gross(&self) -> &Money {
        &self.gross
    }

    /// Append one line and fold it into the running totals.
    ///
    /// Totals and lines move together: nothing changes if either addition
    /// fails.
    pub fn add_line(&mut self, line: InvoiceLine) -> DomainResult<()> {
        let net = self.net.add(line.net())?;
        let gross = self.gross.add(&line.gross()?)?;
        self.net = net;
        self.gross = gross;
        self.lines.push(line);
        Ok(())
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Invoice {}
