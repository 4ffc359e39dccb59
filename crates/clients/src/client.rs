use serde::{Deserialize, Serialize};

use tallybook_core::{AggregateId, Entity, ValueObject};

/// Client identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub AggregateId);

impl ClientId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ClientId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Immutable snapshot of a client's identity, carried by requests and invoices.
///
/// Decoupled from the live [`Client`] so later changes to client records do
/// not retroactively alter historical documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientData {
    client_id: ClientId,
    name: String,
}

impl ClientData {
    pub fn new(client_id: ClientId, name: impl Into<String>) -> Self {
        Self {
            client_id,
            name: name.into(),
        }
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ValueObject for ClientData {}

/// Entity: a client that can be invoiced.
///
/// Client records are managed elsewhere; invoicing only needs enough of the
/// entity to take identity snapshots from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    id: ClientId,
    name: String,
}

impl Client {
    pub fn new(id: ClientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id_typed(&self) -> ClientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Take an immutable identity snapshot for use in requests and invoices.
    pub fn generate_snapshot(&self) -> ClientData {
        ClientData::new(self.id, self.name.clone())
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client_id() -> ClientId {
        ClientId::new(AggregateId::new())
    }

    #[test]
    fn snapshot_captures_identity() {
        let client = Client::new(test_client_id(), "Kowalski");
        let data = client.generate_snapshot();
        assert_eq!(data.client_id(), client.id_typed());
        assert_eq!(data.name(), "Kowalski");
    }

    #[test]
    fn snapshot_is_decoupled_from_later_changes() {
        let mut client = Client::new(test_client_id(), "Kowalski");
        let data = client.generate_snapshot();
        client.rename("Nowak");
        assert_eq!(data.name(), "Kowalski");
        assert_eq!(client.name(), "Nowak");
    }

    #[test]
    fn snapshots_compare_by_value() {
        let id = test_client_id();
        assert_eq!(
            ClientData::new(id, "Kowalski"),
            ClientData::new(id, "Kowalski")
        );
        assert_ne!(
            ClientData::new(id, "Kowalski"),
            ClientData::new(id, "Nowak")
        );
    }
}
