use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tallybook_core::{AggregateId, Entity, Money, ValueObject};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub AggregateId);

impl ProductId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Tax category of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Standard,
    Food,
    Drug,
}

/// Immutable snapshot of a product taken when a request item is created.
///
/// Decoupled from the live [`Product`] so later catalog changes do not
/// retroactively alter historical invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    product_id: ProductId,
    price: Money,
    name: String,
    product_type: ProductType,
    snapshot_date: DateTime<Utc>,
}

impl ProductData {
    pub fn new(
        product_id: ProductId,
        price: Money,
        name: impl Into<String>,
        product_type: ProductType,
        snapshot_date: DateTime<Utc>,
    ) -> Self {
        Self {
            product_id,
            price,
            name: name.into(),
            product_type,
            snapshot_date,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn snapshot_date(&self) -> DateTime<Utc> {
        self.snapshot_date
    }
}

impl ValueObject for ProductData {}

/// Entity: a catalog product.
///
/// Catalog management lives elsewhere; invoicing only needs the entity that
/// snapshots come from, plus the removal flag that gates availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    price: Money,
    name: String,
    product_type: ProductType,
    removed: bool,
}

impl Product {
    pub fn new(
        id: ProductId,
        price: Money,
        name: impl Into<String>,
        product_type: ProductType,
    ) -> Self {
        Self {
            id,
            price,
            name: name.into(),
            product_type,
            removed: false,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    /// Removed products stay in the catalog for historical documents but can
    /// no longer be sold.
    pub fn is_available(&self) -> bool {
        !self.removed
    }

    pub fn mark_as_removed(&mut self) {
        self.removed = true;
    }

    /// Take an immutable snapshot of the product as of `taken_at`.
    pub fn generate_snapshot(&self, taken_at: DateTime<Utc>) -> ProductData {
        ProductData::new(
            self.id,
            self.price.clone(),
            self.name.clone(),
            self.product_type,
            taken_at,
        )
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_product_id() -> ProductId {
        ProductId::new(AggregateId::new())
    }

    #[test]
    fn snapshot_captures_product_as_of_taken_at() {
        let product = Product::new(
            test_product_id(),
            Money::new(30),
            "book",
            ProductType::Standard,
        );
        let taken_at = Utc::now();
        let data = product.generate_snapshot(taken_at);

        assert_eq!(data.product_id(), product.id_typed());
        assert_eq!(data.price(), &Money::new(30));
        assert_eq!(data.name(), "book");
        assert_eq!(data.product_type(), ProductType::Standard);
        assert_eq!(data.snapshot_date(), taken_at);
    }

    #[test]
    fn snapshot_is_decoupled_from_later_removal() {
        let mut product = Product::new(
            test_product_id(),
            Money::new(10),
            "cake",
            ProductType::Food,
        );
        let data = product.generate_snapshot(Utc::now());

        product.mark_as_removed();
        assert!(!product.is_available());

        // The historical snapshot is unaffected.
        assert_eq!(data.name(), "cake");
        assert_eq!(data.product_type(), ProductType::Food);
    }

    #[test]
    fn new_product_is_available() {
        let product = Product::new(
            test_product_id(),
            Money::new(5),
            "aspirin",
            ProductType::Drug,
        );
        assert!(product.is_available());
    }

    #[test]
    fn product_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProductType::Standard).unwrap(),
            "\"standard\""
        );
        assert_eq!(serde_json::to_string(&ProductType::Food).unwrap(), "\"food\"");
        assert_eq!(serde_json::to_string(&ProductType::Drug).unwrap(), "\"drug\"");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a snapshot reproduces the product's name and price exactly.
        #[test]
        fn snapshot_preserves_name_and_price(
            name in "[A-Za-z][A-Za-z0-9 ]{0,49}",
            price in 0u64..1_000_000
        ) {
            let product = Product::new(
                test_product_id(),
                Money::new(price),
                name.clone(),
                ProductType::Standard,
            );
            let data = product.generate_snapshot(Utc::now());
            prop_assert_eq!(data.name(), name.as_str());
            prop_assert_eq!(data.price(), &Money::new(price));
        }
    }
}
