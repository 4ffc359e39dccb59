use serde::{Deserialize, Serialize};

use tallybook_core::{DomainResult, Money, ValueObject};
use tallybook_products::ProductType;

/// Computed tax for one invoice line: an amount and a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tax {
    amount: Money,
    description: String,
}

impl Tax {
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl ValueObject for Tax {}

/// Strategy for computing tax from a product's tax category and a net amount.
///
/// Implementations must be consistent: equal inputs yield an equal tax.
pub trait TaxPolicy {
    fn calculate_tax(&self, product_type: ProductType, amount: &Money) -> DomainResult<Tax>;
}

/// Flat VAT rate per product category, applied in basis points of the net
/// amount. Fractions of the smallest currency unit are truncated.
#[derive(Debug, Clone, Copy, Default)]
pub struct VatTaxPolicy;

impl VatTaxPolicy {
    pub fn new() -> Self {
        Self
    }

    fn rate_basis_points(product_type: ProductType) -> u64 {
        match product_type {
            ProductType::Standard => 2_300,
            ProductType::Food => 700,
            ProductType::Drug => 800,
        }
    }

    fn description(product_type: ProductType) -> &'static str {
        match product_type {
            ProductType::Standard => "23% VAT (standard)",
            ProductType::Food => "7% VAT (food)",
            ProductType::Drug => "8% VAT (drug)",
        }
    }
}

impl TaxPolicy for VatTaxPolicy {
    fn calculate_tax(&self, product_type: ProductType, amount: &Money) -> DomainResult<Tax> {
        let scaled = amount.multiply(Self::rate_basis_points(product_type))?;
        let tax_amount = Money::with_currency(scaled.amount() / 10_000, amount.currency());
        Ok(Tax::new(tax_amount, Self::description(product_type)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rate_is_twenty_three_percent() {
        let tax = VatTaxPolicy::new()
            .calculate_tax(ProductType::Standard, &Money::new(300))
            .unwrap();
        assert_eq!(tax.amount(), &Money::new(69));
        assert_eq!(tax.description(), "23% VAT (standard)");
    }

    #[test]
    fn food_rate_is_seven_percent() {
        let tax = VatTaxPolicy::new()
            .calculate_tax(ProductType::Food, &Money::new(100))
            .unwrap();
        assert_eq!(tax.amount(), &Money::new(7));
        assert_eq!(tax.description(), "7% VAT (food)");
    }

    #[test]
    fn drug_rate_is_eight_percent() {
        let tax = VatTaxPolicy::new()
            .calculate_tax(ProductType::Drug, &Money::new(50))
            .unwrap();
        assert_eq!(tax.amount(), &Money::new(4));
        assert_eq!(tax.description(), "8% VAT (drug)");
    }

    #[test]
    fn sub_unit_fractions_truncate() {
        // 7% of 15 is 1.05, truncated to 1.
        let tax = VatTaxPolicy::new()
            .calculate_tax(ProductType::Food, &Money::new(15))
            .unwrap();
        assert_eq!(tax.amount(), &Money::new(1));
    }

    #[test]
    fn tax_keeps_the_amount_currency() {
        let tax = VatTaxPolicy::new()
            .calculate_tax(ProductType::Standard, &Money::with_currency(100, "USD"))
            .unwrap();
        assert_eq!(tax.amount(), &Money::with_currency(23, "USD"));
    }

    #[test]
    fn equal_inputs_yield_equal_tax() {
        let policy = VatTaxPolicy::new();
        let first = policy
            .calculate_tax(ProductType::Food, &Money::new(100))
            .unwrap();
        let second = policy
            .calculate_tax(ProductType::Food, &Money::new(100))
            .unwrap();
        assert_eq!(first, second);
    }
}
