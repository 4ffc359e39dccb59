//! Money value object: an amount in a single currency.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Currency assumed when a caller does not name one.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// An immutable amount of money in a single currency.
///
/// Amounts are kept in the smallest currency unit (e.g., cents) so arithmetic
/// stays exact. Arithmetic is only defined between *compatible* currencies:
/// equal codes, or either side zero. A zero amount carries no meaningful
/// currency and adopts the other side's, so running totals may start from
/// [`Money::zero`] regardless of the currency being summed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    amount: u64,
    /// ISO currency code (e.g., "USD", "EUR").
    currency: String,
}

impl Money {
    /// Money in the default currency.
    pub fn new(amount: u64) -> Self {
        Self::with_currency(amount, DEFAULT_CURRENCY)
    }

    pub fn with_currency(amount: u64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Zero in the default currency; compatible with every currency.
    pub fn zero() -> Self {
        Self::new(0)
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Whether arithmetic with `other` is defined: equal currency codes, or
    /// either side zero.
    pub fn compatible_currency(&self, other: &Money) -> bool {
        self.is_zero() || other.is_zero() || self.currency == other.currency
    }

    /// Add two amounts of a compatible currency.
    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_compatible(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| DomainError::invariant("money amount overflow"))?;
        let currency = if self.is_zero() && !other.is_zero() {
            other.currency.clone()
        } else {
            self.currency.clone()
        };
        Ok(Money { amount, currency })
    }

    /// Multiply by a scalar, keeping the currency.
    pub fn multiply(&self, factor: u64) -> DomainResult<Money> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or_else(|| DomainError::invariant("money amount overflow"))?;
        Ok(Money {
            amount,
            currency: self.currency.clone(),
        })
    }

    /// Strictly-greater comparison between compatible currencies.
    pub fn greater_than(&self, other: &Money) -> DomainResult<bool> {
        self.ensure_compatible(other)?;
        Ok(self.amount > other.amount)
    }

    fn ensure_compatible(&self, other: &Money) -> DomainResult<()> {
        if self.compatible_currency(other) {
            Ok(())
        } else {
            Err(DomainError::currency_mismatch(format!(
                "{} vs {}",
                self.currency, other.currency
            )))
        }
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
