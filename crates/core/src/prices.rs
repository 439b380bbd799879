//! Prices

use std::{iter::Sum, ops::Deref};

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

/// Represents a price in pence/cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price {
    value: u64,
}

impl Price {
    /// A price of nothing.
    pub const ZERO: Self = Self { value: 0 };

    /// Creates a new Price
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Price { value }
    }

    /// The price of `quantity` units at this unit price.
    ///
    /// Saturates at `u64::MAX` minor units rather than wrapping.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Price::new(self.value.saturating_mul(u64::from(quantity)))
    }

    /// Express this price as money in the given currency.
    pub fn to_money(self, currency: &'static Currency) -> Money<'static, Currency> {
        Money::from_minor(i64::try_from(self.value).unwrap_or(i64::MAX), currency)
    }

    /// Express this price as a decimal amount of major units (e.g. `38.00`).
    #[must_use]
    pub fn to_decimal(self, currency: &Currency) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.value), currency.exponent)
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, price| {
            Price::new(acc.value.saturating_add(price.value))
        })
    }
}
