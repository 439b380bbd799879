//! Catalog Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;

use crate::{
    catalog::CatalogError,
    prices::Price,
    products::{Category, Product, ProductId},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products in display order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: u32,

    /// Product name
    pub name: String,

    /// Product price (e.g., "38.00 USD")
    pub price: String,

    /// Product category
    pub category: Category,

    /// Image reference
    pub image: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

impl ProductFixture {
    /// Convert into a product, returning the currency its price was written in.
    ///
    /// # Errors
    ///
    /// Returns an error if the price cannot be parsed.
    pub fn into_product(self) -> Result<(Product, &'static Currency), CatalogError> {
        let (price, currency) = parse_price(&self.price)?;

        let product = Product::new(
            ProductId::new(self.id),
            self.name,
            price,
            self.category,
            self.image,
        );

        let product = match self.description {
            Some(description) => product.with_description(description),
            None => product,
        };

        Ok((product, currency))
    }
}

/// Parse price string (e.g., "38.00 USD") into a price in minor units and its currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(Price, &'static Currency), CatalogError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(CatalogError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let currency_code = parts
        .get(1)
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(CatalogError::UnknownCurrency(other.to_string())),
    };

    let amount = parts
        .first()
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::from(10_u64.pow(currency.exponent)))
        .and_then(|value| value.round_dp(0).to_u64())
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    Ok((Price::new(minor_units), currency))
}
