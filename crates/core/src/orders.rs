//! Orders
//!
//! The payload sent to the order service, built from a cart snapshot and the
//! customer's details, and the confirmation the service sends back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    cart::CartSnapshot,
    customer::{CustomerInfo, ValidationError},
};

/// How the customer pays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Paid in cash when the order is delivered.
    #[default]
    CashOnDelivery,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product display name
    pub product: String,

    /// Units ordered
    pub quantity: u32,

    /// Unit price in major units
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Customer's full name
    pub customer_name: String,

    /// Customer's phone number
    pub phone_number: String,

    /// Delivery address
    pub address: String,

    /// Ordered lines, in cart order
    pub items: Vec<OrderLine>,

    /// Sum of every line, in major units
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,

    /// Payment method
    pub payment_method: PaymentMethod,
}

impl OrderRequest {
    /// Build an order from a cart snapshot and the customer's details.
    ///
    /// Customer fields are validated before the cart, and are trimmed in the
    /// resulting payload.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the customer details are incomplete or
    /// the cart is empty.
    pub fn new(cart: &CartSnapshot, customer: &CustomerInfo) -> Result<Self, ValidationError> {
        customer.validate()?;

        if cart.is_empty() {
            return Err(ValidationError::EmptyCart);
        }

        let currency = cart.currency();
        let customer = customer.trimmed();

        let items = cart
            .items()
            .iter()
            .map(|item| OrderLine {
                product: item.product().name().to_string(),
                quantity: item.quantity(),
                price: item.product().price().to_decimal(currency),
            })
            .collect();

        Ok(Self {
            customer_name: customer.name,
            phone_number: customer.phone,
            address: customer.address,
            items,
            total_amount: cart.total_price().to_decimal(currency),
            payment_method: PaymentMethod::CashOnDelivery,
        })
    }
}

/// Acknowledgement of an accepted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Order number assigned by the service
    pub order_number: String,

    /// Total the service recorded, in major units
    pub total_amount: Decimal,
}
