//! Order response models.

use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use sagal::orders::OrderConfirmation;

/// Response envelope returned by `POST /orders`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderEnvelope {
    /// Whether the service accepted the order
    #[serde(default)]
    pub success: bool,

    /// Human-readable message, present on rejection
    #[serde(default)]
    pub message: Option<String>,

    /// Order details, present on success. Kept raw so a rejection with a
    /// partial `data` object still yields its message.
    #[serde(default)]
    pub data: Option<Value>,
}

/// `data` section of a successful order response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    /// Number assigned to the order
    pub order_number: OrderNumber,

    /// Total recorded by the service
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

impl From<OrderData> for OrderConfirmation {
    fn from(data: OrderData) -> Self {
        Self {
            order_number: data.order_number.to_string(),
            total_amount: data.total_amount,
        }
    }
}

/// Order numbers arrive either as strings or as bare numbers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OrderNumber {
    /// Numeric order number
    Number(u64),

    /// Textual order number, e.g. `"ORD-1042"`
    Text(String),
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}
