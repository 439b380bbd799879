//! Customer contact details and checkout validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest delivery address accepted, in characters, after trimming.
pub const MIN_ADDRESS_LEN: usize = 10;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a constant and covered by tests"
)]
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("phone pattern is valid")
});

/// Reasons an order is refused before anything is sent.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is blank.
    #[error("Please enter your full name")]
    MissingName,

    /// Phone is blank.
    #[error("Please enter your phone number")]
    MissingPhone,

    /// Phone does not look like a phone number.
    #[error("Please enter a valid phone number")]
    InvalidPhone,

    /// Address is blank.
    #[error("Please enter your delivery address")]
    MissingAddress,

    /// Address is too short to deliver to.
    #[error("Please provide a more detailed delivery address")]
    AddressTooShort,

    /// Nothing to order.
    #[error("Your cart is empty")]
    EmptyCart,
}

/// Who the order is for and where it goes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Full name
    pub name: String,

    /// Contact phone number
    pub phone: String,

    /// Delivery address
    pub address: String,
}

impl CustomerInfo {
    /// Creates customer details from raw form input.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Check every field, reporting the first problem found.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first field that fails, checked
    /// in the order name, phone, address.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }

        let phone = self.phone.trim();

        if phone.is_empty() {
            return Err(ValidationError::MissingPhone);
        }

        if !PHONE_PATTERN.is_match(phone) {
            return Err(ValidationError::InvalidPhone);
        }

        let address = self.address.trim();

        if address.is_empty() {
            return Err(ValidationError::MissingAddress);
        }

        if address.chars().count() < MIN_ADDRESS_LEN {
            return Err(ValidationError::AddressTooShort);
        }

        Ok(())
    }

    /// A copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.phone.trim(), self.address.trim())
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.address.clear();
    }
}
