//! Sagal storefront client.
//!
//! Talks to the storefront API: connectivity probing, diagnostics and order
//! submission, plus the checkout session that drives a cart from the `sagal`
//! crate through to a placed order.

pub mod checkout;
pub mod client;
pub mod config;
pub mod connectivity;
pub mod observability;
pub mod orders;
pub mod status;

#[cfg(test)]
mod test;
