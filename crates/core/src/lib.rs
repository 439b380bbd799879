//! Sagal
//!
//! Storefront domain for ordering gas cylinders, cookers and pipes: the
//! product catalog, the per-session cart, customer validation and the order
//! payload sent to the remote order service.

pub mod cart;
pub mod catalog;
pub mod customer;
pub mod orders;
pub mod prelude;
pub mod prices;
pub mod products;
