//! Sagal prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartItem, CartSnapshot},
    catalog::{Catalog, CatalogError},
    customer::{CustomerInfo, ValidationError},
    orders::{OrderConfirmation, OrderLine, OrderRequest, PaymentMethod},
    prices::Price,
    products::{Category, Product, ProductId},
};
