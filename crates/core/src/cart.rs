//! Cart
//!
//! The in-memory cart of a single checkout session. Each product appears at
//! most once and every line has a quantity of at least one; an update that
//! would leave a line at zero removes it instead.

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::{
    catalog::Catalog,
    prices::Price,
    products::{Product, ProductId},
};

/// A product in the cart together with how many of it were chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    product: Product,
    quantity: u32,
}

impl CartItem {
    /// The product on this line
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Identifier of the product on this line
    pub fn product_id(&self) -> ProductId {
        self.product.id()
    }

    /// Quantity, always at least one
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price multiplied by quantity
    pub fn line_total(&self) -> Price {
        self.product.price().times(self.quantity)
    }
}

/// Cart
#[derive(Debug, Clone)]
pub struct Cart {
    items: SmallVec<[CartItem; 8]>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart whose totals are expressed in `currency`.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: SmallVec::new(),
            currency,
        }
    }

    /// Create an empty cart for products from `catalog`.
    #[must_use]
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.currency())
    }

    /// Add one unit of `product`, returning the line's new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(item) = self.item_mut(product.id()) {
            item.quantity = item.quantity.saturating_add(1);

            return item.quantity;
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });

        1
    }

    /// Remove the line for `product`, returning it if it was present.
    pub fn remove(&mut self, product: ProductId) -> Option<CartItem> {
        let position = self.position(product)?;

        Some(self.items.remove(position))
    }

    /// Set the quantity of the line for `product`.
    ///
    /// A quantity of zero removes the line. Unknown products are ignored.
    pub fn update_quantity(&mut self, product: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product);

            return;
        }

        if let Some(item) = self.item_mut(product) {
            item.quantity = quantity;
        }
    }

    /// Take one unit of `product` off the cart, removing the line at zero.
    pub fn decrement(&mut self, product: ProductId) {
        if let Some(quantity) = self.quantity(product) {
            self.update_quantity(product, quantity - 1);
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of every line total, in minor units.
    pub fn total_price(&self) -> Price {
        total_price(&self.items)
    }

    /// Sum of every line total.
    pub fn total_amount(&self) -> Money<'static, Currency> {
        self.total_price().to_money(self.currency)
    }

    /// Sum of quantities across all lines.
    pub fn total_item_count(&self) -> u64 {
        total_item_count(&self.items)
    }

    /// Quantity of `product`, if it is in the cart.
    pub fn quantity(&self, product: ProductId) -> Option<u32> {
        self.get(product).map(CartItem::quantity)
    }

    /// The line for `product`.
    pub fn get(&self, product: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id() == product)
    }

    /// Whether `product` is in the cart.
    pub fn contains(&self, product: ProductId) -> bool {
        self.get(product).is_some()
    }

    /// Lines in the order they were first added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterate over the lines in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// An owned, read-only copy of the cart as it is right now.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.to_vec(),
            currency: self.currency,
        }
    }

    fn position(&self, product: ProductId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product_id() == product)
    }

    fn item_mut(&mut self, product: ProductId) -> Option<&mut CartItem> {
        self.items
            .iter_mut()
            .find(|item| item.product_id() == product)
    }
}

/// Frozen copy of a cart, detached from later edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    items: Vec<CartItem>,
    currency: &'static Currency,
}

impl CartSnapshot {
    /// Lines in cart order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of every line total, in minor units.
    pub fn total_price(&self) -> Price {
        total_price(&self.items)
    }

    /// Sum of every line total.
    pub fn total_amount(&self) -> Money<'static, Currency> {
        self.total_price().to_money(self.currency)
    }

    /// Sum of quantities across all lines.
    pub fn total_item_count(&self) -> u64 {
        total_item_count(&self.items)
    }

    /// Whether the snapshot has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currency of the totals.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

fn total_price(items: &[CartItem]) -> Price {
    items.iter().map(CartItem::line_total).sum()
}

fn total_item_count(items: &[CartItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}
