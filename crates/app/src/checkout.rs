//! Checkout
//!
//! A [`CheckoutSession`] owns the cart and customer details for one shopper
//! and turns them into a placed order.

use jiff::Timestamp;
use thiserror::Error;
use tracing::{info, instrument, warn};

use sagal::{
    cart::Cart,
    catalog::Catalog,
    customer::{CustomerInfo, ValidationError},
    orders::{OrderConfirmation, OrderRequest},
};

use crate::{
    connectivity::ConnectivityMonitor,
    orders::{OrdersService, SubmissionError},
};

/// Shown when submission is attempted without a confirmed connection.
pub const OFFLINE_MESSAGE: &str =
    "You appear to be offline. Please check your connection and try again.";

/// Shown when submission fails for a reason the customer cannot act on.
pub const FAILED_MESSAGE: &str = "Failed to place order. Please try again.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("You appear to be offline. Please check your connection and try again.")]
    Offline,

    #[error("{0}")]
    Rejected(String),

    #[error("order submission failed: {0}")]
    Failed(String),
}

impl CheckoutError {
    /// Message suitable for showing to the customer.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(error) => error.to_string(),
            Self::Offline => OFFLINE_MESSAGE.to_string(),
            Self::Rejected(message) => message.clone(),
            Self::Failed(_) => FAILED_MESSAGE.to_string(),
        }
    }

    /// Whether resubmitting the same order unchanged might succeed.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Offline | Self::Failed(_))
    }
}

impl From<SubmissionError> for CheckoutError {
    fn from(error: SubmissionError) -> Self {
        match error {
            SubmissionError::Unreachable(_) => Self::Offline,
            SubmissionError::Rejected { message } => Self::Rejected(message),
            SubmissionError::Transport(reason) => Self::Failed(reason),
        }
    }
}

/// Proof of a placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// What the service acknowledged
    pub confirmation: OrderConfirmation,

    /// Name the order was placed under
    pub customer_name: String,

    /// Phone number the order was placed with
    pub phone: String,

    /// Units ordered
    pub item_count: u64,

    /// When the order was accepted
    pub placed_at: Timestamp,
}

/// One shopper's cart and details.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    cart: Cart,
    customer: CustomerInfo,
    connectivity: ConnectivityMonitor,
}

impl CheckoutSession {
    /// Start a session with an empty cart priced in `catalog`'s currency.
    #[must_use]
    pub fn new(catalog: &Catalog, connectivity: ConnectivityMonitor) -> Self {
        Self {
            cart: Cart::for_catalog(catalog),
            customer: CustomerInfo::default(),
            connectivity,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    pub fn customer_mut(&mut self) -> &mut CustomerInfo {
        &mut self.customer
    }

    pub fn connectivity(&self) -> &ConnectivityMonitor {
        &self.connectivity
    }

    /// Validate the session and take an owned snapshot of the order.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Validation`] if the customer details are
    /// incomplete or the cart is empty.
    pub fn prepare_order(&self) -> Result<OrderRequest, CheckoutError> {
        Ok(OrderRequest::new(&self.cart.snapshot(), &self.customer)?)
    }

    /// Validate, submit and, on success, reset the session.
    ///
    /// Nothing is sent unless the details are valid and the service is known
    /// to be reachable. A failed submission leaves the cart and customer
    /// details untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] describing why the order was not placed.
    #[instrument(skip_all, fields(items = self.cart.total_item_count()))]
    pub async fn place_order(
        &mut self,
        orders: &dyn OrdersService,
    ) -> Result<Receipt, CheckoutError> {
        let order = self.prepare_order()?;

        if !self.connectivity.status().is_connected() {
            warn!(status = %self.connectivity.status(), "refusing to submit order");
            return Err(CheckoutError::Offline);
        }

        let customer_name = order.customer_name.clone();
        let phone = order.phone_number.clone();
        let item_count = self.cart.total_item_count();

        let confirmation = orders.submit_order(order).await.map_err(|error| {
            if matches!(error, SubmissionError::Unreachable(_)) {
                self.connectivity.mark_offline();
            }

            CheckoutError::from(error)
        })?;

        info!(order_number = %confirmation.order_number, "order placed");

        self.cart.clear();
        self.customer.clear();

        Ok(Receipt {
            confirmation,
            customer_name,
            phone,
            item_count,
            placed_at: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sagal::products::ProductId;
    use testresult::TestResult;

    use crate::{connectivity::ConnectionStatus, orders::MockOrdersService};

    use super::*;

    fn session(status: ConnectionStatus) -> TestResult<CheckoutSession> {
        let catalog = Catalog::bundled()?;
        let connectivity = ConnectivityMonitor::new();

        connectivity.set(status);

        let mut session = CheckoutSession::new(&catalog, connectivity);

        for id in [1, 2, 6] {
            if let Some(product) = catalog.get(ProductId::new(id)) {
                session.cart_mut().add(product);
            }
        }

        *session.customer_mut() = CustomerInfo::new(
            "Amina Yusuf",
            "0612345678",
            "Hodan district, Mogadishu",
        );

        Ok(session)
    }

    fn unused_orders() -> MockOrdersService {
        let mut orders = MockOrdersService::new();

        orders.expect_submit_order().never();

        orders
    }

    #[tokio::test]
    async fn successful_order_clears_session() -> TestResult {
        let mut session = session(ConnectionStatus::Connected)?;
        let mut orders = MockOrdersService::new();

        orders
            .expect_submit_order()
            .withf(|order| order.total_amount == Decimal::from(64) && order.items.len() == 3)
            .times(1)
            .returning(|order| {
                Ok(OrderConfirmation {
                    order_number: "ORD-1".to_string(),
                    total_amount: order.total_amount,
                })
            });

        let receipt = session.place_order(&orders).await?;

        assert_eq!(receipt.confirmation.order_number, "ORD-1");
        assert_eq!(receipt.customer_name, "Amina Yusuf");
        assert_eq!(receipt.item_count, 3);
        assert!(session.cart().is_empty());
        assert_eq!(session.customer(), &CustomerInfo::default());

        Ok(())
    }

    #[tokio::test]
    async fn empty_cart_fails_without_submitting() -> TestResult {
        for status in [ConnectionStatus::Connected, ConnectionStatus::Offline] {
            let mut session = session(status)?;

            session.cart_mut().clear();

            let result = session.place_order(&unused_orders()).await;

            assert_eq!(
                result,
                Err(CheckoutError::Validation(ValidationError::EmptyCart)),
                "empty cart while {status}"
            );
            assert_eq!(session.customer().name, "Amina Yusuf");
        }

        Ok(())
    }

    #[tokio::test]
    async fn invalid_phone_fails_before_connectivity_check() -> TestResult {
        let mut session = session(ConnectionStatus::Offline)?;

        session.customer_mut().phone = "12345".to_string();

        let result = session.place_order(&unused_orders()).await;

        assert_eq!(
            result.map_err(|error| error.message()),
            Err("Please enter a valid phone number".to_string())
        );

        Ok(())
    }

    #[tokio::test]
    async fn offline_session_does_not_submit() -> TestResult {
        for status in [ConnectionStatus::Offline, ConnectionStatus::Unknown] {
            let mut session = session(status)?;

            let result = session.place_order(&unused_orders()).await;

            assert_eq!(result, Err(CheckoutError::Offline));
            assert_eq!(session.cart().len(), 3);
        }

        Ok(())
    }

    #[tokio::test]
    async fn rejection_keeps_cart_and_surfaces_message() -> TestResult {
        let mut session = session(ConnectionStatus::Connected)?;
        let mut orders = MockOrdersService::new();

        orders.expect_submit_order().times(1).returning(|_| {
            Err(SubmissionError::Rejected {
                message: "Delivery is not available in your area".to_string(),
            })
        });

        let result = session.place_order(&orders).await;

        assert_eq!(
            result.as_ref().map_err(CheckoutError::message),
            Err("Delivery is not available in your area".to_string())
        );
        assert!(result.is_err_and(|error| !error.is_retryable()));
        assert_eq!(session.cart().total_item_count(), 3);
        assert_eq!(session.customer().name, "Amina Yusuf");

        Ok(())
    }

    #[tokio::test]
    async fn unreachable_service_marks_offline() -> TestResult {
        let mut session = session(ConnectionStatus::Connected)?;
        let mut orders = MockOrdersService::new();

        orders.expect_submit_order().times(1).returning(|_| {
            Err(SubmissionError::Unreachable(
                "connection refused".to_string(),
            ))
        });

        let result = session.place_order(&orders).await;

        assert_eq!(result, Err(CheckoutError::Offline));
        assert_eq!(session.connectivity().status(), ConnectionStatus::Offline);
        assert!(!session.cart().is_empty());

        Ok(())
    }

    #[test]
    fn failures_hide_transport_details() {
        let error = CheckoutError::from(SubmissionError::Transport("EOF".to_string()));

        assert_eq!(error.message(), FAILED_MESSAGE);
        assert!(error.is_retryable());
    }

    #[test]
    fn prepare_order_snapshots_the_cart() -> TestResult {
        let mut session = session(ConnectionStatus::Connected)?;

        let order = session.prepare_order()?;

        session.cart_mut().clear();

        assert_eq!(order.items.len(), 3);
        assert_eq!(order.total_amount, Decimal::from(64));

        Ok(())
    }
}
