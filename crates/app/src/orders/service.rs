//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use sagal::orders::{OrderConfirmation, OrderRequest};

use crate::{
    client::ApiClient,
    orders::{
        errors::{DEFAULT_REJECTION_MESSAGE, SubmissionError},
        models::{OrderData, OrderEnvelope},
    },
};

/// Orders service backed by the storefront HTTP API.
#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    client: ApiClient,
}

impl HttpOrdersService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    async fn submit_order(
        &self,
        order: OrderRequest,
    ) -> Result<OrderConfirmation, SubmissionError> {
        let envelope = self.client.create_order(&order).await.map_err(|error| {
            warn!(%error, "order submission failed");
            SubmissionError::from(error)
        })?;

        let confirmation = confirmation(envelope)?;

        info!(order_number = %confirmation.order_number, "order accepted");

        Ok(confirmation)
    }
}

/// Interpret a 2xx order envelope.
fn confirmation(envelope: OrderEnvelope) -> Result<OrderConfirmation, SubmissionError> {
    let OrderEnvelope {
        success,
        message,
        data,
    } = envelope;

    match data {
        Some(data) if success => serde_json::from_value::<OrderData>(data)
            .map(OrderConfirmation::from)
            .map_err(|error| {
                SubmissionError::Transport(format!("unexpected order data: {error}"))
            }),
        _ => Err(SubmissionError::Rejected {
            message: message
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string()),
        }),
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Submit an order for fulfilment.
    async fn submit_order(
        &self,
        order: OrderRequest,
    ) -> Result<OrderConfirmation, SubmissionError>;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rust_decimal::Decimal;
    use sagal::{cart::Cart, catalog::Catalog, customer::CustomerInfo, products::ProductId};
    use serde_json::Value;
    use testresult::TestResult;

    use crate::{client::ApiClientConfig, test::StubServer};

    use super::*;

    fn order() -> TestResult<OrderRequest> {
        let catalog = Catalog::bundled()?;
        let mut cart = Cart::for_catalog(&catalog);

        for id in [1, 3] {
            if let Some(product) = catalog.get(ProductId::new(id)) {
                cart.add(product);
            }
        }

        let customer = CustomerInfo::new(
            "Amina Yusuf",
            "+252 61 234 5678",
            "Hodan district, Mogadishu",
        );

        Ok(OrderRequest::new(&cart.snapshot(), &customer)?)
    }

    fn service(base_url: String) -> TestResult<HttpOrdersService> {
        let client = ApiClient::new(ApiClientConfig {
            base_url,
            health_timeout: Duration::from_secs(2),
            order_timeout: Duration::from_secs(2),
        })?;

        Ok(HttpOrdersService::new(client))
    }

    #[tokio::test]
    async fn accepted_order_returns_confirmation() -> TestResult {
        let server = StubServer::respond(
            201,
            r#"{"success":true,"data":{"orderNumber":"ORD-1042","totalAmount":50}}"#,
        )
        .await?;

        let confirmation = service(server.base_url())?.submit_order(order()?).await?;

        assert_eq!(confirmation.order_number, "ORD-1042");
        assert_eq!(confirmation.total_amount, Decimal::from(50));

        let body: Value = serde_json::from_str(&server.request_body().await?)?;

        assert_eq!(
            body.get("customerName").and_then(Value::as_str),
            Some("Amina Yusuf")
        );
        assert_eq!(
            body.get("paymentMethod").and_then(Value::as_str),
            Some("cash_on_delivery")
        );
        assert_eq!(
            body.get("items").and_then(Value::as_array).map(Vec::len),
            Some(2)
        );

        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_surfaces_server_message() -> TestResult {
        let server =
            StubServer::respond(400, r#"{"success":false,"message":"Invalid phone number"}"#)
                .await?;

        let result = service(server.base_url())?.submit_order(order()?).await;

        assert_eq!(
            result,
            Err(SubmissionError::Rejected {
                message: "Invalid phone number".to_string()
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_without_message_reports_code() -> TestResult {
        let server = StubServer::respond(502, "Bad Gateway").await?;

        let result = service(server.base_url())?.submit_order(order()?).await;

        assert_eq!(
            result,
            Err(SubmissionError::Rejected {
                message: "Server error: 502".to_string()
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn unsuccessful_envelope_uses_default_message() -> TestResult {
        let server = StubServer::respond(200, r#"{"success":false}"#).await?;

        let result = service(server.base_url())?.submit_order(order()?).await;

        assert_eq!(
            result,
            Err(SubmissionError::Rejected {
                message: DEFAULT_REJECTION_MESSAGE.to_string()
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn rejection_with_partial_data_keeps_message() -> TestResult {
        let server = StubServer::respond(
            200,
            r#"{"success":false,"message":"Out of stock","data":{}}"#,
        )
        .await?;

        let result = service(server.base_url())?.submit_order(order()?).await;

        assert_eq!(
            result,
            Err(SubmissionError::Rejected {
                message: "Out of stock".to_string()
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn accepted_order_with_malformed_data_is_a_transport_error() -> TestResult {
        let server =
            StubServer::respond(200, r#"{"success":true,"data":{"totalAmount":12}}"#).await?;

        let result = service(server.base_url())?.submit_order(order()?).await;

        assert!(
            matches!(result, Err(SubmissionError::Transport(_))),
            "expected Transport, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unreachable_service_is_reported() -> TestResult {
        let base_url = StubServer::closed_base_url().await?;

        let result = service(base_url)?.submit_order(order()?).await;

        assert!(
            matches!(result, Err(SubmissionError::Unreachable(_))),
            "expected Unreachable, got {result:?}"
        );

        Ok(())
    }
}
