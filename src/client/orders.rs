use reqwest::Method;

use super::{ApiClient, RequestBody};
use crate::{
    dto::orders::{
        CreateOrderRequest, DEFAULT_REFUND_REASON, OrderCreated, OrderDeleted, RefundCreated,
        RefundRequest,
    },
    error::ClientResult,
    models::Order,
};

impl ApiClient {
    pub async fn create_order(&self, payload: &CreateOrderRequest) -> ClientResult<OrderCreated> {
        let body = RequestBody::json(payload)?;
        self.send(Method::POST, &["api", "orders"], body).await
    }

    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.send(Method::GET, &["api", "orders"], RequestBody::Empty)
            .await
    }

    pub async fn get_order(&self, order_no: &str) -> ClientResult<Order> {
        self.send(Method::GET, &["api", "orders", order_no], RequestBody::Empty)
            .await
    }

    /// Opens a refund; `None` sends [`DEFAULT_REFUND_REASON`].
    pub async fn refund_order(
        &self,
        order_no: &str,
        reason: Option<&str>,
    ) -> ClientResult<RefundCreated> {
        let reason = reason.unwrap_or(DEFAULT_REFUND_REASON).to_string();
        let body = RequestBody::json(&RefundRequest { reason })?;
        self.send(Method::POST, &["api", "orders", order_no, "refund"], body)
            .await
    }

    pub async fn delete_order(&self, order_no: &str) -> ClientResult<OrderDeleted> {
        self.send(
            Method::DELETE,
            &["api", "orders", order_no],
            RequestBody::Empty,
        )
        .await
    }
}
