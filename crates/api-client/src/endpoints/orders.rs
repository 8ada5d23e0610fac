//! Orders API endpoints
//!
//! Maps to `/orders`:
//! - Place an order from a cart
//! - List order history with pagination
//! - Get or cancel a single order
//!
//! All operations require authentication.

use crate::endpoints::MessageResponse;
use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Orders API interface
#[derive(Clone)]
pub struct OrdersApi {
    pub(crate) http: HttpClient,
}

impl OrdersApi {
    /// Create a new orders API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List the user's orders
    ///
    /// GET /orders
    pub async fn list(&self, params: &ListOrdersParams) -> ApiResult<Vec<Order>> {
        self.http.get("orders", &params.to_query()).await
    }

    /// Get a single order by ID
    ///
    /// GET /orders/{id}
    pub async fn get(&self, id: &str) -> ApiResult<Order> {
        self.http.get(&format!("orders/{id}"), &[]).await
    }

    /// Place an order from the current cart
    ///
    /// POST /orders
    pub async fn create(&self, request: &CreateOrderRequest) -> ApiResult<Order> {
        self.http.post("orders", request).await
    }

    /// Cancel an order
    ///
    /// DELETE /orders/{id}
    pub async fn cancel(&self, id: &str) -> ApiResult<MessageResponse> {
        self.http.delete(&format!("orders/{id}")).await
    }
}

/// Parameters for listing orders
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOrdersParams {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Page size
    pub per_page: Option<u32>,
    /// Filter by status (e.g. "pending", "delivered", "cancelled")
    pub status: Option<String>,
}

impl ListOrdersParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();

        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("perPage", per_page.to_string()));
        }
        if let Some(ref status) = self.status {
            query.push(("status", status.clone()));
        }

        query
    }
}

/// Order creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Cart to place the order from
    pub cart_id: String,
    /// Delivery address
    pub address_id: String,
    /// Payment method code (e.g. "cash_on_delivery", "bkash")
    pub payment_method: String,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier
    pub id: String,
    /// Order status
    pub status: Option<String>,
    /// Order total in BDT
    pub total: Option<f64>,
    /// Line items
    pub items: Option<Vec<OrderItem>>,
    /// Delivery address ID
    pub address_id: Option<String>,
    /// Payment method code
    pub payment_method: Option<String>,
    /// Placement timestamp (RFC 3339)
    pub placed_at: Option<String>,
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product ID
    pub product_id: i64,
    /// Product name at time of purchase
    pub name: Option<String>,
    /// Quantity ordered
    pub quantity: u32,
    /// Unit price at time of purchase
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserialize() {
        let json = r#"{
            "id": "ord_789",
            "status": "pending",
            "total": 455.5,
            "items": [
                {"productId": 123, "name": "Napa Extra", "quantity": 2, "price": 2.5}
            ],
            "addressId": "addr_456",
            "paymentMethod": "cash_on_delivery",
            "placedAt": "2024-06-01T09:15:00Z"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "ord_789");
        assert_eq!(order.items.unwrap()[0].quantity, 2);
        assert_eq!(order.payment_method.as_deref(), Some("cash_on_delivery"));
    }
}
