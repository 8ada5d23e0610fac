//! Cart API endpoints
//!
//! Maps to `/cart`: the authenticated user's single active cart.

use crate::endpoints::MessageResponse;
use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Cart API interface
#[derive(Clone)]
pub struct CartApi {
    pub(crate) http: HttpClient,
}

impl CartApi {
    /// Create a new cart API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Get the current cart contents
    ///
    /// GET /cart
    pub async fn get(&self) -> ApiResult<Cart> {
        self.http.get("cart", &[]).await
    }

    /// Add an item to the cart
    ///
    /// POST /cart/items
    pub async fn add_item(&self, request: &AddCartItemRequest) -> ApiResult<CartItem> {
        self.http.post("cart/items", request).await
    }

    /// Change the quantity of a cart item
    ///
    /// PUT /cart/items/{id}
    pub async fn update_item(
        &self,
        item_id: &str,
        request: &UpdateCartItemRequest,
    ) -> ApiResult<CartItem> {
        self.http
            .put(&format!("cart/items/{item_id}"), request)
            .await
    }

    /// Remove an item from the cart
    ///
    /// DELETE /cart/items/{id}
    pub async fn remove_item(&self, item_id: &str) -> ApiResult<MessageResponse> {
        self.http.delete(&format!("cart/items/{item_id}")).await
    }

    /// Empty the cart
    ///
    /// DELETE /cart
    pub async fn clear(&self) -> ApiResult<MessageResponse> {
        self.http.delete("cart").await
    }
}

/// Request to add a product to the cart
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    /// Product to add
    pub product_id: i64,
    /// Quantity to add
    pub quantity: u32,
}

/// Request to change a cart item's quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCartItemRequest {
    /// New quantity
    pub quantity: u32,
}

/// Cart entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Cart identifier
    pub id: String,
    /// Items currently in the cart
    pub items: Vec<CartItem>,
    /// Cart total in BDT
    pub total: Option<f64>,
    /// Applied delivery fee in BDT
    pub delivery_fee: Option<f64>,
}

/// Cart line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Item identifier
    pub id: String,
    /// Product ID
    pub product_id: i64,
    /// Product name
    pub name: Option<String>,
    /// Quantity in the cart
    pub quantity: u32,
    /// Unit price in BDT
    pub price: Option<f64>,
    /// Line subtotal in BDT
    pub subtotal: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_deserialize() {
        let json = r#"{
            "id": "cart_1",
            "items": [
                {"id": "ci_1", "productId": 123, "name": "Napa Extra",
                 "quantity": 2, "price": 2.5, "subtotal": 5.0}
            ],
            "total": 5.0,
            "deliveryFee": 60.0
        }"#;

        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].product_id, 123);
        assert_eq!(cart.delivery_fee, Some(60.0));
    }
}
