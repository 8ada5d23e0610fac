//! Products API endpoints
//!
//! Maps to `/products`:
//! - List products with search, category filter, and pagination
//! - Get a single product by ID
//! - List lifestyle categories
//!
//! Pagination is server-owned; `page`/`perPage` are passed through as-is.

use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Products API interface
#[derive(Clone)]
pub struct ProductsApi {
    pub(crate) http: HttpClient,
}

impl ProductsApi {
    /// Create a new products API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List products with filters and pagination
    ///
    /// GET /products
    pub async fn list(&self, params: &ListProductsParams) -> ApiResult<Vec<Product>> {
        self.http.get("products", &params.to_query()).await
    }

    /// Get a single product by ID
    ///
    /// GET /products/{id}
    pub async fn get(&self, id: i64) -> ApiResult<Product> {
        self.http.get(&format!("products/{id}"), &[]).await
    }

    /// List lifestyle categories
    ///
    /// GET /products/lifestyle-categories
    pub async fn lifestyle_categories(&self) -> ApiResult<Vec<Category>> {
        self.http.get("products/lifestyle-categories", &[]).await
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Parameters for listing products
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProductsParams {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Page size
    pub per_page: Option<u32>,
    /// Free-text search term
    pub search_key: Option<String>,
    /// Filter by category ID
    pub category_id: Option<i64>,
}

impl ListProductsParams {
    /// Create new params with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set a search term
    #[must_use]
    pub fn with_search_key(mut self, search_key: impl Into<String>) -> Self {
        self.search_key = Some(search_key.into());
        self
    }

    /// Filter by category
    #[must_use]
    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();

        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("perPage", per_page.to_string()));
        }
        if let Some(ref search_key) = self.search_key {
            query.push(("searchKey", search_key.clone()));
        }
        if let Some(category_id) = self.category_id {
            query.push(("categoryId", category_id.to_string()));
        }

        query
    }
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier
    pub id: i64,
    /// Product name
    pub name: Option<String>,
    /// Unit price in BDT
    pub price: Option<f64>,
    /// Discounted price in BDT, when a discount applies
    pub discounted_price: Option<f64>,
    /// Selling unit (e.g. "strip", "bottle")
    pub unit: Option<String>,
    /// Product image URL
    pub image_url: Option<String>,
    /// Category ID
    pub category_id: Option<i64>,
    /// Whether the product is currently in stock
    pub in_stock: Option<bool>,
    /// Whether a prescription is required
    pub prescription_required: Option<bool>,
}

/// Lifestyle category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category identifier
    pub id: i64,
    /// Category name
    pub name: Option<String>,
    /// Icon URL
    pub icon_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_builder() {
        let params = ListProductsParams::new()
            .with_page(2)
            .with_per_page(10)
            .with_search_key("paracetamol");

        let query = params.to_query();
        assert!(query.contains(&("page", "2".to_string())));
        assert!(query.contains(&("perPage", "10".to_string())));
        assert!(query.contains(&("searchKey", "paracetamol".to_string())));
    }

    #[test]
    fn test_empty_params_produce_no_query() {
        assert!(ListProductsParams::new().to_query().is_empty());
    }

    #[test]
    fn test_product_deserialize() {
        let json = r#"{
            "id": 123,
            "name": "Napa Extra",
            "price": 2.5,
            "discountedPrice": 2.0,
            "unit": "strip",
            "imageUrl": "https://cdn.lifeplusbd.com/p/123.jpg",
            "categoryId": 7,
            "inStock": true,
            "prescriptionRequired": false
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 123);
        assert_eq!(product.name.as_deref(), Some("Napa Extra"));
        assert_eq!(product.discounted_price, Some(2.0));
        assert_eq!(product.in_stock, Some(true));
    }
}
