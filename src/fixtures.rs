//! Data submitted to the server during a run.
//!
//! Usernames and SKUs embed a random run id so repeated runs against the same
//! server never collide.

use uuid::Uuid;

use crate::client::{Credentials, ProductId, ProductPayload};

pub const TEST_PASSWORD: &str = "testpass123";

/// Quantity sent by the quantity update check.
pub const UPDATED_QUANTITY: i64 = 75;

/// Short random token identifying one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunId(String);

impl RunId {
    pub fn generate() -> Self {
        let simple = Uuid::new_v4().simple().to_string();
        Self(simple[..12].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct TestUser {
    pub credentials: Credentials,
}

impl TestUser {
    pub fn for_run(run_id: &RunId) -> Self {
        Self {
            credentials: Credentials {
                username: format!("testuser_{}", run_id.as_str()),
                password: TEST_PASSWORD.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct TestProduct {
    pub payload: ProductPayload,
    /// Set once the server has accepted the product.
    pub id: Option<ProductId>,
}

impl TestProduct {
    pub fn for_run(run_id: &RunId) -> Self {
        Self {
            payload: ProductPayload {
                name: "Test Product".to_string(),
                product_type: "Electronics".to_string(),
                sku: format!("TEST{}", run_id.as_str().to_uppercase()),
                image_url: Some("https://example.com/test.jpg".to_string()),
                description: Some("A test product for API testing".to_string()),
                quantity: 100,
                price: 99.99,
            },
            id: None,
        }
    }
}

/// A product the server must reject: empty name, 3-char SKU, negative
/// quantity and price.
pub fn invalid_product() -> ProductPayload {
    ProductPayload {
        name: String::new(),
        product_type: "Electronics".to_string(),
        sku: "INV".to_string(),
        image_url: None,
        description: None,
        quantity: -5,
        price: -10.0,
    }
}
