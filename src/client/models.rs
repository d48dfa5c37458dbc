//! Wire models for the inventory API.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /products`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: i64,
    pub price: f64,
}

/// Body of `PUT /products/{id}/quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuantityUpdate {
    pub quantity: i64,
}

/// Product identifier as returned by the server.
///
/// Servers backed by SQL usually return a number, others a string. Both are
/// kept verbatim so the id can be echoed back in the URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl ProductId {
    /// An empty string id cannot address a product.
    pub fn is_blank(&self) -> bool {
        matches!(self, ProductId::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

/// Standard response wrapper: `{ success, message, data }`.
///
/// Only `data` is decoded. `success` and `message` are informational and
/// servers disagree on their types.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatedProduct {
    pub id: Option<ProductId>,
}
