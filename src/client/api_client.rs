//! HTTP session against the inventory API.

use anyhow::{Context, Result};
use reqwest::Method;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use super::models::{Credentials, ProductId, QuantityUpdate};
use super::response::ApiResponse;

/// Long-lived HTTP client carrying the session's bearer token.
///
/// While a token is set every request carries `Authorization: Bearer <token>`.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl ApiClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the inventory API (e.g., "http://localhost:3000")
    /// * `timeout` - Per-request timeout, `None` keeps reqwest's defaults
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            bearer_token: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    pub fn set_bearer_token(&mut self, token: impl Into<String>) {
        self.bearer_token = Some(token.into());
    }

    /// Drops the authorization header, returning the token that was attached.
    pub fn clear_bearer_token(&mut self) -> Option<String> {
        self.bearer_token.take()
    }

    /// GET /health
    pub async fn health(&self) -> reqwest::Result<ApiResponse> {
        self.send(Method::GET, "/health", None::<&()>).await
    }

    /// POST /auth/register
    pub async fn register(&self, credentials: &Credentials) -> reqwest::Result<ApiResponse> {
        self.send(Method::POST, "/auth/register", Some(credentials))
            .await
    }

    /// POST /auth/login
    pub async fn login(&self, credentials: &Credentials) -> reqwest::Result<ApiResponse> {
        self.send(Method::POST, "/auth/login", Some(credentials)).await
    }

    /// GET /products
    pub async fn list_products(&self) -> reqwest::Result<ApiResponse> {
        self.send(Method::GET, "/products", None::<&()>).await
    }

    /// POST /products
    ///
    /// Takes any serializable body so malformed payloads can be submitted too.
    pub async fn create_product<T: Serialize + ?Sized>(
        &self,
        product: &T,
    ) -> reqwest::Result<ApiResponse> {
        self.send(Method::POST, "/products", Some(product)).await
    }

    /// PUT /products/{id}/quantity
    pub async fn update_product_quantity(
        &self,
        id: &ProductId,
        quantity: i64,
    ) -> reqwest::Result<ApiResponse> {
        let path = format!("/products/{}/quantity", id);
        self.send(Method::PUT, &path, Some(&QuantityUpdate { quantity }))
            .await
    }

    async fn send<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> reqwest::Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        debug!(
            "{} {} (authorized: {})",
            method,
            url,
            self.bearer_token.is_some()
        );

        let mut request = self.client.request(method, &url);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = ApiResponse::read(request.send().await?).await?;
        debug!("{} -> {}", url, response.status);
        Ok(response)
    }
}
