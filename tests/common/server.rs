//! In-process mock inventory API
//!
//! Behaves like the inventory backend for the endpoints the runner touches,
//! with knobs to break individual behaviors. Every request reaching a route
//! is recorded together with its Authorization header.

use super::constants::*;
use axum::{
    extract::{Path, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use uuid::Uuid;

/// Knobs controlling how the mock deviates from a conforming server
#[derive(Debug, Clone)]
pub struct ServerBehavior {
    /// Serve GET /health
    pub health_route: bool,
    /// Reject product requests without a valid bearer token
    pub enforce_auth: bool,
    /// Status returned when registering an existing username
    pub duplicate_registration_status: StatusCode,
    /// Include `data.id` in the create product response
    pub include_product_id: bool,
    /// Validate product payloads
    pub validate_products: bool,
    /// Status returned for a product failing validation
    pub invalid_product_status: StatusCode,
    /// Include `data.token` in the login response
    pub include_token: bool,
    /// Return `""` as the login token
    pub blank_token: bool,
    /// Return `""` as the created product id
    pub blank_product_id: bool,
    /// Successful responses carry a plain text body instead of JSON
    pub plain_text_bodies: bool,
    /// Envelopes carry a numeric `success` and an object `message`
    pub non_string_messages: bool,
}

impl Default for ServerBehavior {
    fn default() -> Self {
        Self {
            health_route: true,
            enforce_auth: true,
            duplicate_registration_status: StatusCode::CONFLICT,
            include_product_id: true,
            validate_products: true,
            invalid_product_status: StatusCode::BAD_REQUEST,
            include_token: true,
            blank_token: false,
            blank_product_id: false,
            plain_text_bodies: false,
            non_string_messages: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StoredProduct {
    pub id: i64,
    pub sku: String,
    pub quantity: i64,
}

pub struct MockState {
    behavior: ServerBehavior,
    users: Mutex<HashMap<String, String>>,
    tokens: Mutex<HashSet<String>>,
    products: Mutex<Vec<StoredProduct>>,
    next_product_id: AtomicI64,
    requests: Mutex<Vec<RecordedRequest>>,
}

type ApiResult = Response;

fn failure(status: StatusCode, message: &str) -> ApiResult {
    (
        status,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}

impl MockState {
    fn success(&self, status: StatusCode, message: &str, data: Value) -> ApiResult {
        if self.behavior.plain_text_bodies {
            return (status, message.to_string()).into_response();
        }
        let body = if self.behavior.non_string_messages {
            json!({ "success": 1, "message": { "code": "OK", "text": [message] }, "data": data })
        } else {
            json!({ "success": true, "message": message, "data": data })
        };
        (status, Json(body)).into_response()
    }

    fn authorize(&self, headers: &HeaderMap) -> Result<(), ApiResult> {
        if !self.behavior.enforce_auth {
            return Ok(());
        }
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        match token {
            None => Err(failure(StatusCode::UNAUTHORIZED, "Access token required")),
            Some(token) if self.tokens.lock().unwrap().contains(token) => Ok(()),
            Some(_) => Err(failure(StatusCode::UNAUTHORIZED, "Invalid token")),
        }
    }
}

async fn record_request(
    State(state): State<Arc<MockState>>,
    request: Request,
    next: Next,
) -> Response {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    state.requests.lock().unwrap().push(RecordedRequest {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        authorization,
    });
    next.run(request).await
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

fn credentials(body: &Value) -> Option<(String, String)> {
    let username = body.get("username")?.as_str()?;
    let password = body.get("password")?.as_str()?;
    if username.is_empty() || password.is_empty() {
        return None;
    }
    Some((username.to_string(), password.to_string()))
}

async fn register(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> ApiResult {
    let Some((username, password)) = credentials(&body) else {
        return failure(StatusCode::BAD_REQUEST, "Username and password are required");
    };

    let mut users = state.users.lock().unwrap();
    if users.contains_key(&username) {
        return failure(
            state.behavior.duplicate_registration_status,
            "Username already exists",
        );
    }
    users.insert(username.clone(), password);
    state.success(
        StatusCode::CREATED,
        "User registered successfully",
        json!({ "id": users.len(), "username": username }),
    )
}

async fn login(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> ApiResult {
    let Some((username, password)) = credentials(&body) else {
        return failure(StatusCode::BAD_REQUEST, "Username and password are required");
    };

    let valid = state.users.lock().unwrap().get(&username) == Some(&password);
    if !valid {
        return failure(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }

    let user = json!({ "username": username });
    let data = if !state.behavior.include_token {
        json!({ "user": user })
    } else if state.behavior.blank_token {
        json!({ "token": "", "user": user })
    } else {
        let token = Uuid::new_v4().to_string();
        state.tokens.lock().unwrap().insert(token.clone());
        json!({ "token": token, "user": user })
    };
    state.success(StatusCode::OK, "Login successful", data)
}

async fn list_products(State(state): State<Arc<MockState>>, headers: HeaderMap) -> ApiResult {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }
    let products: Vec<Value> = state
        .products
        .lock()
        .unwrap()
        .iter()
        .map(|p| json!({ "id": p.id, "sku": p.sku, "quantity": p.quantity }))
        .collect();
    state.success(
        StatusCode::OK,
        "Products retrieved successfully",
        json!({ "products": products, "total": products.len() }),
    )
}

fn validate_product(body: &Value) -> Result<(String, i64), &'static str> {
    let text = |key: &str| body.get(key).and_then(Value::as_str).unwrap_or("");
    if text("name").is_empty() || text("type").is_empty() || text("sku").is_empty() {
        return Err("Name, type, SKU, quantity, and price are required");
    }
    let quantity = body.get("quantity").and_then(Value::as_i64);
    let price = body.get("price").and_then(Value::as_f64);
    let (Some(quantity), Some(price)) = (quantity, price) else {
        return Err("Name, type, SKU, quantity, and price are required");
    };
    if quantity < 0 {
        return Err("Quantity must be a non-negative number");
    }
    if price < 0.0 {
        return Err("Price must be a non-negative number");
    }
    if text("sku").len() < MIN_SKU_LENGTH {
        return Err("SKU must be at least 3 characters long");
    }
    Ok((text("sku").to_string(), quantity))
}

async fn create_product(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }

    let (sku, quantity) = if state.behavior.validate_products {
        match validate_product(&body) {
            Ok(valid) => valid,
            Err(message) => return failure(state.behavior.invalid_product_status, message),
        }
    } else {
        (
            body.get("sku")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            body.get("quantity").and_then(Value::as_i64).unwrap_or(0),
        )
    };

    let mut products = state.products.lock().unwrap();
    if products.iter().any(|p| p.sku == sku) {
        return failure(StatusCode::CONFLICT, "Product with this SKU already exists");
    }

    let id = state.next_product_id.fetch_add(1, Ordering::SeqCst);
    products.push(StoredProduct {
        id,
        sku: sku.clone(),
        quantity,
    });

    let data = if !state.behavior.include_product_id {
        json!({ "sku": sku, "quantity": quantity })
    } else if state.behavior.blank_product_id {
        json!({ "id": "", "sku": sku, "quantity": quantity })
    } else {
        json!({ "id": id, "sku": sku, "quantity": quantity })
    };
    state.success(StatusCode::CREATED, "Product created successfully", data)
}

async fn update_product_quantity(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }

    let Some(quantity) = body.get("quantity").and_then(Value::as_i64) else {
        return failure(StatusCode::BAD_REQUEST, "Quantity is required");
    };
    if quantity < 0 {
        return failure(StatusCode::BAD_REQUEST, "Quantity cannot be negative");
    }

    let mut products = state.products.lock().unwrap();
    match products.iter_mut().find(|p| p.id == id) {
        Some(product) => {
            product.quantity = quantity;
            state.success(
                StatusCode::OK,
                "Product quantity updated successfully",
                json!({ "id": id, "quantity": quantity }),
            )
        }
        None => failure(StatusCode::NOT_FOUND, "Product not found"),
    }
}

/// Mock server bound to a random local port
///
/// When dropped, the server shuts down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    state: Arc<MockState>,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a conforming mock server
    pub async fn spawn() -> Self {
        Self::spawn_with(ServerBehavior::default()).await
    }

    /// Spawns a mock server with the given deviations
    ///
    /// # Panics
    ///
    /// Panics if the port cannot be bound.
    pub async fn spawn_with(behavior: ServerBehavior) -> Self {
        let health_route = behavior.health_route;
        let state = Arc::new(MockState {
            behavior,
            users: Mutex::new(HashMap::new()),
            tokens: Mutex::new(HashSet::new()),
            products: Mutex::new(Vec::new()),
            next_product_id: AtomicI64::new(FIRST_PRODUCT_ID),
            requests: Mutex::new(Vec::new()),
        });

        let mut app = Router::new()
            .route("/auth/register", post(register))
            .route("/auth/login", post(login))
            .route("/products", get(list_products).post(create_product))
            .route("/products/{id}/quantity", put(update_product_quantity));
        if health_route {
            app = app.route("/health", get(health));
        }
        let app = app
            .layer(middleware::from_fn_with_state(state.clone(), record_request))
            .with_state(state.clone());

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        Self {
            base_url,
            state,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Tokens issued by login
    pub fn issued_tokens(&self) -> Vec<String> {
        self.state.tokens.lock().unwrap().iter().cloned().collect()
    }

    pub fn products(&self) -> Vec<StoredProduct> {
        self.state.products.lock().unwrap().clone()
    }

    pub fn registered_users(&self) -> Vec<String> {
        self.state.users.lock().unwrap().keys().cloned().collect()
    }
}
