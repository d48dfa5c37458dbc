//! The conformance checks and the order they run in.

mod auth;
mod context;
mod error;
mod products;

pub use context::CheckContext;
pub use error::CheckError;

use reqwest::StatusCode;

use crate::client::ApiResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    HealthCheck,
    RegisterUser,
    LoginUser,
    CreateProduct,
    GetProducts,
    UpdateProductQuantity,
    UnauthorizedAccess,
    DuplicateUserRegistration,
    InvalidProductData,
}

impl CheckKind {
    /// Run order. Later checks rely on the token and product id produced by
    /// earlier ones, and the unauthorized check must follow every
    /// authenticated call except the final invalid product submission.
    pub const ALL: [CheckKind; 9] = [
        CheckKind::HealthCheck,
        CheckKind::RegisterUser,
        CheckKind::LoginUser,
        CheckKind::CreateProduct,
        CheckKind::GetProducts,
        CheckKind::UpdateProductQuantity,
        CheckKind::UnauthorizedAccess,
        CheckKind::DuplicateUserRegistration,
        CheckKind::InvalidProductData,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::HealthCheck => "Health Check",
            CheckKind::RegisterUser => "Register User",
            CheckKind::LoginUser => "Login User",
            CheckKind::CreateProduct => "Create Product",
            CheckKind::GetProducts => "Get Products",
            CheckKind::UpdateProductQuantity => "Update Product Quantity",
            CheckKind::UnauthorizedAccess => "Unauthorized Access",
            CheckKind::DuplicateUserRegistration => "Duplicate User Registration",
            CheckKind::InvalidProductData => "Invalid Product Data Validation",
        }
    }

    pub async fn run(&self, ctx: &mut CheckContext) -> Result<(), CheckError> {
        match self {
            CheckKind::HealthCheck => health_check(ctx).await,
            CheckKind::RegisterUser => auth::register_user(ctx).await,
            CheckKind::LoginUser => auth::login_user(ctx).await,
            CheckKind::CreateProduct => products::create_product(ctx).await,
            CheckKind::GetProducts => products::get_products(ctx).await,
            CheckKind::UpdateProductQuantity => products::update_product_quantity(ctx).await,
            CheckKind::UnauthorizedAccess => auth::unauthorized_access(ctx).await,
            CheckKind::DuplicateUserRegistration => auth::duplicate_user_registration(ctx).await,
            CheckKind::InvalidProductData => products::invalid_product_data(ctx).await,
        }
    }
}

async fn health_check(ctx: &mut CheckContext) -> Result<(), CheckError> {
    let response = ctx.client.health().await?;
    expect_status(response, ctx.expected.health)?;
    Ok(())
}

fn expect_status(response: ApiResponse, expected: StatusCode) -> Result<ApiResponse, CheckError> {
    if response.status == expected {
        Ok(response)
    } else {
        Err(CheckError::UnexpectedStatus { expected, response })
    }
}
