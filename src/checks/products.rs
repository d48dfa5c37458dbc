use tracing::{debug, warn};

use super::{expect_status, CheckContext, CheckError};
use crate::client::models::{CreatedProduct, Envelope};
use crate::fixtures::{invalid_product, UPDATED_QUANTITY};

pub(super) async fn create_product(ctx: &mut CheckContext) -> Result<(), CheckError> {
    let response = ctx.client.create_product(&ctx.product.payload).await?;
    let response = expect_status(response, ctx.expected.create_product)?;

    let envelope: Envelope<CreatedProduct> = response.json()?;
    ctx.product.id = envelope
        .data
        .and_then(|data| data.id)
        .filter(|id| !id.is_blank());
    match &ctx.product.id {
        Some(id) => debug!("Created product {}", id),
        None => warn!("Create product response has no data.id"),
    }
    Ok(())
}

pub(super) async fn get_products(ctx: &mut CheckContext) -> Result<(), CheckError> {
    let response = ctx.client.list_products().await?;
    expect_status(response, ctx.expected.list_products)?;
    Ok(())
}

pub(super) async fn update_product_quantity(ctx: &mut CheckContext) -> Result<(), CheckError> {
    let Some(id) = ctx.product.id.as_ref() else {
        return Err(CheckError::MissingPrecondition("No product ID available"));
    };
    let response = ctx
        .client
        .update_product_quantity(id, UPDATED_QUANTITY)
        .await?;
    expect_status(response, ctx.expected.update_quantity)?;
    Ok(())
}

/// Re-authorizes the session if possible, then submits a product that breaks
/// every validation rule.
pub(super) async fn invalid_product_data(ctx: &mut CheckContext) -> Result<(), CheckError> {
    if let Some(token) = &ctx.auth_token {
        ctx.client.set_bearer_token(token.clone());
    }
    let response = ctx.client.create_product(&invalid_product()).await?;
    expect_status(response, ctx.expected.invalid_product)?;
    Ok(())
}
