use tracing::{debug, warn};

use super::{expect_status, CheckContext, CheckError};
use crate::client::models::{Envelope, LoginData};

pub(super) async fn register_user(ctx: &mut CheckContext) -> Result<(), CheckError> {
    let response = ctx.client.register(&ctx.user.credentials).await?;
    expect_status(response, ctx.expected.register)?;
    Ok(())
}

/// Logs in and attaches the returned token to the session.
pub(super) async fn login_user(ctx: &mut CheckContext) -> Result<(), CheckError> {
    let response = ctx.client.login(&ctx.user.credentials).await?;
    let response = expect_status(response, ctx.expected.login)?;

    let envelope: Envelope<LoginData> = response.json()?;
    let token = envelope
        .data
        .and_then(|data| data.token)
        .filter(|token| !token.trim().is_empty());
    match token {
        Some(token) => {
            debug!("Login returned a token, authorizing session");
            ctx.client.set_bearer_token(token.clone());
            ctx.auth_token = Some(token);
        }
        None => warn!("Login response has no data.token, session stays unauthorized"),
    }
    Ok(())
}

/// Protected endpoint must be rejected once the header is gone.
pub(super) async fn unauthorized_access(ctx: &mut CheckContext) -> Result<(), CheckError> {
    ctx.client.clear_bearer_token();
    let response = ctx.client.list_products().await?;
    expect_status(response, ctx.expected.unauthorized)?;
    Ok(())
}

pub(super) async fn duplicate_user_registration(ctx: &mut CheckContext) -> Result<(), CheckError> {
    let response = ctx.client.register(&ctx.user.credentials).await?;
    expect_status(response, ctx.expected.duplicate_registration)?;
    Ok(())
}
