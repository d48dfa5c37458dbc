use anyhow::Result;

use crate::client::ApiClient;
use crate::config::{ExpectedStatuses, RunnerConfig};
use crate::fixtures::{RunId, TestProduct, TestUser};

/// State carried from one check to the next.
///
/// Login fills `auth_token`, product creation fills `product.id`. Checks that
/// depend on them read them from here rather than from the client.
pub struct CheckContext {
    pub client: ApiClient,
    pub user: TestUser,
    pub product: TestProduct,
    /// Token returned by login, kept even while the client header is removed.
    pub auth_token: Option<String>,
    pub expected: ExpectedStatuses,
}

impl CheckContext {
    pub fn new(client: ApiClient, run_id: &RunId, expected: ExpectedStatuses) -> Self {
        Self {
            client,
            user: TestUser::for_run(run_id),
            product: TestProduct::for_run(run_id),
            auth_token: None,
            expected,
        }
    }

    pub fn from_config(config: &RunnerConfig) -> Result<Self> {
        let client = ApiClient::new(&config.base_url, config.request_timeout)?;
        Ok(Self::new(
            client,
            &RunId::generate(),
            config.expected.clone(),
        ))
    }
}
