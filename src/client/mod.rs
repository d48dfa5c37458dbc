mod api_client;
pub mod models;
mod response;

pub use api_client::ApiClient;
pub use models::{Credentials, Envelope, ProductId, ProductPayload};
pub use response::ApiResponse;
