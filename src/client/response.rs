use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// A fully buffered HTTP response.
///
/// The body is read eagerly so a failed check can still show what the server
/// sent back after the status has been inspected.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub async fn read(response: reqwest::Response) -> reqwest::Result<Self> {
        let status = response.status();
        let body = response.text().await?;
        Ok(Self { status, body })
    }

    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }

    /// Body rendered for humans: pretty JSON when it parses, raw text otherwise.
    pub fn display_body(&self) -> String {
        match serde_json::from_str::<serde_json::Value>(&self.body) {
            Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| self.body.clone()),
            Err(_) if self.body.trim().is_empty() => "<empty body>".to_string(),
            Err(_) => self.body.clone(),
        }
    }
}
