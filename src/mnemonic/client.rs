//! HTTP client for the mnemonic generation backend

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::GenerateError;

/// Story substituted when generation fails; treated as valid content, not an
/// error state
pub const FALLBACK_MNEMONIC: &str =
    "Unable to generate a mnemonic at this time. Try again later.";

/// Client for the backend generation proxy
pub struct GeneratorClient {
    /// HTTP client
    client: Client,
    /// Backend base URL, no trailing slash
    base_url: String,
}

#[derive(Serialize)]
struct MnemonicRequest<'a> {
    character: char,
    meaning: &'a str,
    parts: &'a [String],
}

#[derive(Serialize)]
struct ImagenRequest<'a> {
    character: char,
    mnemonic: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
}

#[derive(Deserialize)]
struct ImagenResponse {
    image: Option<String>,
}

impl GeneratorClient {
    /// Environment variable overriding the backend base URL
    const ENV_BACKEND_URL: &'static str = "NIWA_BACKEND_URL";
    /// Default backend base URL
    const DEFAULT_BACKEND_URL: &'static str = "http://localhost:5000";

    /// Create a client against an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }

    /// Resolve the base URL: config override, then environment, then the
    /// localhost default
    pub fn from_config(override_url: Option<&str>) -> Self {
        let base_url = override_url
            .map(str::to_string)
            .or_else(|| std::env::var(Self::ENV_BACKEND_URL).ok())
            .unwrap_or_else(|| Self::DEFAULT_BACKEND_URL.to_string());
        Self::new(base_url)
    }

    /// The resolved base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate a mnemonic story for a character.
    ///
    /// With no part labels and an author-provided default, the default is
    /// returned without a request. Any backend failure yields
    /// [`FALLBACK_MNEMONIC`] rather than an error.
    pub async fn generate_mnemonic(
        &self,
        character: char,
        meaning: &str,
        parts: &[String],
        default_mnemonic: Option<&str>,
    ) -> String {
        if parts.is_empty() {
            if let Some(default) = default_mnemonic {
                return default.to_string();
            }
        }

        match self.request_mnemonic(character, meaning, parts).await {
            Ok(story) => story,
            Err(e) => {
                tracing::error!("Mnemonic generation for {} failed: {}", character, e);
                FALLBACK_MNEMONIC.to_string()
            }
        }
    }

    async fn request_mnemonic(
        &self,
        character: char,
        meaning: &str,
        parts: &[String],
    ) -> Result<String, GenerateError> {
        let response = self
            .client
            .post(format!("{}/mnemonic", self.base_url))
            .json(&MnemonicRequest { character, meaning, parts })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerateError::ApiError { status: status.as_u16(), message });
        }

        Ok(response.text().await?)
    }

    /// Generate an illustration for a mnemonic story.
    ///
    /// Returns `None` on any failure; callers treat that as "no image
    /// produced", never as an exception.
    pub async fn generate_visualization(
        &self,
        character: char,
        story: &str,
        reference_image: Option<&str>,
    ) -> Option<String> {
        match self.request_visualization(character, story, reference_image).await {
            Ok(image) => image,
            Err(e) => {
                tracing::error!("Visualization for {} failed: {}", character, e);
                None
            }
        }
    }

    async fn request_visualization(
        &self,
        character: char,
        story: &str,
        reference_image: Option<&str>,
    ) -> Result<Option<String>, GenerateError> {
        let response = self
            .client
            .post(format!("{}/imagen", self.base_url))
            .json(&ImagenRequest { character, mnemonic: story, image: reference_image })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerateError::ApiError { status: status.as_u16(), message });
        }

        let body = response.text().await?;
        let parsed: ImagenResponse = serde_json::from_str(&body)?;
        Ok(parsed.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let client = GeneratorClient::new("http://localhost:5000//");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn config_override_wins() {
        let client = GeneratorClient::from_config(Some("http://backend:8080"));
        assert_eq!(client.base_url(), "http://backend:8080");
    }

    #[tokio::test]
    async fn default_mnemonic_short_circuits_without_parts() {
        // Unroutable base URL: a request would fail, the default must not
        // need one
        let client = GeneratorClient::new("http://127.0.0.1:1");
        let story = client
            .generate_mnemonic('日', "sun", &[], Some("A window with the sun shining through."))
            .await;
        assert_eq!(story, "A window with the sun shining through.");
    }

    #[tokio::test]
    async fn failed_request_yields_fallback_story() {
        let client = GeneratorClient::new("http://127.0.0.1:1");
        let story = client.generate_mnemonic('日', "sun", &[], None).await;
        assert_eq!(story, FALLBACK_MNEMONIC);
    }

    #[tokio::test]
    async fn failed_request_yields_no_image() {
        let client = GeneratorClient::new("http://127.0.0.1:1");
        let image = client.generate_visualization('日', "a story", None).await;
        assert_eq!(image, None);
    }
}
