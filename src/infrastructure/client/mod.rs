pub mod book_ratings;
pub mod books;
pub mod recommendations;
pub mod stats;

/// Generates `create`, `get`, and `delete` methods for an entity client.
///
/// The `list` method is NOT generated because each entity lists differently.
///
/// # Example
/// ```ignore
/// define_client_crud!(
///     entity_path: "api/v1/books",
///     id_type: BookRecordId,
///     entity_type: StoredBookRecord,
///     new_type: BookRecord
/// );
/// ```
macro_rules! define_client_crud {
    (
        entity_path: $path:expr,
        id_type: $id:ty,
        entity_type: $entity:ty,
        new_type: $new:ty
    ) => {
        pub async fn create(&self, payload: &$new) -> anyhow::Result<$entity> {
            let url = self.client.endpoint($path)?;
            let response = self
                .client
                .request(reqwest::Method::POST, url)
                .json(payload)
                .send()
                .await?;
            self.client.handle_response(response).await
        }

        pub async fn get(&self, id: $id) -> anyhow::Result<$entity> {
            let url = self.client.endpoint(&format!(concat!($path, "/{}"), id))?;
            let response = self
                .client
                .request(reqwest::Method::GET, url)
                .send()
                .await?;
            self.client.handle_response(response).await
        }

        pub async fn delete(&self, id: $id) -> anyhow::Result<()> {
            let url = self.client.endpoint(&format!(concat!($path, "/{}"), id))?;
            let response = self
                .client
                .request(reqwest::Method::DELETE, url)
                .send()
                .await?;
            if response.status().is_success() {
                Ok(())
            } else {
                Err(self.client.response_error(response).await)
            }
        }
    };
}

pub(crate) use define_client_crud;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Url};

use crate::application::errors::ErrorResponse;

pub struct ReadstatsClient {
    base_url: Url,
    http: Client,
}

impl ReadstatsClient {
    pub fn new(base_url: Url) -> Result<Self> {
        let mut normalized = base_url;
        if !normalized.path().ends_with('/') {
            normalized.set_path(&format!("{}/", normalized.path().trim_end_matches('/')));
        }

        let http = Client::builder()
            .user_agent("readstats-cli/1.0")
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("failed to configure HTTP client")?;

        Ok(Self {
            base_url: normalized,
            http,
        })
    }

    pub fn from_base_url(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url).with_context(|| format!("invalid API url: {base_url}"))?;
        Self::new(url)
    }

    pub fn books(&self) -> books::BooksClient<'_> {
        books::BooksClient::new(self)
    }

    pub fn book_ratings(&self) -> book_ratings::BookRatingsClient<'_> {
        book_ratings::BookRatingsClient::new(self)
    }

    pub fn stats(&self) -> stats::StatsClient<'_> {
        stats::StatsClient::new(self)
    }

    pub fn recommendations(&self) -> recommendations::RecommendationsClient<'_> {
        recommendations::RecommendationsClient::new(self)
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("invalid API path: {path}"))
    }

    pub(crate) fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        self.http.request(method, url)
    }

    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let response = self.request(reqwest::Method::GET, url).send().await?;
        self.handle_response(response).await
    }

    pub(crate) async fn handle_response<T>(&self, response: reqwest::Response) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .context("failed to deserialize response body")
        } else {
            Err(self.response_error(response).await)
        }
    }

    pub(crate) async fn response_error(&self, response: reqwest::Response) -> anyhow::Error {
        let status = response.status();
        let bytes = response.bytes().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_slice::<ErrorResponse>(&bytes) {
            return anyhow!("request failed ({status}): {}", err.message);
        }

        let message = String::from_utf8_lossy(&bytes);
        anyhow!("request failed ({status}): {message}")
    }
}
