use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client, Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

/// Bounded timeout for store calls; the upstream design would hang forever
/// on a stalled store.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// REST client for the document store. Collections live under
/// `/rest/v1/{collection}` and equality filters are `field=eq.value`
/// query parameters.
pub struct StoreClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl StoreClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.store_url.clone(),
            api_key: config.store_api_key.clone(),
        }
    }

    fn get_headers(&self, extra: Option<HeaderMap>) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Ok(key) = HeaderValue::from_str(&self.api_key) {
            headers.insert("apikey", key);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(extra) = extra {
            headers.extend(extra);
        }

        headers
    }

    fn collection_path(collection: &str, filters: &[(&str, &str)]) -> String {
        let mut path = format!("/rest/v1/{}", collection);
        for (i, (field, value)) in filters.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            path.push_str(&format!("{}{}=eq.{}", sep, field, urlencoding::encode(value)));
        }
        path
    }

    async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Store request: {} {}", method, url);

        let mut req = self
            .client
            .request(method, &url)
            .headers(self.get_headers(extra_headers));

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Store error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Store authentication error: {}", error_text),
                404 => anyhow!("Collection not found: {}", error_text),
                _ => anyhow!("Store error ({}): {}", status, error_text),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Fetch every document in `collection` matching the equality filters.
    pub async fn find<T>(&self, collection: &str, filters: &[(&str, &str)]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let path = Self::collection_path(collection, filters);
        self.request(Method::GET, &path, None, None).await
    }

    /// Like `find`, but returning only the named fields of each document.
    pub async fn find_projected<T>(
        &self,
        collection: &str,
        filters: &[(&str, &str)],
        select: &str,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut path = Self::collection_path(collection, filters);
        let sep = if filters.is_empty() { '?' } else { '&' };
        path.push_str(&format!("{}select={}", sep, select));
        self.request(Method::GET, &path, None, None).await
    }

    /// Fetch at most one matching document.
    pub async fn find_one<T>(
        &self,
        collection: &str,
        filters: &[(&str, &str)],
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let mut path = Self::collection_path(collection, filters);
        let sep = if filters.is_empty() { '?' } else { '&' };
        path.push_str(&format!("{}limit=1", sep));

        let rows: Vec<T> = self.request(Method::GET, &path, None, None).await?;
        Ok(rows.into_iter().next())
    }

    /// Insert a document and return the stored representation (including
    /// the store-assigned `id`).
    pub async fn insert_one(&self, collection: &str, document: Value) -> Result<Value> {
        let path = format!("/rest/v1/{}", collection);
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));

        let rows: Vec<Value> = self
            .request(Method::POST, &path, Some(document), Some(headers))
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| anyhow!("Insert into {} returned no document", collection))
    }

    /// Insert-or-update keyed on `conflict_target`.
    pub async fn upsert_one(
        &self,
        collection: &str,
        conflict_target: &str,
        document: Value,
    ) -> Result<Value> {
        let path = format!("/rest/v1/{}?on_conflict={}", collection, conflict_target);
        let mut headers = HeaderMap::new();
        headers.insert(
            "Prefer",
            HeaderValue::from_static("resolution=merge-duplicates,return=representation"),
        );

        let rows: Vec<Value> = self
            .request(Method::POST, &path, Some(document), Some(headers))
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| anyhow!("Upsert into {} returned no document", collection))
    }

    /// Patch every document matching the filters; returns the updated rows.
    pub async fn update(
        &self,
        collection: &str,
        filters: &[(&str, &str)],
        patch: Value,
    ) -> Result<Vec<Value>> {
        let path = Self::collection_path(collection, filters);
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));

        self.request(Method::PATCH, &path, Some(patch), Some(headers))
            .await
    }

    /// Delete by store-assigned id; returns the deleted rows.
    pub async fn delete_by_id(&self, collection: &str, id: &str) -> Result<Vec<Value>> {
        let path = Self::collection_path(collection, &[("id", id)]);
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));

        self.request(Method::DELETE, &path, None, Some(headers))
            .await
    }
}
