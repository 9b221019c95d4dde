use anyhow::{Result, anyhow};
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION},
    Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

/// Query parameters in PostgREST form, e.g. `("user_id", "eq.42")`.
pub type QueryParams<'a> = &'a [(&'a str, String)];

pub struct SupabaseClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    fn get_headers(&self, auth_token: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert("apikey", HeaderValue::from_str(&self.anon_key)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Anonymous calls authenticate as the anon role.
        let bearer = auth_token.unwrap_or(&self.anon_key);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", bearer))?,
        );

        Ok(headers)
    }

    pub async fn request_with_headers<T>(
        &self,
        method: Method,
        path: &str,
        query: QueryParams<'_>,
        auth_token: Option<&str>,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<T>
    where T: DeserializeOwned {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut headers = self.get_headers(auth_token)?;
        if let Some(extra) = extra_headers {
            headers.extend(extra);
        }

        let mut req = self.client.request(method, &url)
            .headers(headers);

        if !query.is_empty() {
            req = req.query(query);
        }

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Authentication error: {}", error_text),
                404 => anyhow!("Resource not found: {}", error_text),
                _ => anyhow!("API error ({}): {}", status, error_text),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Reads rows from a table through the REST interface.
    pub async fn select<T>(
        &self,
        table: &str,
        query: QueryParams<'_>,
        auth_token: Option<&str>,
    ) -> Result<Vec<T>>
    where T: DeserializeOwned {
        let path = format!("/rest/v1/{}", table);
        self.request_with_headers(Method::GET, &path, query, auth_token, None, None).await
    }

    /// Inserts one row and returns the stored representation.
    pub async fn insert<T>(
        &self,
        table: &str,
        row: Value,
        auth_token: Option<&str>,
    ) -> Result<T>
    where T: DeserializeOwned {
        let path = format!("/rest/v1/{}", table);

        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));

        let mut rows: Vec<T> = self.request_with_headers(
            Method::POST,
            &path,
            &[],
            auth_token,
            Some(row),
            Some(headers),
        ).await?;

        if rows.is_empty() {
            return Err(anyhow!("Insert into {} returned no rows", table));
        }

        Ok(rows.swap_remove(0))
    }
}
