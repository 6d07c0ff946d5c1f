use anyhow::Context;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Thin JSON client for the Org Hierarchy API
pub struct ApiClient {
    base_url: url::Url,
    http: Client,
}

/// Error body returned by the API (`{"success": false, "error", "code"}`)
#[derive(Debug, thiserror::Error)]
#[error("{status}: {message}")]
pub struct ApiFailure {
    pub status: StatusCode,
    pub message: String,
    pub code: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let mut base_url = url::Url::parse(base_url)
            .with_context(|| format!("invalid server URL: {}", base_url))?;
        // Joining replaces the last path segment unless the base ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            http: Client::new(),
        })
    }

    /// Resolve an endpoint path below the base URL, keeping any base path prefix
    fn url(&self, path: &str) -> anyhow::Result<url::Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .with_context(|| format!("invalid request path: {}", path))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let response = self.http.get(self.url(path)?).send().await?;
        Self::decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> anyhow::Result<T> {
        let response = self.http.post(self.url(path)?).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> anyhow::Result<T> {
        let status = response.status();
        let body: Value = response.json().await.context("server returned a non-JSON body")?;

        if !status.is_success() {
            return Err(ApiFailure {
                status,
                message: body
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("request failed")
                    .to_string(),
                code: body.get("code").and_then(Value::as_str).map(str::to_string),
            }
            .into());
        }

        serde_json::from_value(body).context("unexpected response shape")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_resolve_below_base_path() {
        let client = ApiClient::new("http://host/api").unwrap();
        assert_eq!(client.url("employees/create").unwrap().as_str(), "http://host/api/employees/create");
        assert_eq!(client.url("/health").unwrap().as_str(), "http://host/api/health");

        let client = ApiClient::new("http://host/api/").unwrap();
        assert_eq!(client.url("employees/hierarchy").unwrap().as_str(), "http://host/api/employees/hierarchy");
    }

    #[test]
    fn bare_host_base_resolves_from_root() {
        let client = ApiClient::new("http://localhost:3000").unwrap();
        assert_eq!(client.url("health").unwrap().as_str(), "http://localhost:3000/health");
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(ApiClient::new("not a url").is_err());
    }
}
