use std::time::{Duration, Instant};

use model::Settings;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ApiError, ApiResult};

/// Query-string parameters. Only scalar values can be added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uint(mut self, key: &'static str, value: u64) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    pub fn text(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.0.push((key, value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Validation(format!("http client: {}", err)))?;
        Ok(Self { http, base_url })
    }

    pub fn from_settings(settings: &Settings) -> ApiResult<Self> {
        let base_url = settings
            .base_url()
            .map_err(|err| ApiError::Validation(err.to_string()))?;
        Self::new(base_url, Duration::from_secs(settings.http_timeout_secs))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> ApiResult<Url> {
        if !path.starts_with('/') {
            return Err(ApiError::Validation(format!(
                "path {:?} must be relative to the base URL and start with '/'",
                path
            )));
        }
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}{}", base, path))
            .map_err(|err| ApiError::Validation(format!("bad path {:?}: {}", path, err)))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: &Params) -> ApiResult<T> {
        self.request(Method::GET, path, params, None).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
        body: Option<&serde_json::Value>,
    ) -> ApiResult<T> {
        self.request(Method::POST, path, params, body).await
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        body: Option<&serde_json::Value>,
    ) -> ApiResult<T> {
        let url = self.url_for(path)?;
        debug!(%method, path, params = params.pairs().len(), "api request");

        let start = Instant::now();
        let result = self.send(method.clone(), url, path, params, body).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => info!(%method, path, elapsed_ms, outcome = "ok", "api response"),
            Err(err) => warn!(
                %method,
                path,
                elapsed_ms,
                outcome = %err.kind(),
                status = err.status(),
                error = %err,
                "api response"
            ),
        }

        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        path: &str,
        params: &Params,
        body: Option<&serde_json::Value>,
    ) -> ApiResult<T> {
        let mut req = self
            .http
            .request(method, url)
            .header("Accept", "application/json");
        if !params.is_empty() {
            req = req.query(params.pairs());
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|err| ApiError::network(path, err))?;
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|err| ApiError::network(path, err))?;

        if !status.is_success() {
            return Err(ApiError::Http {
                path: path.to_string(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        serde_json::from_slice(&bytes).map_err(|source| ApiError::Parse {
            path: path.to_string(),
            source,
        })
    }
}
