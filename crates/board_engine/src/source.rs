use std::time::Duration;

use board_logging::{board_debug, board_warn};
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::decode::decode_page;
use crate::{FailureKind, FetchError, PageRequest, PageResponse};

/// Body layout returned by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseShape {
    /// `{ "content": [...], "meta": {...} }`
    #[default]
    Paged,
    /// Bare array, delivered as a single page.
    Plain,
}

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    /// Path below `base_url`, e.g. `api/apps/appreleaseprocess/inReview`.
    pub endpoint: String,
    pub page_size: u32,
    pub shape: ResponseShape,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            endpoint: "api/apps/appreleaseprocess/inReview".to_string(),
            page_size: 15,
            shape: ResponseShape::Paged,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec!["application/json".to_string()],
        }
    }
}

/// Where board pages come from.
#[async_trait::async_trait]
pub trait BoardSource: Send + Sync {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Option<PageResponse>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBoardSource {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestBoardSource {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    /// Full request URL including query parameters.
    pub fn request_url(&self, request: &PageRequest) -> Result<reqwest::Url, FetchError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let endpoint = self.settings.endpoint.trim_start_matches('/');
        let mut url = reqwest::Url::parse(&format!("{base}/{endpoint}"))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("page", &request.page.to_string())
                .append_pair("size", &self.settings.page_size.to_string())
                .append_pair("statusId", &request.status_id)
                .append_pair("sorting", &request.sorting);
            if let Some(expr) = request.expr.as_deref().filter(|expr| !expr.is_empty()) {
                pairs.append_pair("expr", expr);
            }
        }
        Ok(url)
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }
}

#[async_trait::async_trait]
impl BoardSource for ReqwestBoardSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Option<PageResponse>, FetchError> {
        let url = self.request_url(request)?;
        board_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            board_warn!("Board request failed with {}", status);
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }

        // An empty body is how some endpoints say "nothing here".
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        decode_page(&body, self.settings.shape)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
