//! Google Translate 번역 제공자.
//!
//! Cloud Translation API v2 (basic)를 사용합니다.
//!
//! # 엔드포인트
//!
//! - `POST /language/translate/v2` - 번역 (자동 감지 포함)
//! - `POST /language/translate/v2/detect` - 언어 감지

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::traits::{Translation, TranslationProvider};
use crate::{ProviderError, ProviderResult};

/// 기본 요청 타임아웃 (초).
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Google Translate 클라이언트 설정.
///
/// # 보안
/// - `Debug` 구현은 `api_key`를 마스킹합니다.
#[derive(Clone)]
pub struct GoogleConfig {
    /// API 키
    pub api_key: String,
    /// API 기본 URL (테스트에서 재정의 가능)
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("api_key", &"***REDACTED***")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GoogleConfig {
    /// 새 설정 생성.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: "https://translation.googleapis.com".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// 기본 URL 재정의 (테스트용).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<TranslationEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationEntry {
    translated_text: String,
    detected_source_language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetectResponse {
    data: DetectData,
}

#[derive(Debug, Deserialize)]
struct DetectData {
    detections: Vec<Vec<DetectionEntry>>,
}

#[derive(Debug, Deserialize)]
struct DetectionEntry {
    language: String,
}

/// Google Translate 제공자.
pub struct GoogleProvider {
    config: GoogleConfig,
    client: Client,
}

impl GoogleProvider {
    /// 새로운 Google Translate 제공자 생성.
    pub fn new(config: GoogleConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        Self { config, client }
    }

    /// 에러 응답을 제공자 에러로 변환.
    async fn check_status(response: reqwest::Response) -> ProviderResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status.as_u16(), body));
        }
        Ok(response)
    }
}

#[async_trait]
impl TranslationProvider for GoogleProvider {
    fn name(&self) -> &str {
        "google"
    }

    async fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> ProviderResult<Translation> {
        let url = format!("{}/language/translate/v2", self.config.base_url);

        let mut body = json!({
            "q": text,
            "target": target,
            "format": "text",
        });
        if let Some(source) = source {
            body["source"] = json!(source);
        }

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        debug!(
            count = parsed.data.translations.len(),
            "Google translate response"
        );

        let entry = parsed
            .data
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ParseError("empty translations array".to_string()))?;

        Ok(Translation {
            translated_text: entry.translated_text,
            detected_language: if source.is_none() {
                entry.detected_source_language.map(|l| l.to_lowercase())
            } else {
                None
            },
        })
    }

    async fn detect(&self, text: &str) -> ProviderResult<String> {
        let url = format!("{}/language/translate/v2/detect", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&json!({ "q": text }))
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let parsed: DetectResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        parsed
            .data
            .detections
            .into_iter()
            .flatten()
            .next()
            .map(|d| d.language.to_lowercase())
            .ok_or_else(|| ProviderError::ParseError("empty detections array".to_string()))
    }
}
