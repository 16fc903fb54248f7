//! DeepL 번역 제공자.
//!
//! DeepL REST API v2를 사용합니다. 무료 플랜 키(`:fx` 접미사)는
//! `api-free.deepl.com`으로, 유료 키는 `api.deepl.com`으로 라우팅됩니다.
//!
//! DeepL은 별도의 감지 엔드포인트가 없으므로 [`TranslationProvider::detect`]는
//! 영어로의 번역을 수행하고 `detected_source_language`를 반환합니다.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::traits::{Translation, TranslationProvider};
use crate::{ProviderError, ProviderResult};

/// 기본 요청 타임아웃 (초).
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// DeepL 클라이언트 설정.
///
/// # 보안
/// - `Debug` 구현은 `api_key`를 마스킹합니다.
#[derive(Clone)]
pub struct DeepLConfig {
    /// API 인증 키
    pub api_key: String,
    /// API 기본 URL (테스트에서 재정의 가능)
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl fmt::Debug for DeepLConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepLConfig")
            .field("api_key", &"***REDACTED***")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl DeepLConfig {
    /// 새 설정 생성.
    ///
    /// 무료 플랜 키(`:fx` 접미사)인지에 따라 기본 URL을 결정합니다.
    pub fn new(api_key: String) -> Self {
        let base_url = if api_key.ends_with(":fx") {
            "https://api-free.deepl.com".to_string()
        } else {
            "https://api.deepl.com".to_string()
        };

        Self {
            api_key,
            base_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// 기본 URL 재정의 (테스트용).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// DeepL `/v2/translate` 응답.
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<TranslationEntry>,
}

#[derive(Debug, Deserialize)]
struct TranslationEntry {
    detected_source_language: Option<String>,
    text: String,
}

/// DeepL 번역 제공자.
pub struct DeepLProvider {
    config: DeepLConfig,
    client: Client,
}

impl DeepLProvider {
    /// 새로운 DeepL 제공자 생성.
    pub fn new(config: DeepLConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        Self { config, client }
    }

    /// `/v2/translate` 호출.
    async fn request_translation(
        &self,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> ProviderResult<TranslationEntry> {
        let url = format!("{}/v2/translate", self.config.base_url);

        // DeepL은 대문자 언어 코드를 사용
        let mut form: Vec<(&str, String)> = vec![
            ("text", text.to_string()),
            ("target_lang", target.to_uppercase()),
        ];
        if let Some(source) = source {
            form.push(("source_lang", source.to_uppercase()));
        }

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("DeepL-Auth-Key {}", self.config.api_key),
            )
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status.as_u16(), body));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        debug!(count = parsed.translations.len(), "DeepL translate response");

        parsed
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ParseError("empty translations array".to_string()))
    }
}

#[async_trait]
impl TranslationProvider for DeepLProvider {
    fn name(&self) -> &str {
        "deepl"
    }

    async fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> ProviderResult<Translation> {
        let entry = self.request_translation(text, source, target).await?;

        // 출발 언어가 명시된 경우 감지는 수행되지 않은 것으로 취급
        let detected_language = if source.is_none() {
            entry.detected_source_language.map(|l| l.to_lowercase())
        } else {
            None
        };

        Ok(Translation {
            translated_text: entry.text,
            detected_language,
        })
    }

    async fn detect(&self, text: &str) -> ProviderResult<String> {
        let entry = self.request_translation(text, None, "en").await?;

        entry
            .detected_source_language
            .map(|l| l.to_lowercase())
            .ok_or_else(|| {
                ProviderError::ParseError("missing detected_source_language".to_string())
            })
    }
}
