//! 번역 제공자 커넥터.
//!
//! 이 크레이트는 외부 번역 서비스와의 경계를 정의합니다:
//! - [`TranslationProvider`]: 번역/언어 감지 trait
//! - [`DeepLProvider`]: DeepL API 클라이언트
//! - [`GoogleProvider`]: Google Translate API 클라이언트
//! - [`MockProvider`]: 테스트/키 미설정 환경용 결정적 구현
//!
//! 모든 HTTP 클라이언트는 명시적인 요청 타임아웃을 가집니다.

mod deepl;
mod error;
mod google;
mod mock;
mod traits;

use std::sync::Arc;

use lingo_core::config::ProviderConfig;
use tracing::{info, warn};

pub use deepl::{DeepLConfig, DeepLProvider};
pub use error::{ProviderError, ProviderResult};
pub use google::{GoogleConfig, GoogleProvider};
pub use mock::MockProvider;
pub use traits::{Translation, TranslationProvider};

/// 설정에서 번역 제공자 생성.
///
/// 우선순위: DeepL 키 → Google 키 → Mock.
/// 키가 하나도 없으면 Mock 제공자를 사용하며 경고를 남깁니다.
pub fn provider_from_config(config: &ProviderConfig) -> Arc<dyn TranslationProvider> {
    if let Some(key) = &config.deepl_api_key {
        let mut deepl_config = DeepLConfig::new(key.clone());
        if let Some(secs) = config.request_timeout_secs {
            deepl_config.timeout_secs = secs;
        }
        info!("Using DeepL translation provider");
        return Arc::new(DeepLProvider::new(deepl_config));
    }

    if let Some(key) = &config.google_api_key {
        let mut google_config = GoogleConfig::new(key.clone());
        if let Some(secs) = config.request_timeout_secs {
            google_config.timeout_secs = secs;
        }
        info!("Using Google Translate provider");
        return Arc::new(GoogleProvider::new(google_config));
    }

    warn!("No translation API key configured, using mock provider");
    Arc::new(MockProvider::new())
}
