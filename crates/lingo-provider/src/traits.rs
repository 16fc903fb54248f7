//! 번역 제공자 trait 정의.

use async_trait::async_trait;

use crate::ProviderResult;

/// 제공자 번역 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// 번역된 텍스트
    pub translated_text: String,
    /// 감지된 출발 언어 (감지가 수행된 경우, 소문자 코드)
    pub detected_language: Option<String>,
}

/// 통합 번역 제공자 인터페이스.
///
/// 언어 코드는 소문자(ISO 639-1)로 주고받습니다. 개별 제공자의
/// 코드 표기(DeepL의 대문자 등)는 구현체 내부에서 변환합니다.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// 제공자 이름 반환.
    fn name(&self) -> &str;

    /// 텍스트 번역.
    ///
    /// # Arguments
    ///
    /// * `text` - 번역할 텍스트
    /// * `source` - 출발 언어 (None이면 제공자 측 자동 감지)
    /// * `target` - 도착 언어
    async fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> ProviderResult<Translation>;

    /// 텍스트의 언어 감지.
    async fn detect(&self, text: &str) -> ProviderResult<String>;
}
