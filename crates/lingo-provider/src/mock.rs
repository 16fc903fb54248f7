//! 모의 번역 제공자.
//!
//! 외부 API 키 없이 개발/테스트할 때 사용하는 결정적 구현입니다.
//! 동일 입력에 대해 항상 동일한 출력을 반환합니다.

use async_trait::async_trait;

use crate::traits::{Translation, TranslationProvider};
use crate::ProviderResult;

/// 감지 휴리스틱에 사용하는 단어 목록.
const KNOWN_WORDS: &[(&str, &str)] = &[
    ("bonjour", "fr"),
    ("merci", "fr"),
    ("hola", "es"),
    ("gracias", "es"),
    ("hallo", "de"),
    ("danke", "de"),
    ("안녕하세요", "ko"),
    ("감사합니다", "ko"),
    ("你好", "zh"),
    ("谢谢", "zh"),
];

/// 모의 번역 제공자.
#[derive(Debug, Default)]
pub struct MockProvider;

impl MockProvider {
    /// 새로운 모의 제공자 생성.
    pub fn new() -> Self {
        Self
    }

    fn detect_naive(text: &str) -> String {
        let lowered = text.to_lowercase();
        for (word, language) in KNOWN_WORDS {
            if lowered.contains(word) {
                return (*language).to_string();
            }
        }
        "en".to_string()
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> ProviderResult<Translation> {
        let detected_language = match source {
            Some(_) => None,
            None => Some(Self::detect_naive(text)),
        };

        Ok(Translation {
            translated_text: format!("[{}] {}", target, text),
            detected_language,
        })
    }

    async fn detect(&self, text: &str) -> ProviderResult<String> {
        Ok(Self::detect_naive(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_translate_is_deterministic() {
        let provider = MockProvider::new();
        let a = provider.translate("hello", None, "fr").await.unwrap();
        let b = provider.translate("hello", None, "fr").await.unwrap();

        assert_eq!(a, b);
        assert!(!a.translated_text.is_empty());
    }

    #[tokio::test]
    async fn test_translate_with_source_skips_detection() {
        let provider = MockProvider::new();
        let result = provider.translate("hello", Some("en"), "fr").await.unwrap();
        assert!(result.detected_language.is_none());
    }

    #[tokio::test]
    async fn test_detect_known_words() {
        let provider = MockProvider::new();
        assert_eq!(provider.detect("bonjour").await.unwrap(), "fr");
        assert_eq!(provider.detect("Hola amigo").await.unwrap(), "es");
        assert_eq!(provider.detect("unknown words").await.unwrap(), "en");
    }
}
