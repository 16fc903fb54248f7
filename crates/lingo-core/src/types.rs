//! 번역 도메인 타입.
//!
//! 번역 요청/응답의 핵심 구조체를 정의합니다. HTTP 계층의
//! 직렬화 형식(camelCase)은 원 API 계약을 따릅니다.

use serde::{Deserialize, Serialize};

/// 자동 감지를 의미하는 출발 언어 코드.
pub const AUTO_LANGUAGE: &str = "auto";

/// 기본 도착 언어 코드.
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// 번역 요청.
///
/// 일시적인 값으로, 저장되지 않습니다. 결과 레코드만 히스토리에
/// 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// 번역할 텍스트
    pub text: String,
    /// 출발 언어 ("auto"면 제공자 측 감지)
    pub source_language: String,
    /// 도착 언어
    pub target_language: String,
    /// 요청한 사용자 ID (인증된 신원에서 추출)
    pub user_id: String,
}

impl TranslationRequest {
    /// 새로운 번역 요청 생성.
    ///
    /// 출발/도착 언어가 비어 있으면 기본값("auto"/"en")을 적용합니다.
    pub fn new(
        text: impl Into<String>,
        source_language: Option<String>,
        target_language: Option<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| AUTO_LANGUAGE.to_string()),
            target_language: target_language
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string()),
            user_id: user_id.into(),
        }
    }

    /// 출발 언어 자동 감지 여부.
    pub fn is_auto_source(&self) -> bool {
        self.source_language == AUTO_LANGUAGE
    }
}

/// 번역 응답.
///
/// `detected_language`는 출발 언어가 "auto"여서 감지가 수행된 경우에만
/// 채워집니다. `request_id`는 히스토리 저장에 성공한 경우에만 존재합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct TranslationResponse {
    /// 원본 텍스트
    pub original_text: String,
    /// 번역된 텍스트
    pub translated_text: String,
    /// 확정된 출발 언어
    pub source_language: String,
    /// 도착 언어
    pub target_language: String,
    /// 감지된 언어 (감지가 수행된 경우)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<String>,
    /// 히스토리 레코드 ID (저장 성공 시)
    #[serde(rename = "request_id", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req = TranslationRequest::new("hello", None, None, "u1");
        assert_eq!(req.source_language, "auto");
        assert_eq!(req.target_language, "en");
        assert!(req.is_auto_source());
    }

    #[test]
    fn test_request_explicit_languages() {
        let req =
            TranslationRequest::new("hello", Some("en".into()), Some("fr".into()), "u1");
        assert_eq!(req.source_language, "en");
        assert_eq!(req.target_language, "fr");
        assert!(!req.is_auto_source());
    }

    #[test]
    fn test_empty_language_falls_back_to_default() {
        let req = TranslationRequest::new("hello", Some(String::new()), Some(String::new()), "u1");
        assert_eq!(req.source_language, "auto");
        assert_eq!(req.target_language, "en");
    }

    #[test]
    fn test_response_serialization_camel_case() {
        let response = TranslationResponse {
            original_text: "hello".into(),
            translated_text: "bonjour".into(),
            source_language: "en".into(),
            target_language: "fr".into(),
            detected_language: None,
            request_id: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""originalText":"hello""#));
        assert!(json.contains(r#""translatedText":"bonjour""#));
        assert!(!json.contains("detectedLanguage"));
        assert!(!json.contains("request_id"));
    }

    #[test]
    fn test_response_serialization_with_optionals() {
        let response = TranslationResponse {
            original_text: "hello".into(),
            translated_text: "bonjour".into(),
            source_language: "en".into(),
            target_language: "fr".into(),
            detected_language: Some("en".into()),
            request_id: Some("8c5f9a6e-0000-0000-0000-000000000000".into()),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""detectedLanguage":"en""#));
        assert!(json.contains(r#""request_id":"#));
    }
}
