//! 번역 파이프라인.
//!
//! 검증 → 제공자 호출 → 히스토리 저장의 순서로 번역 요청을
//! 처리합니다. 히스토리 저장 실패는 번역 응답을 실패시키지
//! 않습니다. 저장 실패 시 로그를 남기고 `request_id` 없이
//! 응답을 반환합니다.

use std::sync::Arc;

use lingo_core::{LingoError, LingoResult, TranslationRequest, TranslationResponse};
use lingo_provider::TranslationProvider;
use tracing::{debug, warn};

use crate::repository::{HistoryStore, NewTranslationRecord, TranslationHistoryRecord};

/// 기본 히스토리 조회 개수.
pub const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// 번역 파이프라인 서비스.
///
/// 히스토리 저장소가 없으면(DB 미설정) 번역만 수행합니다.
#[derive(Clone)]
pub struct TranslationService {
    provider: Arc<dyn TranslationProvider>,
    history: Option<Arc<dyn HistoryStore>>,
}

impl TranslationService {
    /// 새로운 번역 서비스 생성.
    pub fn new(
        provider: Arc<dyn TranslationProvider>,
        history: Option<Arc<dyn HistoryStore>>,
    ) -> Self {
        Self { provider, history }
    }

    /// 번역 요청 처리.
    ///
    /// # Errors
    ///
    /// - 텍스트가 비어 있으면 [`LingoError::Validation`]
    /// - 제공자 호출 실패 시 [`LingoError::Provider`]
    ///
    /// 히스토리 저장 실패는 에러로 전파되지 않습니다.
    pub async fn translate(
        &self,
        request: TranslationRequest,
    ) -> LingoResult<TranslationResponse> {
        if request.text.trim().is_empty() {
            return Err(LingoError::Validation(
                "번역할 텍스트를 제공해주세요".to_string(),
            ));
        }

        // "auto"는 제공자 측 자동 감지로 전달
        let source = if request.is_auto_source() {
            None
        } else {
            Some(request.source_language.as_str())
        };

        let translation = self
            .provider
            .translate(&request.text, source, &request.target_language)
            .await
            .map_err(|e| LingoError::Provider(e.to_string()))?;

        // 감지가 수행된 경우 감지 결과를 출발 언어로 확정
        let source_language = translation
            .detected_language
            .clone()
            .unwrap_or_else(|| request.source_language.clone());

        let mut response = TranslationResponse {
            original_text: request.text.clone(),
            translated_text: translation.translated_text,
            source_language,
            target_language: request.target_language.clone(),
            detected_language: translation.detected_language,
            request_id: None,
        };

        // 히스토리 저장: 실패해도 번역 응답은 유지
        if let Some(history) = &self.history {
            let record = NewTranslationRecord {
                user_id: request.user_id.clone(),
                original_text: response.original_text.clone(),
                translated_text: response.translated_text.clone(),
                source_language: response.source_language.clone(),
                target_language: response.target_language.clone(),
                detected_language: response.detected_language.clone(),
            };

            match history.insert(record).await {
                Ok(id) => response.request_id = Some(id.to_string()),
                Err(e) => {
                    warn!(user_id = %request.user_id, error = %e, "번역 히스토리 저장 실패");
                }
            }
        } else {
            debug!("히스토리 저장소 미설정, 저장 생략");
        }

        Ok(response)
    }

    /// 사용자 번역 히스토리 조회 (최신순).
    pub async fn get_history(
        &self,
        user_id: &str,
        limit: Option<i64>,
    ) -> LingoResult<Vec<TranslationHistoryRecord>> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT).max(0);

        match &self.history {
            Some(history) => history.list_by_user(user_id, limit).await,
            None => Ok(vec![]),
        }
    }

    /// 텍스트 언어 감지.
    ///
    /// # Errors
    ///
    /// - 텍스트가 비어 있으면 [`LingoError::Validation`]
    /// - 제공자 호출 실패 시 [`LingoError::Provider`]
    pub async fn detect_language(&self, text: &str) -> LingoResult<String> {
        if text.trim().is_empty() {
            return Err(LingoError::Validation(
                "감지할 텍스트를 제공해주세요".to_string(),
            ));
        }

        self.provider
            .detect(text)
            .await
            .map_err(|e| LingoError::Provider(e.to_string()))
    }
}
