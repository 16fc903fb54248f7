//! 번역 히스토리 저장소.
//!
//! 번역 결과 레코드를 append-only로 저장합니다. 레코드 ID는
//! 저장소가 생성하며, 조회는 사용자별 최신순입니다.
//!
//! [`HistoryStore`] trait 뒤에 두어 파이프라인의 저장 실패 격리를
//! 테스트에서 검증할 수 있게 합니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lingo_core::{LingoError, LingoResult};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use utoipa::ToSchema;
use uuid::Uuid;

/// 번역 히스토리 레코드.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationHistoryRecord {
    pub id: Uuid,
    pub user_id: String,
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub detected_language: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// 히스토리 레코드 생성 입력.
#[derive(Debug, Clone)]
pub struct NewTranslationRecord {
    pub user_id: String,
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub detected_language: Option<String>,
}

/// 번역 히스토리 저장소 인터페이스.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// 레코드 저장, 생성된 ID 반환.
    async fn insert(&self, record: NewTranslationRecord) -> LingoResult<Uuid>;

    /// 사용자의 히스토리 조회 (최신순, limit 제한).
    async fn list_by_user(
        &self,
        user_id: &str,
        limit: i64,
    ) -> LingoResult<Vec<TranslationHistoryRecord>>;
}

/// PostgreSQL 히스토리 저장소.
pub struct PgHistoryStore {
    pool: PgPool,
}

impl PgHistoryStore {
    /// 새로운 저장소 생성.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn insert(&self, record: NewTranslationRecord) -> LingoResult<Uuid> {
        let row: (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO translation_history (
                user_id, original_text, translated_text,
                source_language, target_language, detected_language
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&record.user_id)
        .bind(&record.original_text)
        .bind(&record.translated_text)
        .bind(&record.source_language)
        .bind(&record.target_language)
        .bind(&record.detected_language)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| LingoError::Database(e.to_string()))?;

        Ok(row.0)
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        limit: i64,
    ) -> LingoResult<Vec<TranslationHistoryRecord>> {
        sqlx::query_as::<_, TranslationHistoryRecord>(
            r#"
            SELECT * FROM translation_history
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| LingoError::Database(e.to_string()))
    }
}
