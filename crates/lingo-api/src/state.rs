//! 애플리케이션 상태.
//!
//! 모든 핸들러가 공유하는 상태입니다. 시작 시 한 번 구성되며,
//! 데이터베이스 풀은 선택적입니다 (미설정 시 히스토리/계정 기능은
//! 비활성화되고 번역은 계속 동작합니다).

use std::sync::Arc;

use chrono::{DateTime, Utc};
use lingo_core::config::AppConfig;
use lingo_provider::TranslationProvider;
use sqlx::PgPool;

use crate::repository::{HistoryStore, PgHistoryStore};
use crate::services::TranslationService;

/// 공유 애플리케이션 상태.
#[derive(Clone)]
pub struct AppState {
    /// 애플리케이션 설정
    pub config: AppConfig,
    /// 데이터베이스 연결 풀 (미설정 가능)
    pub db_pool: Option<PgPool>,
    /// 번역 제공자
    pub provider: Arc<dyn TranslationProvider>,
    /// 번역 히스토리 저장소 (DB 설정 시에만 존재)
    pub history: Option<Arc<dyn HistoryStore>>,
    /// 서버 시작 시각
    pub started_at: DateTime<Utc>,
    /// API 버전
    pub version: String,
}

impl AppState {
    /// DB 없이 상태 생성.
    pub fn new(config: AppConfig, provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            config,
            db_pool: None,
            provider,
            history: None,
            started_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }

    /// 데이터베이스 풀 연결.
    ///
    /// 히스토리 저장소도 함께 구성됩니다.
    pub fn with_db_pool(mut self, pool: PgPool) -> Self {
        self.history = Some(Arc::new(PgHistoryStore::new(pool.clone())) as Arc<dyn HistoryStore>);
        self.db_pool = Some(pool);
        self
    }

    /// 번역 파이프라인 서비스 생성.
    pub fn translation_service(&self) -> TranslationService {
        TranslationService::new(self.provider.clone(), self.history.clone())
    }

    /// 데이터베이스 연결 상태 확인.
    pub async fn is_db_healthy(&self) -> bool {
        match &self.db_pool {
            Some(pool) => sqlx::query("SELECT 1").execute(pool).await.is_ok(),
            None => false,
        }
    }
}

/// 테스트용 상태 생성.
///
/// Mock 제공자와 기본 설정을 사용하며 DB는 연결하지 않습니다.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state() -> AppState {
    use lingo_provider::MockProvider;

    AppState::new(AppConfig::default(), Arc::new(MockProvider::new()))
}
