//! 번역 백엔드의 에러 타입.
//!
//! 이 모듈은 서비스 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 핵심 서비스 에러.
#[derive(Debug, Error)]
pub enum LingoError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    Validation(String),

    /// 인증 에러
    #[error("인증 에러: {0}")]
    Auth(String),

    /// 권한 부족
    #[error("권한 부족: {0}")]
    Forbidden(String),

    /// 번역 제공자 에러
    #[error("번역 제공자 에러: {0}")]
    Provider(String),

    /// 네트워크 에러
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 데이터베이스 에러
    #[error("데이터베이스 에러: {0}")]
    Database(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 찾을 수 없음
    #[error("찾을 수 없음: {0}")]
    NotFound(String),

    /// 내부 에러
    #[error("내부 에러: {0}")]
    Internal(String),
}

/// 서비스 작업을 위한 Result 타입.
pub type LingoResult<T> = Result<T, LingoError>;

impl LingoError {
    /// 재시도 가능한 에러인지 확인합니다.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LingoError::Network(_))
    }

    /// 클라이언트 잘못으로 인한 에러인지 확인합니다.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            LingoError::Validation(_) | LingoError::Auth(_) | LingoError::Forbidden(_)
        )
    }
}

impl From<serde_json::Error> for LingoError {
    fn from(err: serde_json::Error) -> Self {
        LingoError::Serialization(err.to_string())
    }
}
