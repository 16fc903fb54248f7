//! 번역 제공자 에러 타입.

use thiserror::Error;

/// 번역 제공자 관련 에러.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    NetworkError(String),

    /// 인증/권한 에러 (API 키 불량 등)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 요청 한도/쿼터 초과
    #[error("Rate limit exceeded")]
    RateLimited,

    /// 제공자 API 에러
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// 응답 파싱/역직렬화 에러
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 지원되지 않는 작업
    #[error("Not supported: {0}")]
    NotSupported(String),
}

/// 제공자 작업을 위한 Result 타입.
pub type ProviderResult<T> = Result<T, ProviderError>;

impl ProviderError {
    /// 재시도 가능한 에러인지 확인.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProviderError::NetworkError(_) | ProviderError::Timeout(_) | ProviderError::RateLimited
        )
    }

    /// HTTP 상태 코드를 제공자 에러로 변환.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => ProviderError::Unauthorized(message.into()),
            429 | 456 => ProviderError::RateLimited,
            _ => ProviderError::ApiError {
                status,
                message: message.into(),
            },
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(err.to_string())
        } else if err.is_decode() {
            ProviderError::ParseError(err.to_string())
        } else {
            ProviderError::NetworkError(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            ProviderError::from_status(401, "bad key"),
            ProviderError::Unauthorized(_)
        ));
        assert!(matches!(
            ProviderError::from_status(403, "forbidden"),
            ProviderError::Unauthorized(_)
        ));
        assert!(matches!(
            ProviderError::from_status(429, "slow down"),
            ProviderError::RateLimited
        ));
        // DeepL 쿼터 초과 상태 코드
        assert!(matches!(
            ProviderError::from_status(456, "quota"),
            ProviderError::RateLimited
        ));
        assert!(matches!(
            ProviderError::from_status(500, "boom"),
            ProviderError::ApiError { status: 500, .. }
        ));
    }

    #[test]
    fn test_is_retryable() {
        assert!(ProviderError::RateLimited.is_retryable());
        assert!(ProviderError::Timeout("t".into()).is_retryable());
        assert!(!ProviderError::Unauthorized("k".into()).is_retryable());
    }
}
