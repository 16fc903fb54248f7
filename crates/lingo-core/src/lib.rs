//! 번역 백엔드의 핵심 도메인 모델과 타입.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 번역 요청/응답 도메인 타입
//! - 공통 에러 타입 ([`LingoError`])
//! - 환경변수 기반 설정 ([`config::AppConfig`])
//! - tracing 기반 로깅 초기화 ([`logging`])

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::AppConfig;
pub use error::{LingoError, LingoResult};
pub use types::{TranslationRequest, TranslationResponse};
