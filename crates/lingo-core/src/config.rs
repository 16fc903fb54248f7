//! 설정 관리.
//!
//! 애플리케이션 설정을 환경변수에서 로드합니다.
//!
//! # 환경변수
//!
//! - `API_HOST`, `API_PORT`: 서버 바인딩 주소
//! - `SECRET_KEY`: JWT 서명 비밀 키
//! - `DATABASE_URL`: PostgreSQL 연결 문자열
//! - `DEEPL_API_KEY`, `GOOGLE_TRANSLATE_API_KEY`: 번역 제공자 API 키
//! - `CORS_ORIGINS`: 쉼표로 구분된 허용 origin 목록
//! - `DEBUG`: 디버그 모드 플래그

use serde::{Deserialize, Serialize};

/// 프로덕션에서 반드시 교체해야 하는 개발용 기본 비밀 키.
pub const DEV_SECRET_KEY: &str = "dev-secret-key-change-in-production";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// 서버 설정
    pub server: ServerConfig,
    /// 인증 설정
    pub auth: AuthConfig,
    /// 데이터베이스 설정
    pub database: DatabaseConfig,
    /// 번역 제공자 설정
    pub provider: ProviderConfig,
    /// CORS 설정
    pub cors: CorsConfig,
    /// 디버그 모드
    pub debug: bool,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// 인증 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT 서명 비밀 키
    pub secret_key: String,
    /// 토큰 유효 기간 (시간)
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: DEV_SECRET_KEY.to_string(),
            token_ttl_hours: 24,
        }
    }
}

/// 데이터베이스 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// 연결 문자열 (미설정 시 DB 기능 비활성화)
    pub url: Option<String>,
    /// 최대 연결 수
    pub max_connections: u32,
    /// 연결 타임아웃 (초)
    pub connection_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            connection_timeout_secs: 10,
        }
    }
}

/// 번역 제공자 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// DeepL API 키
    pub deepl_api_key: Option<String>,
    /// Google Translate API 키
    pub google_api_key: Option<String>,
    /// 제공자 호출 타임아웃 (초)
    pub request_timeout_secs: Option<u64>,
}

/// CORS 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// 허용 origin 목록 ("*"는 모든 origin 허용)
    pub origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: vec!["*".to_string()],
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            database: DatabaseConfig::default(),
            provider: ProviderConfig::default(),
            cors: CorsConfig::default(),
            debug: false,
        }
    }
}

impl AppConfig {
    /// 환경변수에서 설정 로드.
    ///
    /// 미설정 항목은 기본값을 사용합니다. SECRET_KEY가 없으면
    /// 개발용 기본 키를 사용하며 경고를 남깁니다.
    pub fn from_env() -> Self {
        let host = std::env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let secret_key = match std::env::var("SECRET_KEY") {
            Ok(key) if !key.is_empty() => key,
            _ => {
                tracing::warn!("SECRET_KEY not set, using development default");
                DEV_SECRET_KEY.to_string()
            }
        };

        let token_ttl_hours = std::env::var("TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        let debug = std::env::var("DEBUG")
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "t"))
            .unwrap_or(false);

        let origins = match std::env::var("CORS_ORIGINS") {
            Ok(raw) if !raw.is_empty() => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            _ => vec!["*".to_string()],
        };

        Self {
            server: ServerConfig { host, port },
            auth: AuthConfig {
                secret_key,
                token_ttl_hours,
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL").ok(),
                ..Default::default()
            },
            provider: ProviderConfig {
                deepl_api_key: std::env::var("DEEPL_API_KEY").ok().filter(|k| !k.is_empty()),
                google_api_key: std::env::var("GOOGLE_TRANSLATE_API_KEY")
                    .ok()
                    .filter(|k| !k.is_empty()),
                request_timeout_secs: std::env::var("PROVIDER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok()),
            },
            cors: CorsConfig { origins },
            debug,
        }
    }

    /// 소켓 주소 문자열 반환.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.auth.token_ttl_hours, 24);
        assert_eq!(config.auth.secret_key, DEV_SECRET_KEY);
        assert!(config.database.url.is_none());
        assert!(!config.debug);
        assert_eq!(config.cors.origins, vec!["*".to_string()]);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig::default();
        assert_eq!(config.socket_addr(), "127.0.0.1:5000");
    }
}
