//! 번역 백엔드 API 서버.
//!
//! Axum 기반 REST API 서버를 시작합니다.
//! 인증, 번역, 히스토리, 헬스 체크 엔드포인트를 제공합니다.

use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, Extension, Router};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use lingo_api::auth::JwtConfig;
use lingo_api::openapi::swagger_ui_router;
use lingo_api::routes::create_api_router;
use lingo_api::state::AppState;
use lingo_core::config::{AppConfig, CorsConfig, DEV_SECRET_KEY};
use lingo_core::logging::init_logging_from_env;
use lingo_provider::provider_from_config;

/// AppState 초기화.
///
/// DATABASE_URL이 설정된 경우 연결을 검증한 뒤 풀을 연결합니다.
/// 연결 실패 시 DB 기능 없이 기동합니다 (번역은 계속 동작).
async fn create_app_state(config: AppConfig) -> AppState {
    let provider = provider_from_config(&config.provider);
    let database = config.database.clone();

    let mut state = AppState::new(config, provider);

    if let Some(database_url) = &database.url {
        match PgPoolOptions::new()
            .max_connections(database.max_connections)
            .acquire_timeout(Duration::from_secs(database.connection_timeout_secs))
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                if sqlx::query("SELECT 1").fetch_one(&pool).await.is_ok() {
                    info!("Connected to PostgreSQL successfully");

                    match sqlx::migrate!("../../migrations").run(&pool).await {
                        Ok(()) => info!("Database migrations applied"),
                        Err(e) => error!("Failed to run migrations: {}", e),
                    }

                    state = state.with_db_pool(pool);
                } else {
                    error!("Failed to verify database connection");
                }
            }
            Err(e) => {
                error!("Failed to connect to database: {}", e);
            }
        }
    } else {
        warn!("DATABASE_URL not set, history and account features will be disabled");
    }

    state
}

/// CORS 미들웨어 구성.
///
/// 설정에 특정 origin 목록이 있으면 해당 origin만 허용합니다.
/// "*"만 있으면 개발 모드로 간주하여 모든 origin을 허용합니다.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allow_any = config.origins.iter().any(|o| o == "*");

    let allow_origin = if allow_any {
        warn!("CORS allows any origin (development mode)");
        AllowOrigin::any()
    } else {
        let origins: Vec<_> = config
            .origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        if origins.is_empty() {
            warn!("CORS_ORIGINS contains no valid origins, allowing any");
            AllowOrigin::any()
        } else {
            info!("CORS configured with {} allowed origins", origins.len());
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(!allow_any)
        .max_age(Duration::from_secs(3600))
}

/// 전체 라우터 생성.
fn create_router(state: Arc<AppState>) -> Router {
    let jwt_config = JwtConfig::new(state.config.auth.secret_key.clone());
    let cors = cors_layer(&state.config.cors);

    create_api_router()
        .with_state(state)
        // OpenAPI 문서 및 Swagger UI
        .merge(swagger_ui_router())
        // 프로세스 전역 JWT 비밀 키 주입
        .layer(Extension(jwt_config))
        .layer(TraceLayer::new_for_http())
        // 전역 타임아웃 (30초) - 408 상태 코드 반환
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(cors)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 파일 로드 (있는 경우)
    let _ = dotenvy::dotenv();

    // tracing 초기화
    init_logging_from_env()?;

    info!("Starting LingoBridge API server...");

    // 설정 로드 (비밀 키는 이 시점에 한 번 확정되어 이후 변경되지 않음)
    let config = AppConfig::from_env();
    if config.auth.secret_key == DEV_SECRET_KEY {
        warn!("Using development JWT secret (INSECURE, set SECRET_KEY in production)");
    }

    let addr: std::net::SocketAddr = config.socket_addr().parse().map_err(|e| {
        error!(
            host = %config.server.host,
            port = config.server.port,
            "소켓 주소 설정이 유효하지 않습니다. API_HOST, API_PORT 환경변수를 확인하세요."
        );
        e
    })?;

    // AppState 생성 (DB 연결 포함)
    let state = Arc::new(create_app_state(config).await);

    info!(version = %state.version, "Application state initialized");
    info!(
        has_db = state.db_pool.is_some(),
        provider = state.provider.name(),
        "Service connections status"
    );

    let app = create_router(state);

    info!(%addr, "API server listening");
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("OpenAPI spec at http://{}/api-docs/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Graceful shutdown 시그널 대기.
///
/// Ctrl+C 또는 SIGTERM 시그널을 수신하면 종료합니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
