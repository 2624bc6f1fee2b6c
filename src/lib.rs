pub mod config;
pub mod domain;
pub mod error;
pub mod global;
pub mod logging;
pub mod response;
pub mod shutdown;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::AppConfig;
pub use domain::ai::{AiBackend, AiService, SharedAiBackend};
pub use domain::health::HealthService;
pub use error::AppError;
pub use state::AppState;

/// 전체 요청 타임아웃
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::ai::handler::enhance_prompt_handler,
        domain::ai::handler::reaction_handler,
        domain::health::handler::health_check,
    ),
    components(
        schemas(
            domain::ai::dto::PromptEnhanceRequest,
            domain::ai::dto::ReactionRequest,
            domain::ai::dto::CatchSize,
            domain::ai::dto::PromptEnhanceResult,
            domain::ai::dto::ReactionResult,
            domain::ai::dto::PromptEnhanceResponse,
            domain::ai::dto::ReactionResponse,
            domain::health::dto::HealthStatus,
            domain::health::dto::HealthState,
            domain::health::dto::HealthChecks,
            domain::health::dto::CheckResult,
            response::ErrorResponse,
        )
    ),
    tags(
        (name = "AI", description = "프롬프트 변환 / 리액션 생성 API"),
        (name = "Health", description = "서버 상태 확인 API")
    )
)]
pub struct ApiDoc;

/// 애플리케이션 라우터 구성
pub fn app(state: AppState) -> Router {
    // /api/ai/* 에만 비밀 키 인증 적용
    let ai_routes = Router::new()
        .route(
            "/api/ai/prompt/enhance",
            post(domain::ai::handler::enhance_prompt_handler),
        )
        .route("/api/ai/reaction", post(domain::ai::handler::reaction_handler))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            global::middleware::require_api_key,
        ));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(domain::health::handler::health_check))
        .merge(ai_routes)
        .layer(axum_middleware::from_fn(
            global::middleware::request_id_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .with_state(state)
}

/// Unity 클라이언트는 origin이 null이므로 모든 origin을 허용
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// 테스트용 라우터 생성
///
/// 실제 백엔드 대신 Mock AiBackend를 주입한 전체 라우터를 반환합니다.
pub fn create_test_router_with_mock(
    secret_key: &str,
    backend: impl AiBackend + 'static,
) -> Router {
    let config = AppConfig {
        port: 0,
        api_secret_key: secret_key.to_string(),
        openai_api_key: "test-key".to_string(),
        openai_api_base: None,
        openai_model: "gpt-4o-mini".to_string(),
    };

    let backend: SharedAiBackend = Arc::new(backend);
    let state = AppState {
        ai_service: AiService::new(backend.clone()),
        health_service: HealthService::new(backend),
        config,
    };

    app(state)
}
