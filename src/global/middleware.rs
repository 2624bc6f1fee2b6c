use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// 요청별 추적 ID를 부여하고 처리 결과를 로깅하는 미들웨어
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %path,
    );

    let start = std::time::Instant::now();

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;
        let status = response.status().as_u16();

        info!(
            duration_ms = duration_ms,
            status = status,
            method = %method,
            path = %path,
            "request completed"
        );

        response.headers_mut().insert(
            "x-request-id",
            request_id
                .parse()
                .unwrap_or_else(|_| axum::http::HeaderValue::from_static("unknown")),
        );
        response
    }
    .instrument(span)
    .await
}

/// `/api/ai/*` 경로의 Bearer 토큰 인증 미들웨어
///
/// `Authorization: Bearer <key>` 헤더를 `API_SECRET_KEY`와 비교합니다.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::InvalidSecretKey)?;

    let provided = strip_bearer_scheme(header).ok_or(AppError::InvalidSecretKey)?;

    verify_secret_key(state.config.api_secret_key.as_bytes(), provided.as_bytes())?;

    Ok(next.run(request).await)
}

/// `Bearer` 스킴 접두사를 제거. 스킴 토큰은 대소문자를 구분하지 않는다 (RFC 7235)
fn strip_bearer_scheme(header: &str) -> Option<&str> {
    let (scheme, rest) = header.split_once(' ')?;

    scheme
        .eq_ignore_ascii_case("Bearer")
        .then_some(rest.trim_start())
}

/// 타이밍 공격을 막기 위해 상수 시간 비교를 사용한 비밀 키 검증
fn verify_secret_key(expected: &[u8], provided: &[u8]) -> Result<(), AppError> {
    let length_matches = expected.len() == provided.len();

    // 길이가 달라도 비교 시간이 키 내용에 의존하지 않도록 공통 길이만큼 비교
    let min_len = std::cmp::min(expected.len(), provided.len());
    let content_matches = expected[..min_len].ct_eq(&provided[..min_len]).unwrap_u8() == 1;

    if !length_matches || !content_matches {
        tracing::warn!(
            event = "invalid_secret_key_attempt",
            "Invalid secret key attempt detected"
        );
        return Err(AppError::InvalidSecretKey);
    }

    Ok(())
}
