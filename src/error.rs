use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
///
/// 모든 핸들러와 서비스는 이 타입으로 실패를 표현하며,
/// `IntoResponse` 구현을 통해 공통 에러 응답 형식으로 변환됩니다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 요청 필드 누락 또는 형식 오류
    #[error("잘못된 요청입니다: {0}")]
    InvalidInput(String),

    /// JSON 본문 파싱 실패
    #[error("잘못된 요청 형식입니다: {0}")]
    JsonParseFailed(String),

    /// API 비밀 키 불일치 또는 누락
    #[error("유효하지 않은 비밀 키입니다.")]
    InvalidSecretKey,

    /// 외부 생성 모델 호출 실패 (에러 또는 타임아웃)
    #[error("외부 생성 API 호출에 실패했습니다: {0}")]
    UpstreamUnavailable(String),

    /// 서버 내부 에러
    #[error("서버 내부 에러: {0}")]
    Internal(String),
}

impl AppError {
    /// 에러 코드 반환
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "COMMON400",
            AppError::JsonParseFailed(_) => "COMMON400",
            AppError::InvalidSecretKey => "AI_001",
            AppError::UpstreamUnavailable(_) => "AI_003",
            AppError::Internal(_) => "COMMON500",
        }
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::JsonParseFailed(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidSecretKey => StatusCode::UNAUTHORIZED,
            AppError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        match &self {
            AppError::Internal(_) => {
                error!("Internal Server Error: {}", message);
            }
            AppError::UpstreamUnavailable(_) => {
                error!("Upstream Unavailable: {}", message);
            }
            _ => {
                error!("Error [{}]: {}", error_code, message);
            }
        }

        let error_response = ErrorResponse::new(error_code, message);

        (status, Json(error_response)).into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.to_string())
    }
}
