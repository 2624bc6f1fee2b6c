use axum::{extract::State, response::IntoResponse, Json};

use super::dto::{
    PromptEnhanceRequest, PromptEnhanceResponse, PromptEnhanceResult, ReactionRequest,
    ReactionResponse, ReactionResult,
};
use crate::error::AppError;
use crate::global::extractor::ValidatedJson;
use crate::response::{BaseResponse, ErrorResponse};
use crate::state::AppState;

/// 이미지 프롬프트 변환 API
///
/// 자유 형식 설명을 쉼표로 구분된 영어 키워드 프롬프트로 변환합니다.
#[utoipa::path(
    post,
    path = "/api/ai/prompt/enhance",
    tag = "AI",
    request_body = PromptEnhanceRequest,
    responses(
        (status = 200, description = "변환 성공", body = PromptEnhanceResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 503, description = "외부 생성 API 장애", body = ErrorResponse)
    )
)]
pub async fn enhance_prompt_handler(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PromptEnhanceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let enhanced_prompt = state.ai_service.enhance_prompt(&req.description).await?;

    Ok(Json(BaseResponse::success(PromptEnhanceResult {
        description: req.description,
        enhanced_prompt,
    })))
}

/// 리액션 생성 API
///
/// 낚시 상황 레코드에 대한 캐릭터의 한 마디를 생성합니다.
#[utoipa::path(
    post,
    path = "/api/ai/reaction",
    tag = "AI",
    request_body = ReactionRequest,
    responses(
        (status = 200, description = "생성 성공", body = ReactionResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 503, description = "외부 생성 API 장애", body = ErrorResponse)
    )
)]
pub async fn reaction_handler(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ReactionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let reaction = state.ai_service.generate_reaction(&req).await?;

    Ok(Json(BaseResponse::success(ReactionResult { reaction })))
}
