use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 이미지 프롬프트 변환 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptEnhanceRequest {
    /// 자유 형식 설명 (한국어 또는 영어, 1 ~ 2000자)
    #[validate(length(
        min = 1,
        max = 2000,
        message = "설명은 1자 이상 2000자 이하여야 합니다"
    ))]
    #[schema(example = "파란 비늘이 반짝이는 작은 물고기")]
    pub description: String,
}

/// 잡힌 것의 크기 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum CatchSize {
    Small,
    Medium,
    Large,
}

impl CatchSize {
    /// 리액션 프롬프트에 들어가는 한국어 표기
    pub fn to_korean(self) -> &'static str {
        match self {
            CatchSize::Small => "소형",
            CatchSize::Medium => "중형",
            CatchSize::Large => "대형",
        }
    }
}

/// 리액션 생성 요청 DTO
///
/// 낚시 상황을 구성하는 5개 필드이며 모두 필수입니다.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReactionRequest {
    /// 낚시 장소
    #[validate(length(min = 1, message = "장소는 필수입니다"))]
    #[schema(example = "호수")]
    pub location: String,

    /// 캐릭터 (유형/특성: 인간, 로봇, 고양이, 개, 드래곤, 요정)
    #[validate(length(min = 1, message = "캐릭터는 필수입니다"))]
    #[schema(example = "드래곤")]
    pub character: String,

    /// 배 (상태/종류)
    #[validate(length(min = 1, message = "배 정보는 필수입니다"))]
    #[schema(example = "작은 나무배")]
    pub boat: String,

    /// 잡힌 것 (물고기가 아닐 수도 있음)
    #[validate(length(min = 1, message = "물고기 정보는 필수입니다"))]
    #[schema(example = "금화")]
    pub fish: String,

    /// 크기 (SMALL / MEDIUM / LARGE)
    pub size: CatchSize,
}

/// 이미지 프롬프트 변환 결과
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptEnhanceResult {
    /// 원본 설명
    pub description: String,

    /// 변환된 Stable Diffusion 스타일 프롬프트 (쉼표로 구분된 영어 키워드)
    #[schema(example = "small fish, shiny blue scales, pixel art style")]
    pub enhanced_prompt: String,
}

/// 리액션 생성 결과
#[derive(Debug, Serialize, ToSchema)]
pub struct ReactionResult {
    /// 캐릭터의 한 마디 (따옴표 없는 한 줄)
    #[schema(example = "내 금화다, 아무도 건드리지 마!")]
    pub reaction: String,
}

/// 이미지 프롬프트 변환 성공 응답 (OpenAPI 스키마용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptEnhanceResponse {
    #[schema(example = true)]
    pub is_success: bool,
    #[schema(example = "COMMON200")]
    pub code: String,
    #[schema(example = "성공입니다.")]
    pub message: String,
    pub result: PromptEnhanceResult,
}

/// 리액션 생성 성공 응답 (OpenAPI 스키마용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReactionResponse {
    #[schema(example = true)]
    pub is_success: bool,
    #[schema(example = "COMMON200")]
    pub code: String,
    #[schema(example = "성공입니다.")]
    pub message: String,
    pub result: ReactionResult,
}
