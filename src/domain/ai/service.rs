use tracing::debug;

use super::client::{GenerationOptions, SharedAiBackend};
use super::dto::ReactionRequest;
use super::prompt::{self, reaction};
use super::sanitize;
use crate::error::AppError;

/// AI 릴레이 서비스
///
/// 요청 유형에 맞는 템플릿을 골라 백엔드에 전달하고,
/// 응답에서 래핑만 제거해 돌려줍니다. 상태를 유지하지 않습니다.
#[derive(Clone)]
pub struct AiService {
    backend: SharedAiBackend,
}

impl AiService {
    pub fn new(backend: SharedAiBackend) -> Self {
        Self { backend }
    }

    /// 자유 형식 설명을 Stable Diffusion 스타일 프롬프트로 변환
    pub async fn enhance_prompt(&self, description: &str) -> Result<String, AppError> {
        let raw = self
            .backend
            .generate(
                prompt::ENHANCER_SYSTEM_PROMPT.to_string(),
                description.to_string(),
                GenerationOptions::ENHANCE,
            )
            .await?;

        let enhanced = sanitize::strip_wrapping(&raw);
        if enhanced.is_empty() {
            return Err(AppError::UpstreamUnavailable(
                "생성 모델이 빈 응답을 반환했습니다".to_string(),
            ));
        }

        debug!(enhanced = %enhanced, "prompt enhanced");
        Ok(enhanced)
    }

    /// 낚시 상황에 대한 캐릭터 리액션 생성
    pub async fn generate_reaction(&self, req: &ReactionRequest) -> Result<String, AppError> {
        let raw = self
            .backend
            .generate(
                prompt::REACTION_SYSTEM_PROMPT.to_string(),
                reaction::situation_prompt(req),
                GenerationOptions::REACTION,
            )
            .await?;

        let cleaned = sanitize::clean_reaction(&raw);
        if cleaned.is_empty() {
            return Err(AppError::UpstreamUnavailable(
                "생성 모델이 빈 응답을 반환했습니다".to_string(),
            ));
        }

        debug!(reaction = %cleaned, "reaction generated");
        Ok(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ai::client::MockAiBackend;
    use crate::domain::ai::dto::CatchSize;

    fn reaction_request() -> ReactionRequest {
        ReactionRequest {
            location: "호수".to_string(),
            character: "드래곤".to_string(),
            boat: "작은 나무배".to_string(),
            fish: "금화".to_string(),
            size: CatchSize::Large,
        }
    }

    #[tokio::test]
    async fn enhance_prompt_should_use_enhancer_template() {
        // Arrange
        let mut mock = MockAiBackend::new();
        mock.expect_generate()
            .withf(|system, user, options| {
                system.as_str() == prompt::ENHANCER_SYSTEM_PROMPT
                    && user.as_str() == "파란 물고기"
                    && *options == GenerationOptions::ENHANCE
            })
            .times(1)
            .returning(|_, _, _| Ok("blue fish, shiny scales, pixel art".to_string()));
        let service = AiService::new(Arc::new(mock));

        // Act
        let result = service.enhance_prompt("파란 물고기").await.unwrap();

        // Assert
        assert_eq!(result, "blue fish, shiny scales, pixel art");
    }

    #[tokio::test]
    async fn enhance_prompt_should_strip_wrapping_from_output() {
        // Arrange
        let mut mock = MockAiBackend::new();
        mock.expect_generate()
            .returning(|_, _, _| Ok("```\nblue fish, pixel art\n```".to_string()));
        let service = AiService::new(Arc::new(mock));

        // Act
        let result = service.enhance_prompt("파란 물고기").await.unwrap();

        // Assert
        assert_eq!(result, "blue fish, pixel art");
    }

    #[tokio::test]
    async fn enhance_prompt_should_fail_on_empty_output() {
        // Arrange
        let mut mock = MockAiBackend::new();
        mock.expect_generate().returning(|_, _, _| Ok("   ".to_string()));
        let service = AiService::new(Arc::new(mock));

        // Act
        let result = service.enhance_prompt("파란 물고기").await;

        // Assert
        assert!(matches!(result, Err(AppError::UpstreamUnavailable(_))));
    }

    #[tokio::test]
    async fn enhance_prompt_should_propagate_upstream_error() {
        // Arrange
        let mut mock = MockAiBackend::new();
        mock.expect_generate()
            .returning(|_, _, _| Err(AppError::UpstreamUnavailable("timeout".to_string())));
        let service = AiService::new(Arc::new(mock));

        // Act
        let result = service.enhance_prompt("파란 물고기").await;

        // Assert
        assert!(matches!(result, Err(AppError::UpstreamUnavailable(_))));
    }

    #[tokio::test]
    async fn generate_reaction_should_use_reaction_template_and_situation() {
        // Arrange
        let mut mock = MockAiBackend::new();
        mock.expect_generate()
            .withf(|system, user, options| {
                system.as_str() == prompt::REACTION_SYSTEM_PROMPT
                    && user.contains("캐릭터: 드래곤")
                    && user.contains("크기: 대형")
                    && *options == GenerationOptions::REACTION
            })
            .times(1)
            .returning(|_, _, _| Ok("내 금화다, 아무도 건드리지 마!".to_string()));
        let service = AiService::new(Arc::new(mock));

        // Act
        let result = service.generate_reaction(&reaction_request()).await.unwrap();

        // Assert
        assert_eq!(result, "내 금화다, 아무도 건드리지 마!");
    }

    #[tokio::test]
    async fn generate_reaction_should_strip_surrounding_quotes() {
        // Arrange
        let mut mock = MockAiBackend::new();
        mock.expect_generate()
            .returning(|_, _, _| Ok("\"월척이다, 오늘 저녁은 푸짐하겠어!\"".to_string()));
        let service = AiService::new(Arc::new(mock));

        // Act
        let result = service.generate_reaction(&reaction_request()).await.unwrap();

        // Assert
        assert!(!result.starts_with('"'));
        assert!(!result.ends_with('"'));
        assert_eq!(result, "월척이다, 오늘 저녁은 푸짐하겠어!");
    }

    #[tokio::test]
    async fn generate_reaction_should_return_single_line() {
        // Arrange
        let mut mock = MockAiBackend::new();
        mock.expect_generate()
            .returning(|_, _, _| Ok("크기 측정 완료, 대형 개체 확인\n분석 종료".to_string()));
        let service = AiService::new(Arc::new(mock));

        // Act
        let result = service.generate_reaction(&reaction_request()).await.unwrap();

        // Assert
        assert!(!result.contains('\n'));
        assert_eq!(result, "크기 측정 완료, 대형 개체 확인");
    }

    #[tokio::test]
    async fn generate_reaction_should_fail_on_empty_output() {
        // Arrange
        let mut mock = MockAiBackend::new();
        mock.expect_generate().returning(|_, _, _| Ok(String::new()));
        let service = AiService::new(Arc::new(mock));

        // Act
        let result = service.generate_reaction(&reaction_request()).await;

        // Assert
        assert!(matches!(result, Err(AppError::UpstreamUnavailable(_))));
    }
}
