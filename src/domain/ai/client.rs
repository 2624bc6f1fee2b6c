use std::sync::Arc;
use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};

use crate::config::AppConfig;
use crate::error::AppError;

/// 생성 모델 호출 타임아웃 (초)
const UPSTREAM_TIMEOUT_SECS: u64 = 25;

/// 호출별 생성 파라미터
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_tokens: u16,
}

impl GenerationOptions {
    /// 이미지 프롬프트 변환: 결정적인 출력을 위해 낮은 온도
    pub const ENHANCE: Self = Self {
        temperature: 0.1,
        max_tokens: 500,
    };

    /// 리액션 생성: 다양한 대사를 위해 높은 온도, 짧은 출력
    pub const REACTION: Self = Self {
        temperature: 1.0,
        max_tokens: 30,
    };
}

/// 생성 모델 백엔드 인터페이스
///
/// 외부 텍스트 생성 호출을 추상화하여 테스트에서 Mock 객체로 대체할 수 있습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AiBackend: Send + Sync {
    /// 시스템 템플릿과 사용자 입력으로 텍스트 완성 요청
    async fn generate(
        &self,
        system_prompt: String,
        user_content: String,
        options: GenerationOptions,
    ) -> Result<String, AppError>;

    /// API 연결 상태 확인 (모델 목록 조회)
    async fn check_connectivity(&self) -> Result<(), AppError>;
}

/// Arc로 래핑된 AiBackend (Clone 지원)
pub type SharedAiBackend = Arc<dyn AiBackend>;

/// 백엔드 에러를 AppError로 변환
///
/// 요청이 백엔드에 도달한 이후의 실패는 전부 UpstreamUnavailable로 취급합니다.
fn map_openai_error(error: OpenAIError) -> AppError {
    AppError::UpstreamUnavailable(error.to_string())
}

/// OpenAI 호환 API 클라이언트 구현체
#[derive(Clone)]
pub struct OpenAiBackend {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiBackend {
    pub fn new(config: &AppConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.openai_api_key.clone());
        if let Some(api_base) = &config.openai_api_base {
            openai_config = openai_config.with_api_base(api_base.clone());
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
        }
    }
}

#[async_trait::async_trait]
impl AiBackend for OpenAiBackend {
    async fn generate(
        &self,
        system_prompt: String,
        user_content: String,
        options: GenerationOptions,
    ) -> Result<String, AppError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_prompt)
                    .build()
                    .map_err(|e| AppError::Internal(e.to_string()))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_content)
                    .build()
                    .map_err(|e| AppError::Internal(e.to_string()))?
                    .into(),
            ])
            .temperature(options.temperature)
            .max_tokens(options.max_tokens)
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let response = tokio::time::timeout(
            Duration::from_secs(UPSTREAM_TIMEOUT_SECS),
            self.client.chat().create(request),
        )
        .await
        .map_err(|_| AppError::UpstreamUnavailable("응답 시간 초과".to_string()))?
        .map_err(map_openai_error)?;

        Ok(response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default())
    }

    async fn check_connectivity(&self) -> Result<(), AppError> {
        self.client
            .models()
            .list()
            .await
            .map_err(map_openai_error)?;
        Ok(())
    }
}
