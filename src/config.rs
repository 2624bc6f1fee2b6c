use std::env;

/// 애플리케이션 설정
///
/// 환경 변수에서 로드되며, 필수 키가 없으면 서버를 시작하지 않습니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 서버 포트 (Cloud Run 호환을 위해 `PORT` 사용, 기본 8000)
    pub port: u16,
    /// `/api/ai/*` 요청 인증용 비밀 키
    pub api_secret_key: String,
    /// 외부 생성 모델 API 키
    pub openai_api_key: String,
    /// OpenAI 호환 백엔드 주소 (미설정 시 기본 엔드포인트)
    pub openai_api_base: Option<String>,
    /// 사용할 채팅 모델 이름
    pub openai_model: String,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let api_secret_key =
            env::var("API_SECRET_KEY").map_err(|_| ConfigError::MissingSecretKey)?;
        if api_secret_key.is_empty() {
            return Err(ConfigError::MissingSecretKey);
        }

        let openai_api_key =
            env::var("OPENAI_API_KEY").map_err(|_| ConfigError::MissingOpenAiKey)?;
        if openai_api_key.is_empty() {
            return Err(ConfigError::MissingOpenAiKey);
        }

        let openai_api_base = env::var("OPENAI_API_BASE").ok().filter(|v| !v.is_empty());

        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        Ok(Self {
            port,
            api_secret_key,
            openai_api_key,
            openai_api_base,
            openai_model,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number")]
    InvalidPort,
    #[error("API_SECRET_KEY environment variable is required")]
    MissingSecretKey,
    #[error("OPENAI_API_KEY environment variable is required")]
    MissingOpenAiKey,
}
