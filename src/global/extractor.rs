use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON 역직렬화와 `validator` 검증을 한 번에 수행하는 Extractor
///
/// 파싱 실패와 검증 실패 모두 `COMMON400` 에러 응답으로 변환됩니다.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(AppError::from)?;

        value
            .validate()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        Ok(Self(value))
    }
}
