//! Request Extractors
//!
//! 在边界处校验请求：请求体和路径参数解析失败统一转为 400 `ApiError`，
//! 而不是 axum 默认的纯文本拒绝响应

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts, HeaderValue},
    Form, Json,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::domain::item::ItemId;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// 写接口的请求体
///
/// 同时接受 `application/json` 与 `application/x-www-form-urlencoded`，
/// 媒体类型比较不区分大小写
#[derive(Debug)]
pub struct ItemPayload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ItemPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().to_ascii_lowercase().starts_with(FORM_CONTENT_TYPE))
            .unwrap_or(false);

        if is_form {
            // axum 的 Form 按字面前缀匹配，先规范成小写
            req.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(FORM_CONTENT_TYPE),
            );
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            return Ok(Self(value));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(Self(value))
    }
}

/// `/items/:id` 中的整数 ID
#[derive(Debug)]
pub struct ItemIdPath(pub ItemId);

#[async_trait]
impl<S> FromRequestParts<S> for ItemIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(Self(ItemId::new(id)))
    }
}
