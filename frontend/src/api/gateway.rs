//! API 网关客户端
//!
//! 所有出站请求的唯一出口：拼接基础 URL、附加 Bearer 令牌、
//! 统一解析成功响应并把失败归一为 [`ApiError`]。不做重试、缓存或限流。

use imdb_admin_shared::{ApiRequest, BEARER_PREFIX, HEADER_AUTHORIZATION, HttpMethod};
use leptos::prelude::expect_context;
use serde::{Serialize, de::DeserializeOwned};

use super::transport::{FetchTransport, HttpRequest, Transport};
use crate::error::ApiError;
use crate::session::SessionContext;

#[derive(Clone)]
pub struct ApiClient<T = FetchTransport> {
    base_url: String,
    session: SessionContext,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, session: SessionContext, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            session,
            transport,
        }
    }

    pub fn session(&self) -> SessionContext {
        self.session
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送请求并解析 2xx 响应体
    ///
    /// 空响应体按 JSON `null` 解析，因此 `()` 与 `IgnoredAny` 响应总能成功。
    pub async fn request<B, R>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        let mut req = HttpRequest::new(&url, method);

        if let Some(token) = self.session.token() {
            req = req.with_header(HEADER_AUTHORIZATION, &format!("{BEARER_PREFIX}{token}"));
        }

        if let Some(body) = body {
            let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
            req = req
                .with_header("Content-Type", "application/json")
                .with_body(json);
        }

        tracing::debug!(method = method.as_str(), %url, "sending request");
        let resp = self.transport.send(req).await?;

        if !resp.is_success() {
            let err = ApiError::from_status(resp.status, &resp.body);
            tracing::debug!(method = method.as_str(), %url, error = %err, "request rejected");
            return Err(err);
        }

        let text = if resp.body.trim().is_empty() {
            "null"
        } else {
            resp.body.as_str()
        };
        serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 发送一个在类型上声明了路径与方法的请求
    pub async fn send<Q: ApiRequest>(&self, req: &Q) -> Result<Q::Response, ApiError> {
        self.request(Q::METHOD, Q::PATH, Some(req)).await
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<(), R>(HttpMethod::Get, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.request(HttpMethod::Post, path, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.request(HttpMethod::Put, path, Some(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<(), R>(HttpMethod::Delete, path, None).await
    }
}

/// 从 Context 获取生产环境的 API 客户端
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}
