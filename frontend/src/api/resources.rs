//! 实体资源客户端
//!
//! 每种资源只是领域操作到网关调用的薄映射：不校验、不重试、不整形。

use std::marker::PhantomData;

use imdb_admin_shared::protocol::{SigninRequest, SignupRequest};
use imdb_admin_shared::{Credentials, EntityId, Resource, SigninResponse};

use super::gateway::ApiClient;
use super::transport::{FetchTransport, Transport};
use crate::error::ApiError;

pub struct ResourceClient<R, T = FetchTransport> {
    api: ApiClient<T>,
    resource: PhantomData<fn() -> R>,
}

impl<R, T: Clone> Clone for ResourceClient<R, T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: Resource, T: Transport> ResourceClient<R, T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self {
            api,
            resource: PhantomData,
        }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// GET 集合并展开列表信封
    pub async fn fetch_all(&self) -> Result<Vec<R::Entity>, ApiError> {
        let list: R::List = self.api.get(R::COLLECTION).await?;
        Ok(list.into())
    }

    /// 写操作只关心状态码，响应体（实体、信封或空）一律忽略
    pub async fn create(&self, fields: &R::Create) -> Result<(), ApiError> {
        self.api
            .post::<_, serde::de::IgnoredAny>(R::COLLECTION, fields)
            .await
            .map(drop)
    }

    pub async fn update(&self, id: EntityId, fields: &R::Update) -> Result<(), ApiError> {
        self.api
            .put::<_, serde::de::IgnoredAny>(&R::item_path(id), fields)
            .await
            .map(drop)
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        self.api
            .delete::<serde::de::IgnoredAny>(&R::item_path(id))
            .await
            .map(drop)
    }
}

/// 认证资源
#[derive(Clone)]
pub struct AuthApi<T = FetchTransport> {
    api: ApiClient<T>,
}

impl<T: Transport> AuthApi<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub async fn signup(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let req = SignupRequest(credentials(email, password));
        self.api.send(&req).await.map(drop)
    }

    pub async fn signin(&self, email: &str, password: &str) -> Result<SigninResponse, ApiError> {
        let req = SigninRequest(credentials(email, password));
        self.api.send(&req).await
    }
}

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}
