//! 表单-列表页面控制器
//!
//! 演员、制片人、电影三个页面共享同一套交互：
//! 加载列表、编辑草稿、校验、提交新建/更新、删除后重新加载。
//! 页面之间的差异由 [`FormPage`] 与 [`EntityForm`] 描述。

mod auth;
pub mod movie;
pub mod person;
mod state;

#[cfg(test)]
mod tests;

pub use auth::AuthForm;
pub use person::PersonForm;
pub use state::{FieldErrors, PageState};

use imdb_admin_shared::{EntityId, Resource};
use leptos::prelude::*;

use crate::api::{ApiClient, FetchTransport, ResourceClient, Transport};
use crate::error::ApiError;

/// 页面表单草稿
///
/// 草稿以用户输入的原始文本保存，提交时才转换为类型化的载荷。
pub trait EntityForm: Clone + Default + PartialEq + Send + Sync + 'static {
    type Entity;
    type Create;
    type Update;

    /// 从已有实体复制出编辑草稿
    fn from_entity(entity: &Self::Entity) -> Self;

    /// 必填字段校验；返回空集合表示通过
    fn validate(&self) -> FieldErrors;

    fn to_create(&self) -> Result<Self::Create, FieldErrors>;

    fn to_update(&self) -> Result<Self::Update, FieldErrors>;
}

/// 一个表单-列表页面
#[async_trait::async_trait(?Send)]
pub trait FormPage: Resource {
    type Form: EntityForm<Entity = Self::Entity, Create = Self::Create, Update = Self::Update>;

    /// 表单下拉框等需要的附加数据
    type Lookups: Clone + Default + PartialEq + Send + Sync + 'static;

    /// 拉取页面所需的全部数据，任一请求失败即整体失败
    async fn load<T: Transport>(
        api: &ApiClient<T>,
    ) -> Result<(Vec<Self::Entity>, Self::Lookups), ApiError>;
}

/// 提交结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 服务端已接受，列表已重新加载
    Saved,
    /// 校验未通过，未发出请求
    Rejected,
    /// 请求失败，草稿保留
    Failed,
}

pub struct PageController<P: FormPage, T: Transport = FetchTransport> {
    client: StoredValue<ResourceClient<P, T>>,
    state: RwSignal<PageState<P>>,
}

impl<P: FormPage, T: Transport> Clone for PageController<P, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FormPage, T: Transport> Copy for PageController<P, T> {}

impl<P: FormPage, T: Transport> PageController<P, T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self {
            client: StoredValue::new(ResourceClient::new(api)),
            state: RwSignal::new(PageState::default()),
        }
    }

    pub fn state(&self) -> RwSignal<PageState<P>> {
        self.state
    }

    /// 校验草稿，不修改页面状态
    pub fn validate(form: &P::Form) -> FieldErrors {
        form.validate()
    }

    // --- 同步操作 ---

    pub fn edit(&self, f: impl FnOnce(&mut P::Form)) {
        self.state.update(|s| s.edit_form(f));
    }

    pub fn select_for_edit(&self, id: EntityId) {
        self.state.update(|s| {
            if !s.select_for_edit(id) {
                tracing::warn!(resource = P::NOUN, id, "selected item is not in the list");
            }
        });
    }

    pub fn cancel_edit(&self) {
        self.state.update(PageState::cancel_edit);
    }

    // --- 异步操作 ---

    /// 重新加载页面数据
    ///
    /// 只有最近一次发起的加载能写回状态；失败只记录日志并保留原列表。
    pub async fn load(&self) {
        let Some(client) = self.client.try_get_value() else {
            return;
        };
        let Some(ticket) = self.state.try_update(PageState::begin_load) else {
            return;
        };

        let result = P::load(client.api()).await;
        if let Err(err) = &result {
            tracing::error!(resource = P::COLLECTION, error = %err, "failed to load page data");
        }

        self.state.try_update(|s| {
            if !s.finish_load(ticket, result) {
                tracing::debug!(resource = P::COLLECTION, "dropped stale load response");
            }
        });
    }

    /// 根据当前草稿类型提交新建或更新
    pub async fn submit(&self) -> SubmitOutcome {
        let editing = self.state.try_with_untracked(PageState::is_editing);
        match editing {
            Some(true) => self.submit_update().await,
            Some(false) => self.submit_create().await,
            None => SubmitOutcome::Rejected,
        }
    }

    pub async fn submit_create(&self) -> SubmitOutcome {
        let Some(client) = self.client.try_get_value() else {
            return SubmitOutcome::Rejected;
        };
        let Some(Some(payload)) = self.state.try_update(PageState::prepare_create) else {
            return SubmitOutcome::Rejected;
        };

        match client.create(&payload).await {
            Ok(()) => {
                tracing::info!(resource = P::NOUN, "created");
                self.state.try_update(PageState::complete_create);
                self.load().await;
                SubmitOutcome::Saved
            }
            Err(err) => {
                tracing::error!(resource = P::NOUN, error = %err, "create failed");
                self.state.try_update(PageState::fail_submit);
                SubmitOutcome::Failed
            }
        }
    }

    pub async fn submit_update(&self) -> SubmitOutcome {
        let Some(client) = self.client.try_get_value() else {
            return SubmitOutcome::Rejected;
        };
        let Some(Some((id, payload))) = self.state.try_update(PageState::prepare_update) else {
            return SubmitOutcome::Rejected;
        };

        match client.update(id, &payload).await {
            Ok(()) => {
                tracing::info!(resource = P::NOUN, id, "updated");
                self.state.try_update(|s| s.complete_update(id));
                self.load().await;
                SubmitOutcome::Saved
            }
            Err(err) => {
                tracing::error!(resource = P::NOUN, id, error = %err, "update failed");
                self.state.try_update(PageState::fail_submit);
                SubmitOutcome::Failed
            }
        }
    }

    /// 删除后无论成败都重新加载
    pub async fn delete(&self, id: EntityId) {
        let Some(client) = self.client.try_get_value() else {
            return;
        };
        self.state.try_update(PageState::begin_delete);

        match client.delete(id).await {
            Ok(()) => tracing::info!(resource = P::NOUN, id, "deleted"),
            Err(err) => tracing::error!(resource = P::NOUN, id, error = %err, "delete failed"),
        }
        self.load().await;
    }
}
