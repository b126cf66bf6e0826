//! 会话模块
//!
//! 管理唯一的会话令牌，与路由系统和 API 客户端解耦：
//! - 路由服务通过注入的认证信号检查会话有效性
//! - API 客户端在每次请求时读取当前令牌
//!
//! 生命周期显式：`initialize`（从持久化存储恢复）→ `establish`（登录成功）→ `clear`（注销）。

use std::sync::Arc;

use leptos::prelude::*;

use crate::web::LocalStorage;

/// 令牌的持久化后端
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// 浏览器 LocalStorage 后端
pub struct BrowserTokenStore {
    key: String,
}

impl BrowserTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::get(&self.key)
    }

    fn save(&self, token: &str) {
        if !LocalStorage::set(&self.key, token) {
            tracing::warn!(key = %self.key, "could not persist session token");
        }
    }

    fn clear(&self) {
        LocalStorage::remove(&self.key);
    }
}

/// 会话上下文
///
/// 包含令牌信号与持久化后端，`Copy` 以便在组件和闭包间传递。
#[derive(Clone, Copy)]
pub struct SessionContext {
    token: RwSignal<Option<String>>,
    store: StoredValue<Arc<dyn TokenStore>>,
}

impl SessionContext {
    /// 创建新的会话上下文（尚未从存储恢复）
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            token: RwSignal::new(None),
            store: StoredValue::new(Arc::new(store) as Arc<dyn TokenStore>),
        }
    }

    /// 从持久化存储恢复令牌
    pub fn initialize(&self) {
        let stored = self.store.with_value(|s| s.load());
        self.token.set(stored.filter(|t| !t.trim().is_empty()));
    }

    /// 登录成功后保存令牌
    pub fn establish(&self, token: String) {
        self.store.with_value(|s| s.save(&token));
        self.token.set(Some(token));
        tracing::info!("session established");
    }

    /// 注销并清除令牌
    ///
    /// 导航将由路由服务的认证状态监听自动处理。
    pub fn clear(&self) {
        self.store.with_value(|s| s.clear());
        self.token.set(None);
        tracing::info!("session cleared");
    }

    /// 当前令牌（不追踪依赖）
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// 会话有效性判定
    ///
    /// 客户端无法校验签名或过期时间，只要存在非空令牌即视为有效。
    pub fn is_valid(&self) -> bool {
        self.token
            .with_untracked(|t| t.as_deref().is_some_and(|t| !t.trim().is_empty()))
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let token = self.token;
        Signal::derive(move || token.with(|t| t.as_deref().is_some_and(|t| !t.trim().is_empty())))
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// 内存后端，供测试使用
#[cfg(test)]
#[derive(Default, Clone)]
pub struct MemoryTokenStore {
    inner: Arc<std::sync::Mutex<Option<String>>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.save(token);
        store
    }

    pub fn stored(&self) -> Option<String> {
        self.inner.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.stored()
    }

    fn save(&self, token: &str) {
        *self.inner.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.inner.lock().unwrap() = None;
    }
}
