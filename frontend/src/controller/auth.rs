//! 登录 / 注册表单状态

use leptos::prelude::*;

use crate::api::{AuthApi, Transport};
use crate::web::route::AppRoute;

/// 认证表单
///
/// 不做客户端校验，服务端返回的错误信息原样展示。
#[derive(Clone, Copy)]
pub struct AuthForm {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub busy: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthForm {
    pub fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            busy: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    fn begin(&self) -> (String, String) {
        self.busy.set(true);
        self.error.set(None);
        (self.email.get_untracked(), self.password.get_untracked())
    }

    /// 登录成功后建立会话，返回应跳转的路由
    pub async fn sign_in<T: Transport>(&self, auth: &AuthApi<T>) -> Option<AppRoute> {
        let (email, password) = self.begin();

        let next = match auth.signin(&email, &password).await {
            Ok(resp) => {
                auth.api().session().establish(resp.token);
                Some(AppRoute::auth_success_redirect())
            }
            Err(err) => {
                tracing::error!(error = %err, "sign in failed");
                self.error.set(Some(err.user_message()));
                None
            }
        };

        self.busy.set(false);
        next
    }

    /// 注册成功后不自动登录，返回登录页
    pub async fn sign_up<T: Transport>(&self, auth: &AuthApi<T>) -> Option<AppRoute> {
        let (email, password) = self.begin();

        let next = match auth.signup(&email, &password).await {
            Ok(()) => {
                tracing::info!(%email, "account created");
                Some(AppRoute::sign_up_success_redirect())
            }
            Err(err) => {
                tracing::error!(error = %err, "sign up failed");
                self.error.set(Some(err.user_message()));
                None
            }
        };

        self.busy.set(false);
        next
    }
}
