//! IMDB 管理后台前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义与守卫裁决（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `session`: 会话令牌管理
//! - `api`: REST 网关与资源客户端
//! - `controller`: 表单-列表页面与认证表单的状态机
//! - `components`: UI 组件层

mod api;
mod components {
    pub mod auth_card;
    pub mod dashboard;
    mod form;
    pub mod header;
    pub mod movies;
    pub mod people;
    pub mod sign_in;
    pub mod sign_up;
    pub mod welcome;
}
mod config;
mod controller;
mod error;
mod session;

pub use config::AppConfig;

use crate::api::{ApiClient, FetchTransport};
use crate::components::dashboard::DashboardPage;
use crate::components::header::with_header;
use crate::components::movies::MoviesPage;
use crate::components::people::{ActorsPage, ProducersPage};
use crate::components::sign_in::SignInPage;
use crate::components::sign_up::SignUpPage;
use crate::components::welcome::WelcomePage;
use crate::session::{BrowserTokenStore, SessionContext};

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub mod web {
    pub mod console;
    pub mod route;
    pub mod router;
    mod storage;

    pub use console::MakeConsoleWriter;
    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Welcome => view! { <WelcomePage /> }.into_any(),
        AppRoute::SignIn => view! { <SignInPage /> }.into_any(),
        AppRoute::SignUp => view! { <SignUpPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Movies => view! { <MoviesPage /> }.into_any(),
        AppRoute::Actors => view! { <ActorsPage /> }.into_any(),
        AppRoute::Producers => view! { <ProducersPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    tracing::info!(api = %config.api_base_url, "starting IMDB admin");

    // 1. 创建会话上下文并从 LocalStorage 恢复令牌
    let session = SessionContext::new(BrowserTokenStore::new(config.token_storage_key.clone()));
    session.initialize();
    provide_context(session);

    // 2. API 客户端从会话读取令牌
    provide_context(ApiClient::new(config.api_base_url, session, FetchTransport));

    // 3. 认证状态信号注入路由服务
    let is_authenticated = session.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher layout=with_header />
        </Router>
    }
}
