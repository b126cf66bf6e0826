//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 每次导航（初次加载、`navigate`、浏览器前进/后退）都先经过 [`resolve`] 裁决。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, RouteDecision, resolve};

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, use_push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if use_push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if result.is_err() {
        tracing::warn!(path, "history update rejected");
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 认证状态以信号形式注入，与会话模块解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let (current_route, set_route) = signal(AppRoute::default());
        let router = Self {
            current_route,
            set_route,
            is_authenticated,
        };

        // 初次加载同样经过守卫，重定向时替换而不是新增历史记录
        router.apply(AppRoute::from_path(&current_path()), None);
        router
    }

    /// 当前路由的守卫裁决（追踪路由与认证状态）
    pub fn decision(&self) -> RouteDecision {
        resolve(self.current_route.get(), self.is_authenticated.get())
    }

    /// **核心方法：导航与守卫**
    pub fn navigate_to(&self, target: AppRoute) {
        self.apply(target, Some(true));
    }

    /// 裁决并落地一次导航
    ///
    /// `history`: `Some(true)` push，`Some(false)` replace，`None` 只在重定向时 replace。
    fn apply(&self, target: AppRoute, history: Option<bool>) {
        let is_auth = self.is_authenticated.get_untracked();

        let route = match resolve(target, is_auth) {
            RouteDecision::Redirect(redirect) => {
                tracing::info!(from = %target, to = %redirect, "access denied, redirecting");
                write_history(redirect.to_path(), history.unwrap_or(false));
                redirect
            }
            RouteDecision::Render { route, .. } => {
                if let Some(use_push) = history {
                    write_history(route.to_path(), use_push);
                }
                route
            }
        };

        tracing::debug!(%route, "route changed");
        self.set_route.set(route);
    }

    /// 浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            router.apply(AppRoute::from_path(&current_path()), None);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话被清除时离开受保护页面
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();

            if !is_auth && route.requires_auth() {
                tracing::info!(%route, "session ended, redirecting to sign in");
                router.apply(route, Some(true));
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    expect_context::<RouterService>()
}

/// 导航函数（返回一个可调用的闭包）
pub fn use_navigate() -> impl Fn(AppRoute) + Clone + Send + Sync + 'static {
    let router = use_router();
    move |to: AppRoute| router.navigate_to(to)
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 按守卫裁决组合页面与布局
///
/// 需要页头的页面再套一层布局；重定向裁决不渲染任何内容。
fn compose<V>(
    decision: RouteDecision,
    matcher: impl FnOnce(AppRoute) -> V,
    layout: impl FnOnce(V) -> V,
) -> Option<V> {
    match decision {
        RouteDecision::Render {
            route,
            with_header: true,
        } => Some(layout(matcher(route))),
        RouteDecision::Render { route, .. } => Some(matcher(route)),
        RouteDecision::Redirect(_) => None,
    }
}

/// 路由出口组件
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
    /// 带页头的布局
    layout: fn(AnyView) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || compose(router.decision(), matcher, layout)
}

/// 站内链接，拦截点击改为路由导航
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(route: AppRoute, authenticated: bool) -> Option<String> {
        compose(
            resolve(route, authenticated),
            |r| r.to_path().to_string(),
            |page| format!("header+{page}"),
        )
    }

    #[test]
    fn gated_page_without_session_renders_nothing() {
        for route in [
            AppRoute::Dashboard,
            AppRoute::Movies,
            AppRoute::Actors,
            AppRoute::Producers,
        ] {
            assert_eq!(render(route, false), None, "{route}");
        }
    }

    #[test]
    fn gated_page_with_session_is_wrapped_in_header() {
        assert_eq!(render(AppRoute::Movies, true).as_deref(), Some("header+/movies"));
        assert_eq!(render(AppRoute::Actors, true).as_deref(), Some("header+/actors"));
    }

    #[test]
    fn auth_pages_never_get_the_header() {
        for authenticated in [false, true] {
            assert_eq!(render(AppRoute::SignIn, authenticated).as_deref(), Some("/signin"));
            assert_eq!(render(AppRoute::SignUp, authenticated).as_deref(), Some("/signup"));
        }
        assert_eq!(render(AppRoute::Welcome, false).as_deref(), Some("/"));
    }
}
