//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、守卫规则以及页头的显示规则。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// 欢迎页 (默认路由)
    #[default]
    Welcome,
    SignIn,
    SignUp,
    /// 控制面板 (需要认证)
    Dashboard,
    Movies,
    Actors,
    Producers,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 页头导航中出现的路由，按显示顺序
    pub const NAVIGATION: [AppRoute; 4] = [
        AppRoute::Dashboard,
        AppRoute::Movies,
        AppRoute::Actors,
        AppRoute::Producers,
    ];

    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        // 忽略查询串、片段以及末尾的斜杠
        let path = path.split(&['?', '#'][..]).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        match path {
            "/" => Self::Welcome,
            "/signin" => Self::SignIn,
            "/signup" => Self::SignUp,
            "/dashboard" => Self::Dashboard,
            "/movies" => Self::Movies,
            "/actors" => Self::Actors,
            "/producers" => Self::Producers,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Welcome => "/",
            Self::SignIn => "/signin",
            Self::SignUp => "/signup",
            Self::Dashboard => "/dashboard",
            Self::Movies => "/movies",
            Self::Actors => "/actors",
            Self::Producers => "/producers",
            Self::NotFound => "/404",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
            Self::Dashboard => "Dashboard",
            Self::Movies => "Movies",
            Self::Actors => "Actors",
            Self::Producers => "Producers",
            Self::NotFound => "Not Found",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Movies | Self::Actors | Self::Producers
        )
    }

    /// 是否包裹在带页头的布局中
    ///
    /// 登录/注册页永远不显示页头；欢迎页与 404 也不在布局内。
    pub fn shows_header(&self) -> bool {
        self.requires_auth()
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::SignIn
    }

    /// 登录成功后的目标
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }

    /// 注册成功后的目标（不自动登录）
    pub fn sign_up_success_redirect() -> Self {
        Self::SignIn
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// 守卫对一次导航请求的裁决
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// 渲染目标页面
    Render { route: AppRoute, with_header: bool },
    /// 不渲染，跳转到另一个路由
    Redirect(AppRoute),
}

/// 根据当前会话是否有效裁决目标路由
pub fn resolve(route: AppRoute, is_authenticated: bool) -> RouteDecision {
    if route.requires_auth() && !is_authenticated {
        return RouteDecision::Redirect(AppRoute::auth_failure_redirect());
    }
    RouteDecision::Render {
        route,
        with_header: route.shows_header(),
    }
}
