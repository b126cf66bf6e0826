use leptos::prelude::*;

use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();

    // 清除会话后由路由服务负责跳转
    let on_sign_out = move |_| session.clear();

    view! {
        <div class="navbar bg-neutral text-neutral-content rounded-box shadow-xl">
            <div class="flex-1">
                <span class="text-xl font-bold px-2">"IMDB Clone"</span>
            </div>
            <div class="flex-none gap-2">
                <ul class="menu menu-horizontal px-1">
                    {AppRoute::NAVIGATION
                        .into_iter()
                        .map(|route| {
                            view! {
                                <li>
                                    <Link to=route class="hover:underline">{route.label()}</Link>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button class="btn btn-outline btn-error btn-sm" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </div>
        </div>
    }
}

/// 受保护页面的布局：页头 + 内容
pub fn with_header(page: AnyView) -> AnyView {
    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-8">
                <Header />
                {page}
            </div>
        </div>
    }
    .into_any()
}
