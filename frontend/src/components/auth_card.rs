//! 登录 / 注册页共用的表单卡片

use leptos::prelude::*;

use crate::controller::AuthForm;

#[component]
pub fn AuthCard(
    title: &'static str,
    submit_label: &'static str,
    busy_label: &'static str,
    form: AuthForm,
    /// 表单提交回调
    on_submit: Callback<()>,
    /// 卡片底部内容（切换到另一个认证页的链接）
    children: Children,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=handle_submit>
                        <h2 class="text-3xl font-bold text-center mb-2">{title}</h2>

                        {move || {
                            form.error
                                .get()
                                .map(|msg| {
                                    view! {
                                        <div role="alert" class="alert alert-error text-sm py-2">
                                            <span>{msg}</span>
                                        </div>
                                    }
                                })
                        }}

                        <div class="form-control">
                            <input
                                type="email"
                                placeholder="Email"
                                class="input input-bordered"
                                prop:value=form.email
                                on:input=move |ev| form.email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <input
                                type="password"
                                placeholder="Password"
                                class="input input-bordered"
                                prop:value=form.password
                                on:input=move |ev| form.password.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control mt-4">
                            <button type="submit" class="btn btn-primary" disabled=move || form.busy.get()>
                                {move || if form.busy.get() {
                                    view! { <span class="loading loading-spinner"></span> {busy_label} }.into_any()
                                } else {
                                    submit_label.into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-base-content/70 mt-2">{children()}</p>
                    </form>
                </div>
            </div>
        </div>
    }
}
