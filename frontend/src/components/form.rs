//! 表单-列表页面共用的视图片段

use leptos::prelude::*;

use crate::controller::{FormPage, PageController};

/// 输入框样式，带校验错误时加红框
pub fn input_class(base: &'static str, invalid: bool) -> String {
    if invalid {
        format!("{base} w-full input-error")
    } else {
        format!("{base} w-full")
    }
}

/// 字段下方的校验提示
pub fn field_hint<P: FormPage>(page: PageController<P>, field: &'static str) -> impl IntoView {
    move || {
        page.state()
            .with(|s| s.field_error(field))
            .map(|msg| view! { <p class="text-error text-sm mt-1">{msg}</p> })
    }
}

pub fn has_error<P: FormPage>(page: PageController<P>, field: &'static str) -> bool {
    page.state().with(|s| s.field_errors().contains(field))
}

/// 页面标题与加载指示
pub fn page_heading<P: FormPage>(page: PageController<P>, title: &'static str) -> impl IntoView {
    view! {
        <h1 class="text-3xl font-bold text-center">{title}</h1>
        <Show when=move || page.state().with(|s| s.is_loading())>
            <div class="flex justify-center">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        </Show>
    }
}

/// 提交与取消按钮
pub fn form_actions<P: FormPage>(page: PageController<P>) -> impl IntoView {
    let editing = move || page.state().with(|s| s.is_editing());

    let on_submit = move |_| {
        leptos::task::spawn_local(async move {
            page.submit().await;
        });
    };

    view! {
        <button class="btn btn-primary w-full" on:click=on_submit>
            {move || if editing() { format!("Update {}", P::NOUN) } else { format!("Add {}", P::NOUN) }}
        </button>
        <Show when=editing>
            <button class="btn btn-neutral w-full" on:click=move |_| page.cancel_edit()>
                "Cancel"
            </button>
        </Show>
    }
}

/// 列表项上的编辑 / 删除按钮
pub fn item_actions<P: FormPage>(page: PageController<P>, id: imdb_admin_shared::EntityId) -> impl IntoView {
    let on_delete = move |_| {
        leptos::task::spawn_local(async move {
            page.delete(id).await;
        });
    };

    view! {
        <div class="card-actions mt-2">
            <button class="btn btn-warning btn-sm" on:click=move |_| page.select_for_edit(id)>
                "Edit"
            </button>
            <button class="btn btn-error btn-sm" on:click=on_delete>
                "Delete"
            </button>
        </div>
    }
}
