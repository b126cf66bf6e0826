use leptos::prelude::*;
use leptos::task::spawn_local;

use super::auth_card::AuthCard;
use crate::api::{AuthApi, use_api};
use crate::controller::AuthForm;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_navigate};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let form = AuthForm::new();
    let auth = StoredValue::new(AuthApi::new(use_api()));
    let navigate = use_navigate();

    // 注册成功后回到登录页，不自动登录
    let on_submit = Callback::new(move |()| {
        let Some(auth) = auth.try_get_value() else {
            return;
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Some(next) = form.sign_up(&auth).await {
                navigate(next);
            }
        });
    });

    view! {
        <AuthCard
            title="Sign Up"
            submit_label="Sign Up"
            busy_label="Signing Up..."
            form=form
            on_submit=on_submit
        >
            "Already have an account? "
            <Link to=AppRoute::SignIn class="link link-primary">"Sign In"</Link>
        </AuthCard>
    }
}
