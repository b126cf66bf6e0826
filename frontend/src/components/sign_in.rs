use leptos::prelude::*;
use leptos::task::spawn_local;

use super::auth_card::AuthCard;
use crate::api::{AuthApi, use_api};
use crate::controller::AuthForm;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_navigate};

#[component]
pub fn SignInPage() -> impl IntoView {
    let form = AuthForm::new();
    let auth = StoredValue::new(AuthApi::new(use_api()));
    let navigate = use_navigate();

    let on_submit = Callback::new(move |()| {
        let Some(auth) = auth.try_get_value() else {
            return;
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Some(next) = form.sign_in(&auth).await {
                navigate(next);
            }
        });
    });

    view! {
        <AuthCard
            title="Sign In"
            submit_label="Sign In"
            busy_label="Signing In..."
            form=form
            on_submit=on_submit
        >
            "Don't have an account? "
            <Link to=AppRoute::SignUp class="link link-primary">"Sign Up"</Link>
        </AuthCard>
    }
}
