use leptos::prelude::*;

use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-4xl font-bold mb-4">"Welcome to IMDB Clone"</h1>
                    <p class="text-base-content/70 mb-6">"Your ultimate movie and actor database."</p>
                    <Link to=AppRoute::SignUp class="btn btn-primary">"Get Started"</Link>
                </div>
            </div>
        </div>
    }
}
