use leptos::prelude::*;

use crate::web::route::AppRoute;
use crate::web::router::Link;

/// 面板上的导航卡片
const CARDS: [(AppRoute, &str, &str, &str); 3] = [
    (
        AppRoute::Movies,
        "View Movies",
        "Browse, add, edit, or delete movies.",
        "bg-primary text-primary-content",
    ),
    (
        AppRoute::Actors,
        "View Actors",
        "Manage actor details easily.",
        "bg-success text-success-content",
    ),
    (
        AppRoute::Producers,
        "View Producers",
        "Add or update producer information.",
        "bg-secondary text-secondary-content",
    ),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="space-y-12">
            <div class="text-center">
                <h1 class="text-4xl font-bold mb-4">"Welcome to IMDB Clone"</h1>
                <p class="text-base-content/70 text-lg">
                    "Manage your favorite movies, actors, and producers with ease."
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {CARDS
                    .into_iter()
                    .map(|(route, title, blurb, tone)| {
                        view! {
                            <Link
                                to=route
                                class=format!("card {tone} shadow-md hover:scale-105 transition duration-300")
                            >
                                <div class="card-body items-center text-center">
                                    <h2 class="card-title">{title}</h2>
                                    <p class="text-sm">{blurb}</p>
                                </div>
                            </Link>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
