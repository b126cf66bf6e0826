use std::collections::BTreeSet;

use imdb_admin_shared::{EntityId, Movie, Movies};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

use super::form::{field_hint, form_actions, has_error, input_class, item_actions, page_heading};
use crate::api::use_api;
use crate::controller::PageController;
use crate::controller::movie::{FIELD_NAME, FIELD_PRODUCER, FIELD_YEAR};

/// 多选框中当前选中的 id
fn selected_ids(ev: &web_sys::Event) -> BTreeSet<EntityId> {
    let select: HtmlSelectElement = event_target(ev);
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .filter_map(|opt| opt.value().parse().ok())
        .collect()
}

#[component]
pub fn MoviesPage() -> impl IntoView {
    let page = PageController::<Movies>::new(use_api());
    spawn_local(async move { page.load().await });

    let state = page.state();
    let form = Memo::new(move |_| state.with(|s| s.current_form()));

    let producer_options = move || {
        let selected = form.with(|f| f.producer_id.clone());
        state.with(|s| {
            s.lookups()
                .producers
                .iter()
                .map(|p| {
                    let value = p.id.to_string();
                    let is_selected = value == selected;
                    view! { <option value=value prop:selected=is_selected>{p.name.clone()}</option> }
                })
                .collect_view()
        })
    };

    let actor_options = move || {
        let selected = form.with(|f| f.actor_ids.clone());
        state.with(|s| {
            s.lookups()
                .actors
                .iter()
                .map(|a| {
                    let is_selected = selected.contains(&a.id);
                    view! { <option value=a.id.to_string() prop:selected=is_selected>{a.name.clone()}</option> }
                })
                .collect_view()
        })
    };

    let movies = move || {
        state.with(|s| {
            s.items()
                .iter()
                .map(|movie| movie_card(page, movie))
                .collect_view()
        })
    };

    view! {
        <div class="space-y-6">
            {page_heading(page, "Movies Management")}

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body space-y-2">
                        <h2 class="card-title">"Add / Edit Movie"</h2>

                        <input
                            type="text"
                            placeholder="Name"
                            class=move || input_class("input input-bordered", has_error(page, FIELD_NAME))
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| page.edit(|f| f.name = event_target_value(&ev))
                        />
                        {field_hint(page, FIELD_NAME)}

                        <input
                            type="number"
                            placeholder="Year of Release"
                            class=move || input_class("input input-bordered", has_error(page, FIELD_YEAR))
                            prop:value=move || form.with(|f| f.year_of_release.clone())
                            on:input=move |ev| page.edit(|f| f.year_of_release = event_target_value(&ev))
                        />
                        {field_hint(page, FIELD_YEAR)}

                        <textarea
                            placeholder="Plot"
                            class="textarea textarea-bordered w-full"
                            prop:value=move || form.with(|f| f.plot.clone())
                            on:input=move |ev| page.edit(|f| f.plot = event_target_value(&ev))
                        ></textarea>

                        <input
                            type="text"
                            placeholder="Poster URL"
                            class="input input-bordered w-full"
                            prop:value=move || form.with(|f| f.poster.clone())
                            on:input=move |ev| page.edit(|f| f.poster = event_target_value(&ev))
                        />

                        <select
                            class=move || input_class("select select-bordered", has_error(page, FIELD_PRODUCER))
                            on:change=move |ev| page.edit(|f| f.producer_id = event_target_value(&ev))
                        >
                            <option value="" prop:selected=move || form.with(|f| f.producer_id.is_empty())>
                                "Select Producer"
                            </option>
                            {producer_options}
                        </select>
                        {field_hint(page, FIELD_PRODUCER)}

                        <select
                            multiple
                            class="select select-bordered w-full h-32"
                            on:change=move |ev| {
                                let ids = selected_ids(&ev);
                                page.edit(|f| f.actor_ids = ids);
                            }
                        >
                            {actor_options}
                        </select>

                        {form_actions(page)}
                    </div>
                </div>

                <div class="space-y-4">
                    <h2 class="text-xl font-semibold">"Movie List"</h2>
                    {movies}
                </div>
            </div>
        </div>
    }
}

fn movie_card(page: PageController<Movies>, movie: &Movie) -> impl IntoView + use<> {
    let poster = movie
        .poster
        .clone()
        .filter(|p| !p.trim().is_empty())
        .map(|src| view! { <img src=src alt="Poster" class="w-32 rounded-box" /> });

    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body p-4">
                <h3 class="card-title text-lg">{movie.name.clone()}</h3>
                <p class="text-base-content/70">{movie.year_of_release}</p>
                <p class="text-base-content/70">{movie.plot.clone().unwrap_or_default()}</p>
                {poster}
                <p class="text-base-content/70">"Producer: " {movie.producer_name().to_string()}</p>
                <p class="text-base-content/70">"Actors: " {movie.actor_names()}</p>
                {item_actions(page, movie.id)}
            </div>
        </div>
    }
}
