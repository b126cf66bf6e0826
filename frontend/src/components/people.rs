//! 演员 / 制片人管理页面
//!
//! 两个页面的数据形状完全相同，只是资源路径不同。

use imdb_admin_shared::date::display_date;
use imdb_admin_shared::{Actors, Gender, Person, Producers};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form::{field_hint, form_actions, has_error, input_class, item_actions, page_heading};
use crate::api::use_api;
use crate::controller::person::{FIELD_DOB, FIELD_GENDER, FIELD_NAME};
use crate::controller::{FormPage, PageController, PersonForm};

fn people_page<P>(title: &'static str) -> impl IntoView
where
    P: FormPage<Entity = Person, Form = PersonForm>,
{
    let page = PageController::<P>::new(use_api());
    spawn_local(async move { page.load().await });

    let state = page.state();
    let form = Memo::new(move |_| state.with(|s| s.current_form()));

    let on_gender = move |ev| {
        let value = event_target_value(&ev);
        page.edit(|f| f.gender = value.parse::<Gender>().ok());
    };

    let people = move || {
        state.with(|s| {
            s.items()
                .iter()
                .map(|person| person_card(page, person))
                .collect_view()
        })
    };

    view! {
        <div class="space-y-6">
            {page_heading(page, title)}

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body space-y-2">
                        <h2 class="card-title">{format!("Add / Edit {}", P::NOUN)}</h2>

                        <input
                            type="text"
                            placeholder="Name"
                            class=move || input_class("input input-bordered", has_error(page, FIELD_NAME))
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| page.edit(|f| f.name = event_target_value(&ev))
                        />
                        {field_hint(page, FIELD_NAME)}

                        <select
                            class=move || input_class("select select-bordered", has_error(page, FIELD_GENDER))
                            prop:value=move || form.with(|f| f.gender.map(|g| g.as_str()).unwrap_or_default())
                            on:change=on_gender
                        >
                            <option value="">"Select Gender"</option>
                            {Gender::ALL
                                .into_iter()
                                .map(|g| view! { <option value=g.as_str()>{g.label()}</option> })
                                .collect_view()}
                        </select>
                        {field_hint(page, FIELD_GENDER)}

                        <input
                            type="date"
                            class=move || input_class("input input-bordered", has_error(page, FIELD_DOB))
                            prop:value=move || form.with(|f| f.dob.clone())
                            on:input=move |ev| page.edit(|f| f.dob = event_target_value(&ev))
                        />
                        {field_hint(page, FIELD_DOB)}

                        <textarea
                            placeholder="Bio"
                            class="textarea textarea-bordered w-full"
                            prop:value=move || form.with(|f| f.bio.clone())
                            on:input=move |ev| page.edit(|f| f.bio = event_target_value(&ev))
                        ></textarea>

                        {form_actions(page)}
                    </div>
                </div>

                <div class="space-y-4">
                    <h2 class="text-xl font-semibold">{format!("{} List", P::NOUN)}</h2>
                    {people}
                </div>
            </div>
        </div>
    }
}

fn person_card<P: FormPage>(page: PageController<P>, person: &Person) -> impl IntoView + use<P> {
    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body p-4">
                <h3 class="card-title text-lg">{person.name.clone()}</h3>
                <p class="text-base-content/70">{person.gender.label()}</p>
                <p class="text-base-content/70">{display_date(person.dob)}</p>
                <p class="text-base-content/70">{person.bio.clone().unwrap_or_default()}</p>
                {item_actions(page, person.id)}
            </div>
        </div>
    }
}

#[component]
pub fn ActorsPage() -> impl IntoView {
    people_page::<Actors>("Actors Management")
}

#[component]
pub fn ProducersPage() -> impl IntoView {
    people_page::<Producers>("Producers Management")
}
