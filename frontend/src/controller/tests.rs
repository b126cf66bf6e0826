use imdb_admin_shared::{Actors, Gender, HttpMethod, Movies};
use leptos::prelude::*;
use serde_json::json;

use super::movie::MovieForm;
use super::state::Draft;
use super::*;
use crate::api::{AuthApi, MockTransport};
use crate::session::{MemoryTokenStore, SessionContext};
use crate::web::route::AppRoute;

const BASE: &str = "http://api.test";

fn setup(store: MemoryTokenStore) -> (ApiClient<MockTransport>, MockTransport) {
    let session = SessionContext::new(store);
    session.initialize();
    let transport = MockTransport::new();
    (ApiClient::new(BASE, session, transport.clone()), transport)
}

fn url(path: &str) -> String {
    format!("{BASE}{path}")
}

fn ada() -> serde_json::Value {
    json!({"id": 1, "name": "Ada", "gender": "FEMALE", "dob": "1990-01-01T00:00:00.000Z", "bio": null})
}

fn heat() -> serde_json::Value {
    json!({
        "id": 3, "name": "Heat", "yearOfRelease": 1995, "producerId": 2,
        "producer": {"id": 2, "name": "Art Linson"},
        "actors": [{"actor": {"id": 1, "name": "Al Pacino"}}]
    })
}

// --- 演员页面 ---

#[tokio::test]
async fn creating_an_actor_posts_and_reloads() {
    let owner = Owner::new();
    owner.set();
    let (api, transport) = setup(MemoryTokenStore::with_token("tok"));
    transport.mock_response(HttpMethod::Get, &url("/actors"), 200, json!({"actors": []}));
    transport.mock_response(HttpMethod::Get, &url("/actors"), 200, json!({"actors": [ada()]}));
    transport.mock_response(HttpMethod::Post, &url("/actors"), 201, ada());

    let page = PageController::<Actors, _>::new(api);
    page.load().await;
    assert!(page.state().with_untracked(|s| s.items().is_empty()));

    page.edit(|f| {
        f.name = "Ada".into();
        f.gender = Some(Gender::Female);
        f.dob = "1990-01-01".into();
    });
    assert_eq!(page.submit().await, SubmitOutcome::Saved);

    let posts = transport.requests_to(HttpMethod::Post, &url("/actors"));
    assert_eq!(posts.len(), 1);
    assert_eq!(
        posts[0].json_body(),
        json!({"name": "Ada", "gender": "FEMALE", "dob": "1990-01-01"})
    );
    assert_eq!(
        posts[0].headers.get("Authorization").map(String::as_str),
        Some("Bearer tok")
    );
    assert_eq!(transport.requests_to(HttpMethod::Get, &url("/actors")).len(), 2);

    page.state().with_untracked(|s| {
        assert_eq!(s.items().len(), 1);
        let ada = &s.items()[0];
        assert_eq!(ada.name, "Ada");
        assert_eq!(ada.gender, Gender::Female);
        assert_eq!(ada.dob, chrono::NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
        assert_eq!(ada.bio, None);
        assert_eq!(*s.draft(), Draft::Idle);
        assert!(s.field_errors().is_empty());
        assert!(!s.is_loading());
    });
}

#[tokio::test]
async fn invalid_draft_is_rejected_without_a_request() {
    let owner = Owner::new();
    owner.set();
    let (api, transport) = setup(MemoryTokenStore::with_token("tok"));

    let page = PageController::<Actors, _>::new(api);
    page.edit(|f| f.name = "Ada".into());
    assert_eq!(page.submit_create().await, SubmitOutcome::Rejected);

    assert!(transport.requests().is_empty());
    page.state().with_untracked(|s| {
        assert_eq!(s.field_error("gender").as_deref(), Some("Gender is required"));
        assert_eq!(s.field_error("dob").as_deref(), Some("Date of birth is required"));
        assert_eq!(s.field_error("name"), None);
        assert!(!s.is_loading());
    });
}

#[tokio::test]
async fn editing_sends_full_patch_and_returns_to_idle() {
    let owner = Owner::new();
    owner.set();
    let (api, transport) = setup(MemoryTokenStore::with_token("tok"));
    transport.mock_response(HttpMethod::Get, &url("/actors"), 200, json!({"actors": [ada()]}));
    transport.mock_response(HttpMethod::Put, &url("/actors/1"), 200, ada());

    let page = PageController::<Actors, _>::new(api);
    page.load().await;
    page.edit(|f| f.name = "draft in progress".into());

    page.select_for_edit(1);
    page.state().with_untracked(|s| {
        assert_eq!(s.draft().editing_id(), Some(1));
        assert_eq!(s.current_form().name, "Ada");
    });

    page.edit(|f| f.name = "Ada Lovelace".into());
    assert_eq!(page.submit().await, SubmitOutcome::Saved);

    let puts = transport.requests_to(HttpMethod::Put, &url("/actors/1"));
    assert_eq!(
        puts[0].json_body(),
        json!({"name": "Ada Lovelace", "gender": "FEMALE", "dob": "1990-01-01", "bio": ""})
    );
    assert_eq!(page.state().with_untracked(|s| s.draft().clone()), Draft::Idle);
}

#[tokio::test]
async fn cancel_edit_clears_draft_and_errors() {
    let owner = Owner::new();
    owner.set();
    let (api, transport) = setup(MemoryTokenStore::with_token("tok"));
    transport.mock_response(HttpMethod::Get, &url("/actors"), 200, json!({"actors": [ada()]}));

    let page = PageController::<Actors, _>::new(api);
    page.load().await;
    page.select_for_edit(1);
    page.edit(|f| f.name.clear());
    assert_eq!(page.submit().await, SubmitOutcome::Rejected);
    assert!(page.state().with_untracked(|s| !s.field_errors().is_empty()));

    page.cancel_edit();
    page.state().with_untracked(|s| {
        assert_eq!(*s.draft(), Draft::Idle);
        assert!(s.field_errors().is_empty());
    });
}

#[tokio::test]
async fn create_succeeds_whatever_the_response_body() {
    let owner = Owner::new();
    owner.set();
    let (api, transport) = setup(MemoryTokenStore::with_token("tok"));
    transport.mock_response(
        HttpMethod::Post,
        &url("/actors"),
        201,
        json!({"message": "Actor created", "actor": ada()}),
    );
    transport.mock_response(HttpMethod::Get, &url("/actors"), 200, json!({"actors": [ada()]}));

    let page = PageController::<Actors, _>::new(api);
    page.edit(|f| {
        f.name = "Ada".into();
        f.gender = Some(Gender::Female);
        f.dob = "1990-01-01".into();
    });
    assert_eq!(page.submit().await, SubmitOutcome::Saved);

    assert_eq!(transport.requests_to(HttpMethod::Post, &url("/actors")).len(), 1);
    assert_eq!(transport.requests_to(HttpMethod::Get, &url("/actors")).len(), 1);
    page.state().with_untracked(|s| {
        assert_eq!(*s.draft(), Draft::Idle);
        assert_eq!(s.items().len(), 1);
    });
}

#[tokio::test]
async fn failed_create_keeps_the_draft() {
    let owner = Owner::new();
    owner.set();
    let (api, transport) = setup(MemoryTokenStore::with_token("tok"));
    transport.mock_response(HttpMethod::Post, &url("/actors"), 500, json!({"error": "boom"}));

    let page = PageController::<Actors, _>::new(api);
    page.edit(|f| {
        f.name = "Ada".into();
        f.gender = Some(Gender::Female);
        f.dob = "1990-01-01".into();
    });
    assert_eq!(page.submit().await, SubmitOutcome::Failed);

    page.state().with_untracked(|s| {
        assert!(matches!(s.draft(), Draft::Creating(form) if form.name == "Ada"));
        assert!(s.field_errors().is_empty());
        assert!(!s.is_loading());
    });
    assert!(transport.requests_to(HttpMethod::Get, &url("/actors")).is_empty());
}

#[tokio::test]
async fn failed_delete_still_reloads() {
    let owner = Owner::new();
    owner.set();
    let (api, transport) = setup(MemoryTokenStore::with_token("tok"));
    transport.mock_response(HttpMethod::Get, &url("/actors"), 200, json!({"actors": [ada()]}));
    transport.mock_response(HttpMethod::Delete, &url("/actors/1"), 500, json!({"error": "in use"}));

    let page = PageController::<Actors, _>::new(api);
    page.load().await;
    page.delete(1).await;

    assert_eq!(transport.requests_to(HttpMethod::Delete, &url("/actors/1")).len(), 1);
    assert_eq!(transport.requests_to(HttpMethod::Get, &url("/actors")).len(), 2);
    page.state().with_untracked(|s| {
        assert_eq!(s.items().len(), 1);
        assert!(!s.is_loading());
    });
}

// --- 电影页面 ---

#[tokio::test]
async fn movie_without_year_is_rejected() {
    let owner = Owner::new();
    owner.set();
    let (api, transport) = setup(MemoryTokenStore::with_token("tok"));

    let page = PageController::<Movies, _>::new(api);
    page.edit(|f| f.name = "Heat".into());
    assert_eq!(page.submit().await, SubmitOutcome::Rejected);

    assert!(transport.requests().is_empty());
    assert_eq!(
        page.state().with_untracked(|s| s.field_error("yearOfRelease")),
        Some("Year of release is required".to_string())
    );
}

#[tokio::test]
async fn movie_load_joins_three_collections() {
    let owner = Owner::new();
    owner.set();
    let (api, transport) = setup(MemoryTokenStore::with_token("tok"));
    transport.mock_response(HttpMethod::Get, &url("/movies"), 200, json!({"movies": [heat()]}));
    transport.mock_response(HttpMethod::Get, &url("/actors"), 200, json!({"actors": [ada()]}));
    transport.mock_response(
        HttpMethod::Get,
        &url("/producers"),
        200,
        json!({"producers": [{"id": 2, "name": "Art Linson", "gender": "MALE", "dob": "1942-05-04"}]}),
    );

    let page = PageController::<Movies, _>::new(api);
    page.load().await;

    page.state().with_untracked(|s| {
        assert_eq!(s.items().len(), 1);
        assert_eq!(s.lookups().actors[0].name, "Ada");
        assert_eq!(s.lookups().producers[0].id, 2);
    });

    page.select_for_edit(3);
    let form = page.state().with_untracked(|s| s.current_form());
    assert_eq!(form.producer_id, "2");
    assert_eq!(form.actor_ids.into_iter().collect::<Vec<_>>(), vec![1]);
}

#[tokio::test]
async fn movie_update_accepts_empty_reply() {
    let owner = Owner::new();
    owner.set();
    let (api, transport) = setup(MemoryTokenStore::with_token("tok"));
    transport.mock_response(HttpMethod::Get, &url("/movies"), 200, json!({"movies": [heat()]}));
    transport.mock_response(HttpMethod::Get, &url("/actors"), 200, json!({"actors": []}));
    transport.mock_response(HttpMethod::Get, &url("/producers"), 200, json!({"producers": []}));
    transport.mock_response(HttpMethod::Put, &url("/movies/3"), 204, serde_json::Value::Null);

    let page = PageController::<Movies, _>::new(api);
    page.load().await;
    page.select_for_edit(3);
    page.edit(|f| f.year_of_release = "1996".into());
    assert_eq!(page.submit().await, SubmitOutcome::Saved);

    let puts = transport.requests_to(HttpMethod::Put, &url("/movies/3"));
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].json_body()["yearOfRelease"], json!(1996));
    assert_eq!(transport.requests_to(HttpMethod::Get, &url("/movies")).len(), 2);
    assert_eq!(page.state().with_untracked(|s| s.draft().clone()), Draft::Idle);
}

#[tokio::test]
async fn movie_load_fails_as_a_whole() {
    let owner = Owner::new();
    owner.set();
    let (api, transport) = setup(MemoryTokenStore::with_token("tok"));
    transport.mock_response(HttpMethod::Get, &url("/movies"), 200, json!({"movies": [heat()]}));
    transport.mock_response(HttpMethod::Get, &url("/actors"), 200, json!({"actors": []}));
    transport.mock_response(HttpMethod::Get, &url("/producers"), 200, json!({"producers": []}));
    transport.mock_response(HttpMethod::Get, &url("/producers"), 500, json!({"error": "down"}));

    let page = PageController::<Movies, _>::new(api);
    page.load().await;
    assert_eq!(page.state().with_untracked(|s| s.items().len()), 1);

    page.load().await;
    page.state().with_untracked(|s| {
        assert_eq!(s.items().len(), 1);
        assert!(!s.is_loading());
    });
}

// --- 状态迁移 ---

#[test]
fn stale_load_results_are_dropped() {
    let mut state = PageState::<Actors>::default();
    let first = state.begin_load();
    let second = state.begin_load();

    let person = serde_json::from_value(ada()).unwrap();
    assert!(!state.finish_load(first, Ok((vec![person], ()))));
    assert!(state.items().is_empty());
    assert!(state.is_loading());

    assert!(state.finish_load(second, Ok((Vec::new(), ()))));
    assert!(!state.is_loading());
}

#[test]
fn failed_load_keeps_previous_items() {
    let mut state = PageState::<Actors>::default();
    let ticket = state.begin_load();
    let person = serde_json::from_value(ada()).unwrap();
    state.finish_load(ticket, Ok((vec![person], ())));

    let ticket = state.begin_load();
    assert!(state.finish_load(ticket, Err(ApiError::Transport("offline".into()))));
    assert_eq!(state.items().len(), 1);
    assert!(!state.is_loading());
}

#[test]
fn selecting_unknown_item_changes_nothing() {
    let mut state = PageState::<Movies>::default();
    state.edit_form(|f| f.name = "Heat".into());
    assert!(!state.select_for_edit(42));
    assert!(matches!(state.draft(), Draft::Creating(_)));
}

// --- 认证 ---

#[tokio::test]
async fn sign_in_establishes_session() {
    let owner = Owner::new();
    owner.set();
    let store = MemoryTokenStore::default();
    let (api, transport) = setup(store.clone());
    transport.mock_response(HttpMethod::Post, &url("/auth/signin"), 200, json!({"token": "jwt"}));

    let form = AuthForm::new();
    form.email.set("a@b.c".into());
    form.password.set("pw".into());

    let next = form.sign_in(&AuthApi::new(api.clone())).await;
    assert_eq!(next, Some(AppRoute::Dashboard));
    assert!(api.session().is_valid());
    assert_eq!(store.stored().as_deref(), Some("jwt"));
    assert!(!form.busy.get_untracked());
}

#[tokio::test]
async fn sign_in_failure_shows_server_message() {
    let owner = Owner::new();
    owner.set();
    let (api, transport) = setup(MemoryTokenStore::default());
    transport.mock_response(
        HttpMethod::Post,
        &url("/auth/signin"),
        401,
        json!({"error": "Invalid credentials"}),
    );

    let form = AuthForm::new();
    assert_eq!(form.sign_in(&AuthApi::new(api.clone())).await, None);
    assert_eq!(form.error.get_untracked().as_deref(), Some("Invalid credentials"));
    assert!(!api.session().is_valid());
}

#[tokio::test]
async fn sign_up_does_not_log_in() {
    let owner = Owner::new();
    owner.set();
    let store = MemoryTokenStore::default();
    let (api, transport) = setup(store.clone());
    transport.mock_response(HttpMethod::Post, &url("/auth/signup"), 201, json!({"user": {"id": 1}}));
    transport.mock_response(HttpMethod::Post, &url("/auth/signup"), 409, json!({}));

    let form = AuthForm::new();
    let auth = AuthApi::new(api.clone());
    assert_eq!(form.sign_up(&auth).await, Some(AppRoute::SignIn));
    assert_eq!(store.stored(), None);
    assert!(!api.session().is_valid());

    assert_eq!(form.sign_up(&auth).await, None);
    assert_eq!(
        form.error.get_untracked().as_deref(),
        Some(crate::error::GENERIC_FAILURE)
    );
}

#[test]
fn validate_passes_iff_required_fields_present() {
    let mut form = PersonForm::default();
    assert_eq!(PageController::<Actors>::validate(&form).len(), 3);

    form.name = "Ada".into();
    form.gender = Some(Gender::Other);
    form.dob = "1990-01-01".into();
    assert!(PageController::<Actors>::validate(&form).is_empty());

    let movie = MovieForm {
        name: "Heat".into(),
        year_of_release: "1995".into(),
        ..Default::default()
    };
    assert!(PageController::<Movies>::validate(&movie).is_empty());
}
