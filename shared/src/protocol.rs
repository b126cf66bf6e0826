use crate::{
    Actor, ActorList, Credentials, EntityId, HasId, Movie, MovieList, MoviePatch, NewMovie,
    NewPerson, PersonPatch, Producer, ProducerList, SigninResponse,
};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path, relative to the API base URL.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

/// A REST collection exposing list/create/update/delete.
///
/// Item endpoints live at `{COLLECTION}/{id}`.
pub trait Resource: 'static {
    /// Collection path, e.g. `/actors`.
    const COLLECTION: &'static str;
    /// Human readable singular noun, used in logs and labels.
    const NOUN: &'static str;

    type Entity: DeserializeOwned + HasId + Clone + PartialEq + Send + Sync + 'static;
    /// The `{ "<collection>": [...] }` envelope returned by GET on the collection.
    type List: DeserializeOwned + Into<Vec<Self::Entity>>;
    type Create: Serialize;
    type Update: Serialize;

    fn item_path(id: EntityId) -> String {
        format!("{}/{}", Self::COLLECTION, id)
    }
}

// =========================================================
// Resource Definitions
// =========================================================

pub struct Actors;

impl Resource for Actors {
    const COLLECTION: &'static str = "/actors";
    const NOUN: &'static str = "Actor";
    type Entity = Actor;
    type List = ActorList;
    type Create = NewPerson;
    type Update = PersonPatch;
}

pub struct Producers;

impl Resource for Producers {
    const COLLECTION: &'static str = "/producers";
    const NOUN: &'static str = "Producer";
    type Entity = Producer;
    type List = ProducerList;
    type Create = NewPerson;
    type Update = PersonPatch;
}

pub struct Movies;

impl Resource for Movies {
    const COLLECTION: &'static str = "/movies";
    const NOUN: &'static str = "Movie";
    type Entity = Movie;
    type List = MovieList;
    type Create = NewMovie;
    type Update = MoviePatch;
}

// =========================================================
// Request Definitions
// =========================================================

/// Register a new account
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SignupRequest(pub Credentials);

impl ApiRequest for SignupRequest {
    // 注册响应的结构由服务端决定，客户端不关心
    type Response = serde::de::IgnoredAny;
    const PATH: &'static str = "/auth/signup";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Exchange credentials for a session token
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SigninRequest(pub Credentials);

impl ApiRequest for SigninRequest {
    type Response = SigninResponse;
    const PATH: &'static str = "/auth/signin";
    const METHOD: HttpMethod = HttpMethod::Post;
}
