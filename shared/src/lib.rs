use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

pub use protocol::{Actors, ApiRequest, HttpMethod, Movies, Producers, Resource};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 由服务端分配的实体主键
pub type EntityId = i64;

/// 带有服务端主键的实体
pub trait HasId {
    fn id(&self) -> EntityId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// 线路上的取值，同时用作 `<option value>`
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGender(pub String);

impl fmt::Display for UnknownGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gender: {}", self.0)
    }
}

impl std::error::Error for UnknownGender {}

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownGender(s.to_string()))
    }
}

/// 演员与制片人共用的人物实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: EntityId,
    pub name: String,
    pub gender: Gender,
    #[serde(with = "date::wire")]
    pub dob: NaiveDate,
    #[serde(default)]
    pub bio: Option<String>,
}

pub type Actor = Person;
pub type Producer = Person;

impl HasId for Person {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// 创建人物的载荷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub gender: Gender,
    #[serde(with = "date::wire")]
    pub dob: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bio: Option<String>,
}

/// 更新人物的载荷，任意字段子集
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonPatch {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gender: Option<Gender>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        with = "date::wire_opt"
    )]
    pub dob: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bio: Option<String>,
}

/// 电影读取结果中嵌套的人物引用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: EntityId,
    pub name: String,
}

impl From<&Person> for PersonRef {
    fn from(p: &Person) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
        }
    }
}

/// 电影与演员的关联记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieActor {
    pub actor: PersonRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: EntityId,
    pub name: String,
    pub year_of_release: i32,
    #[serde(default)]
    pub plot: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub producer_id: Option<EntityId>,
    #[serde(default)]
    pub producer: Option<PersonRef>,
    #[serde(default)]
    pub actors: Vec<MovieActor>,
}

impl HasId for Movie {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Movie {
    /// 制片人 id：优先外键，其次嵌套对象
    pub fn producer_ref_id(&self) -> Option<EntityId> {
        self.producer_id.or(self.producer.as_ref().map(|p| p.id))
    }

    pub fn actor_ids(&self) -> BTreeSet<EntityId> {
        self.actors.iter().map(|a| a.actor.id).collect()
    }

    pub fn producer_name(&self) -> &str {
        self.producer
            .as_ref()
            .map(|p| p.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown")
    }

    pub fn actor_names(&self) -> String {
        if self.actors.is_empty() {
            return "No actors available".to_string();
        }
        self.actors
            .iter()
            .map(|a| a.actor.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub name: String,
    pub year_of_release: i32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub plot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub producer_id: Option<EntityId>,
    #[serde(default)]
    pub actor_ids: Vec<EntityId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePatch {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub year_of_release: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub plot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub producer_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub actor_ids: Option<Vec<EntityId>>,
}

// =========================================================
// 列表信封 (List Envelopes)
// =========================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ActorList {
    pub actors: Vec<Actor>,
}

impl From<ActorList> for Vec<Actor> {
    fn from(list: ActorList) -> Self {
        list.actors
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProducerList {
    pub producers: Vec<Producer>,
}

impl From<ProducerList> for Vec<Producer> {
    fn from(list: ProducerList) -> Self {
        list.producers
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieList {
    pub movies: Vec<Movie>,
}

impl From<MovieList> for Vec<Movie> {
    fn from(list: MovieList) -> Self {
        list.movies
    }
}

// =========================================================
// 认证 (Auth)
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigninResponse {
    pub token: String,
}
