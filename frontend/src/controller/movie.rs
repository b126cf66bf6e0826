//! 电影表单
//!
//! 电影页面额外需要演员与制片人的下拉选项，三份数据并发拉取，
//! 任何一份失败则整次加载失败。

use std::collections::BTreeSet;

use imdb_admin_shared::{
    Actors, EntityId, Movie, MoviePatch, Movies, NewMovie, PersonRef, Producers,
};

use super::{EntityForm, FieldErrors, FormPage};
use crate::api::{ApiClient, ResourceClient, Transport};
use crate::error::ApiError;

pub const FIELD_NAME: &str = "name";
pub const FIELD_YEAR: &str = "yearOfRelease";
pub const FIELD_PRODUCER: &str = "producerId";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieForm {
    pub name: String,
    pub year_of_release: String,
    pub plot: String,
    pub poster: String,
    /// 选中的制片人，空串表示未选择
    pub producer_id: String,
    pub actor_ids: BTreeSet<EntityId>,
}

/// 表单下拉框选项
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieLookups {
    pub actors: Vec<PersonRef>,
    pub producers: Vec<PersonRef>,
}

fn non_blank(s: &str) -> Option<String> {
    Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string)
}

impl MovieForm {
    fn checked(&self) -> Result<(i32, Option<EntityId>), FieldErrors> {
        let mut errors = self.validate();

        let year = self.year_of_release.trim().parse::<i32>().ok();
        if year.is_none() && !errors.contains(FIELD_YEAR) {
            errors.insert(FIELD_YEAR, "Year of release must be a number");
        }

        let producer = match self.producer_id.trim() {
            "" => Ok(None),
            raw => raw.parse::<EntityId>().map(Some),
        };
        if producer.is_err() {
            errors.insert(FIELD_PRODUCER, "Producer is invalid");
        }

        match (year, producer) {
            (Some(year), Ok(producer)) if errors.is_empty() => Ok((year, producer)),
            _ => Err(errors),
        }
    }
}

impl EntityForm for MovieForm {
    type Entity = Movie;
    type Create = NewMovie;
    type Update = MoviePatch;

    fn from_entity(movie: &Movie) -> Self {
        Self {
            name: movie.name.clone(),
            year_of_release: movie.year_of_release.to_string(),
            plot: movie.plot.clone().unwrap_or_default(),
            poster: movie.poster.clone().unwrap_or_default(),
            producer_id: movie
                .producer_ref_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            actor_ids: movie.actor_ids(),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require(FIELD_NAME, !self.name.trim().is_empty(), "Name is required");
        errors.require(
            FIELD_YEAR,
            !self.year_of_release.trim().is_empty(),
            "Year of release is required",
        );
        errors
    }

    fn to_create(&self) -> Result<NewMovie, FieldErrors> {
        let (year_of_release, producer_id) = self.checked()?;
        Ok(NewMovie {
            name: self.name.trim().to_string(),
            year_of_release,
            plot: non_blank(&self.plot),
            poster: non_blank(&self.poster),
            producer_id,
            actor_ids: self.actor_ids.iter().copied().collect(),
        })
    }

    fn to_update(&self) -> Result<MoviePatch, FieldErrors> {
        let (year_of_release, producer_id) = self.checked()?;
        Ok(MoviePatch {
            name: Some(self.name.trim().to_string()),
            year_of_release: Some(year_of_release),
            plot: Some(self.plot.clone()),
            poster: Some(self.poster.clone()),
            producer_id,
            actor_ids: Some(self.actor_ids.iter().copied().collect()),
        })
    }
}

#[async_trait::async_trait(?Send)]
impl FormPage for Movies {
    type Form = MovieForm;
    type Lookups = MovieLookups;

    async fn load<T: Transport>(
        api: &ApiClient<T>,
    ) -> Result<(Vec<Movie>, MovieLookups), ApiError> {
        let movies = ResourceClient::<Movies, T>::new(api.clone());
        let actors = ResourceClient::<Actors, T>::new(api.clone());
        let producers = ResourceClient::<Producers, T>::new(api.clone());

        let (movies, actors, producers) = futures::try_join!(
            movies.fetch_all(),
            actors.fetch_all(),
            producers.fetch_all()
        )?;

        let lookups = MovieLookups {
            actors: actors.iter().map(PersonRef::from).collect(),
            producers: producers.iter().map(PersonRef::from).collect(),
        };
        Ok((movies, lookups))
    }
}
