//! 演员 / 制片人表单

use imdb_admin_shared::date::{parse_date, to_input_value};
use imdb_admin_shared::{Actors, Gender, NewPerson, Person, PersonPatch, Producers};

use super::{EntityForm, FieldErrors, FormPage};
use crate::api::{ApiClient, ResourceClient, Transport};
use crate::error::ApiError;

pub const FIELD_NAME: &str = "name";
pub const FIELD_GENDER: &str = "gender";
pub const FIELD_DOB: &str = "dob";

/// 人物表单草稿，`dob` 为 `<input type="date">` 的原始值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonForm {
    pub name: String,
    pub gender: Option<Gender>,
    pub dob: String,
    pub bio: String,
}

impl PersonForm {
    /// 必填字段 + 日期解析，全部通过时返回类型化的值
    fn checked(&self) -> Result<(Gender, chrono::NaiveDate), FieldErrors> {
        let mut errors = self.validate();
        let dob = parse_date(&self.dob);
        if dob.is_none() && !errors.contains(FIELD_DOB) {
            errors.insert(FIELD_DOB, "Date of birth is invalid");
        }
        match (self.gender, dob) {
            (Some(gender), Some(dob)) if errors.is_empty() => Ok((gender, dob)),
            _ => Err(errors),
        }
    }
}

impl EntityForm for PersonForm {
    type Entity = Person;
    type Create = NewPerson;
    type Update = PersonPatch;

    fn from_entity(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            gender: Some(person.gender),
            dob: to_input_value(person.dob),
            bio: person.bio.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require(FIELD_NAME, !self.name.trim().is_empty(), "Name is required");
        errors.require(FIELD_GENDER, self.gender.is_some(), "Gender is required");
        errors.require(FIELD_DOB, !self.dob.trim().is_empty(), "Date of birth is required");
        errors
    }

    fn to_create(&self) -> Result<NewPerson, FieldErrors> {
        let (gender, dob) = self.checked()?;
        Ok(NewPerson {
            name: self.name.trim().to_string(),
            gender,
            dob,
            bio: Some(self.bio.clone()).filter(|b| !b.trim().is_empty()),
        })
    }

    fn to_update(&self) -> Result<PersonPatch, FieldErrors> {
        let (gender, dob) = self.checked()?;
        // 更新时总是发送 bio，清空也要同步到服务端
        Ok(PersonPatch {
            name: Some(self.name.trim().to_string()),
            gender: Some(gender),
            dob: Some(dob),
            bio: Some(self.bio.clone()),
        })
    }
}

#[async_trait::async_trait(?Send)]
impl FormPage for Actors {
    type Form = PersonForm;
    type Lookups = ();

    async fn load<T: Transport>(api: &ApiClient<T>) -> Result<(Vec<Person>, ()), ApiError> {
        let actors = ResourceClient::<Actors, T>::new(api.clone()).fetch_all().await?;
        Ok((actors, ()))
    }
}

#[async_trait::async_trait(?Send)]
impl FormPage for Producers {
    type Form = PersonForm;
    type Lookups = ();

    async fn load<T: Transport>(api: &ApiClient<T>) -> Result<(Vec<Person>, ()), ApiError> {
        let producers = ResourceClient::<Producers, T>::new(api.clone())
            .fetch_all()
            .await?;
        Ok((producers, ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled() -> PersonForm {
        PersonForm {
            name: "Ada".into(),
            gender: Some(Gender::Female),
            dob: "1990-01-01".into(),
            bio: String::new(),
        }
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = PersonForm::default().validate();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(FIELD_NAME), Some("Name is required"));
        assert_eq!(errors.get(FIELD_GENDER), Some("Gender is required"));
        assert_eq!(errors.get(FIELD_DOB), Some("Date of birth is required"));
    }

    #[test]
    fn whitespace_name_is_missing() {
        let form = PersonForm {
            name: "   ".into(),
            ..filled()
        };
        assert_eq!(form.validate().fields().collect::<Vec<_>>(), vec![FIELD_NAME]);
    }

    #[test]
    fn create_payload_omits_blank_bio() {
        let payload = filled().to_create().unwrap();
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.dob, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
        assert_eq!(payload.bio, None);
    }

    #[test]
    fn update_payload_sends_every_field() {
        let patch = filled().to_update().unwrap();
        assert_eq!(patch.name.as_deref(), Some("Ada"));
        assert_eq!(patch.gender, Some(Gender::Female));
        assert_eq!(patch.bio.as_deref(), Some(""));
    }

    #[test]
    fn unparseable_dob_becomes_field_error() {
        let form = PersonForm {
            dob: "yesterday".into(),
            ..filled()
        };
        assert!(form.validate().is_empty());
        let errors = form.to_create().unwrap_err();
        assert_eq!(errors.get(FIELD_DOB), Some("Date of birth is invalid"));
    }

    #[test]
    fn from_entity_round_trips_through_update() {
        let person = Person {
            id: 4,
            name: "Ada".into(),
            gender: Gender::Female,
            dob: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            bio: Some("Mathematician".into()),
        };
        let form = PersonForm::from_entity(&person);
        assert_eq!(form.dob, "1990-01-01");
        assert_eq!(form.bio, "Mathematician");
        assert_eq!(
            form.to_update().unwrap().dob,
            Some(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap())
        );
    }
}
