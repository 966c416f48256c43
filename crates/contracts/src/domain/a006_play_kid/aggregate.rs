use crate::domain::common::resource::is_filled;
use crate::domain::common::{RecordId, Resource};
use crate::shared::lenient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Enrolled student ("play kid")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayKid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub branch_id: Option<RecordId>,
    #[serde(skip_serializing)]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn all() -> [Gender; 2] {
        [Gender::Male, Gender::Female]
    }
}

impl Resource for PlayKid {
    const ENDPOINT: &'static str = "admin/play-kids";
    const ELEMENT_NAME: &'static str = "Play Kid";
    const LIST_NAME: &'static str = "Play Kids";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn missing_required(&self) -> Option<&'static str> {
        if !is_filled(&self.name) {
            Some("Name")
        } else if self.branch_id.is_none() {
            Some("Branch")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birth_date_and_gender_round_trip_through_backend_shape() {
        let kid: PlayKid = serde_json::from_str(
            r#"{"id":9,"name":"Alya","birth_date":"2019-04-02","gender":"female","branch_id":2,
                "photo_url":"/storage/kids/9.jpg"}"#,
        )
        .unwrap();
        assert_eq!(kid.birth_date, NaiveDate::from_ymd_opt(2019, 4, 2));
        assert_eq!(kid.gender, Some(Gender::Female));

        let json = serde_json::to_value(&kid).unwrap();
        assert!(json.get("photo_url").is_none());
        assert_eq!(json["birth_date"], "2019-04-02");
    }
}
