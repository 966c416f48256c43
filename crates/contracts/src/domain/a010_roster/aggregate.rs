use crate::domain::common::{RecordId, Resource};
use crate::shared::lenient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Enrollment of a play kid into a class under a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub play_kid_id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub class_id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub product_id: Option<RecordId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: RosterStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterStatus {
    #[default]
    Active,
    Inactive,
    Completed,
}

impl RosterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RosterStatus::Active => "active",
            RosterStatus::Inactive => "inactive",
            RosterStatus::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RosterStatus::Active => "Active",
            RosterStatus::Inactive => "Inactive",
            RosterStatus::Completed => "Completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "inactive" => RosterStatus::Inactive,
            "completed" => RosterStatus::Completed,
            _ => RosterStatus::Active,
        }
    }

    pub fn all() -> [RosterStatus; 3] {
        [RosterStatus::Active, RosterStatus::Inactive, RosterStatus::Completed]
    }
}

impl Resource for Roster {
    const ENDPOINT: &'static str = "admin/rosters";
    const ELEMENT_NAME: &'static str = "Roster";
    const LIST_NAME: &'static str = "Rosters";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn label(&self) -> String {
        match self.id {
            Some(id) => format!("Roster #{}", id),
            None => "New roster".to_string(),
        }
    }

    fn missing_required(&self) -> Option<&'static str> {
        if self.play_kid_id.is_none() {
            Some("Play kid")
        } else if self.class_id.is_none() {
            Some("Class")
        } else if self.start_date.is_none() {
            Some("Start date")
        } else {
            None
        }
    }
}
