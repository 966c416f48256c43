use crate::domain::common::resource::is_filled;
use crate::domain::common::{RecordId, Resource};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Court, field or hall belonging to a branch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Venue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(deserialize_with = "lenient::option_id")]
    pub branch_id: Option<RecordId>,
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient::option_u32")]
    pub capacity: Option<u32>,
}

impl Resource for Venue {
    const ENDPOINT: &'static str = "admin/venues";
    const ELEMENT_NAME: &'static str = "Venue";
    const LIST_NAME: &'static str = "Venues";

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
