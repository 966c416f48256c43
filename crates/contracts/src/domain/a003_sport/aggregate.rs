use crate::domain::common::resource::is_filled;
use crate::domain::common::{RecordId, Resource};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(deserialize_with = "lenient::option_id")]
    pub category_id: Option<RecordId>,
    pub description: Option<String>,
}

impl Resource for Sport {
    const ENDPOINT: &'static str = "admin/sports";
    const ELEMENT_NAME: &'static str = "Sport";
    const LIST_NAME: &'static str = "Sports";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn missing_required(&self) -> Option<&'static str> {
        if !is_filled(&self.name) {
            Some("Name")
        } else if self.category_id.is_none() {
            Some("Category")
        } else {
            None
        }
    }
}
