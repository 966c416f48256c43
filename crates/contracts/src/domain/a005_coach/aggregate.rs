use crate::domain::common::resource::is_filled;
use crate::domain::common::{RecordId, Resource};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coach {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub sport_id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub branch_id: Option<RecordId>,
    pub bio: Option<String>,
    /// Set by the backend after a multipart upload; never sent back.
    #[serde(skip_serializing)]
    pub photo_url: Option<String>,
}

impl Resource for Coach {
    const ENDPOINT: &'static str = "admin/coaches";
    const ELEMENT_NAME: &'static str = "Coach";
    const LIST_NAME: &'static str = "Coaches";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn missing_required(&self) -> Option<&'static str> {
        if !is_filled(&self.name) {
            Some("Name")
        } else if !is_filled(&self.email) {
            Some("Email")
        } else {
            None
        }
    }
}
