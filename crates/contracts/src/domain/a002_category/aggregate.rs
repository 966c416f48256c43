use crate::domain::common::resource::is_filled;
use crate::domain::common::{RecordId, Resource};
use serde::{Deserialize, Serialize};

/// Age/skill category (e.g. "Toddler", "Junior")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub description: Option<String>,
}

impl Resource for Category {
    const ENDPOINT: &'static str = "admin/categories";
    const ELEMENT_NAME: &'static str = "Category";
    const LIST_NAME: &'static str = "Categories";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn missing_required(&self) -> Option<&'static str> {
        (!is_filled(&self.name)).then_some("Name")
    }
}
