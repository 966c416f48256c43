use crate::domain::common::resource::is_filled;
use crate::domain::common::{RecordId, Resource};
use serde::{Deserialize, Serialize};

/// Academy branch (physical location group)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
}

impl Resource for Branch {
    const ENDPOINT: &'static str = "admin/branches";
    const ELEMENT_NAME: &'static str = "Branch";
    const LIST_NAME: &'static str = "Branches";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn missing_required(&self) -> Option<&'static str> {
        if !is_filled(&self.name) {
            return Some("Name");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_branch_serializes_without_id() {
        let branch = Branch {
            name: "Kemang".into(),
            city: Some("Jakarta".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&branch).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Kemang");
    }

    #[test]
    fn test_validate_requires_name() {
        let mut branch = Branch::default();
        assert_eq!(branch.validate(), Err("Name is required".to_string()));
        branch.name = "Kemang".into();
        assert!(branch.validate().is_ok());
        assert_eq!(Branch::item_path(4), "admin/branches/4");
    }
}
