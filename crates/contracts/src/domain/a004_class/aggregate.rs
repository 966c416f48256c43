use crate::domain::common::resource::is_filled;
use crate::domain::common::{RecordId, Resource};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// A class is a recurring group lesson for one sport/category at one branch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SportClass {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(deserialize_with = "lenient::option_id")]
    pub sport_id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub category_id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub branch_id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub coach_id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_u32")]
    pub capacity: Option<u32>,
    #[serde(deserialize_with = "lenient::option_f64")]
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl Resource for SportClass {
    const ENDPOINT: &'static str = "admin/classes";
    const ELEMENT_NAME: &'static str = "Class";
    const LIST_NAME: &'static str = "Classes";

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
        if self.sport_id.is_none() {
            return Some("Sport");
        }
        if self.category_id.is_none() {
            return Some("Category");
        }
        if self.branch_id.is_none() {
            return Some("Branch");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_price_from_backend() {
        let class: SportClass = serde_json::from_str(
            r#"{"id":3,"name":"Mini Soccer","sport_id":1,"category_id":"2","branch_id":1,
                "capacity":"12","price":"350000.00","sport":{"id":1,"name":"Soccer"}}"#,
        )
        .unwrap();
        assert_eq!(class.price, Some(350000.0));
        assert_eq!(class.capacity, Some(12));
        assert_eq!(class.category_id, Some(2));
        assert_eq!(class.coach_id, None);
    }

    #[test]
    fn test_required_fields_in_form_order() {
        let mut class = SportClass {
            name: "Mini Soccer".into(),
            ..Default::default()
        };
        assert_eq!(class.missing_required(), Some("Sport"));
        class.sport_id = Some(1);
        class.category_id = Some(1);
        assert_eq!(class.missing_required(), Some("Branch"));
        class.branch_id = Some(1);
        assert_eq!(class.missing_required(), None);
    }
}
