use crate::domain::common::resource::is_filled;
use crate::domain::common::{RecordId, Resource};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Sellable package: a number of sessions of a class at a price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(deserialize_with = "lenient::option_id")]
    pub category_id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub class_id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_f64")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient::option_u32")]
    pub sessions: Option<u32>,
    pub description: Option<String>,
}

impl Resource for Product {
    const ENDPOINT: &'static str = "admin/products";
    const ELEMENT_NAME: &'static str = "Product";
    const LIST_NAME: &'static str = "Products";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn missing_required(&self) -> Option<&'static str> {
        if !is_filled(&self.name) {
            Some("Name")
        } else if self.price.is_none() {
            Some("Price")
        } else {
            None
        }
    }
}
