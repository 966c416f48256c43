use serde::de::DeserializeOwned;
use serde::Serialize;

/// Backend primary key type.
pub type RecordId = i64;

/// A backend-managed entity exposed under `/{admin|api}/{resource}[/{id}]`.
///
/// Implementors are flat JSON shapes mirrored 1:1 into form state; the only
/// client-side invariant is presence of required fields.
pub trait Resource: Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static {
    /// Path below the API base, without leading slash (e.g. `"admin/branches"`)
    const ENDPOINT: &'static str;

    /// Singular UI name (e.g. "Branch")
    const ELEMENT_NAME: &'static str;

    /// Plural UI name (e.g. "Branches")
    const LIST_NAME: &'static str;

    /// `None` until the backend has assigned an id.
    fn id(&self) -> Option<RecordId>;

    /// Human readable label used in selects and confirmation dialogs.
    fn label(&self) -> String;

    /// Name of the first required field that is empty, if any.
    fn missing_required(&self) -> Option<&'static str>;

    /// Check required-field presence before sending the form.
    fn validate(&self) -> Result<(), String> {
        match self.missing_required() {
            Some(field) => Err(format!("{} is required", field)),
            None => Ok(()),
        }
    }

    /// Collection URL path, e.g. `admin/branches`.
    fn collection_path() -> String {
        Self::ENDPOINT.to_string()
    }

    /// Item URL path, e.g. `admin/branches/7`.
    fn item_path(id: RecordId) -> String {
        format!("{}/{}", Self::ENDPOINT, id)
    }
}

/// `true` when an optional text field holds something other than whitespace.
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
