//! Related-resource lists used for form selects and for showing names
//! instead of foreign-key ids in tables.

use crate::shared::api_client;
use crate::shared::notifications::{use_notifications, NotificationService};
use contracts::domain::common::{RecordId, Resource};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub struct Lookup<R: Resource> {
    items: RwSignal<Vec<R>>,
}

impl<R: Resource> Clone for Lookup<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for Lookup<R> {}

impl<R: Resource> Lookup<R> {
    /// Start loading the related list; until it arrives names fall back to ids.
    pub fn load() -> Self {
        let notify: NotificationService = use_notifications();
        let items = RwSignal::new(Vec::new());
        spawn_local(async move {
            match api_client::fetch_all::<R>().await {
                Ok(list) => items.set(list),
                Err(e) => notify.api_error(&format!("Failed to load {}", R::LIST_NAME), &e),
            }
        });
        Self { items }
    }

    pub fn items(&self) -> Signal<Vec<R>> {
        self.items.into()
    }

    /// Select options `(id, label)`.
    pub fn options(&self) -> Signal<Vec<(String, String)>> {
        let items = self.items;
        Signal::derive(move || items.with(|list| select_options(list)))
    }

    /// Display name for a foreign key. Tracks the list, so tables refresh
    /// once it loads.
    pub fn name_of(&self, id: Option<RecordId>) -> Option<String> {
        let id = id?;
        Some(self.items.with(|list| name_in(list, id)))
    }
}

pub fn select_options<R: Resource>(items: &[R]) -> Vec<(String, String)> {
    items
        .iter()
        .filter_map(|item| item.id().map(|id| (id.to_string(), item.label())))
        .collect()
}

/// Label of the item with `id`, or `#id` while unknown.
pub fn name_in<R: Resource>(items: &[R], id: RecordId) -> String {
    items
        .iter()
        .find(|item| item.id() == Some(id))
        .map(|item| item.label())
        .unwrap_or_else(|| format!("#{}", id))
}

/// Select value for an optional foreign key.
pub fn id_value(id: Option<RecordId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// Parse a select value back into a foreign key; "" clears it.
pub fn parse_id(value: &str) -> Option<RecordId> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_branch::aggregate::Branch;

    fn branches() -> Vec<Branch> {
        vec![
            Branch {
                id: Some(1),
                name: "Kemang".into(),
                ..Default::default()
            },
            Branch {
                id: None,
                name: "Draft".into(),
                ..Default::default()
            },
            Branch {
                id: Some(4),
                name: "Senayan".into(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_options_skip_unsaved_items() {
        assert_eq!(
            select_options(&branches()),
            vec![
                ("1".to_string(), "Kemang".to_string()),
                ("4".to_string(), "Senayan".to_string())
            ]
        );
    }

    #[test]
    fn test_name_falls_back_to_id() {
        assert_eq!(name_in(&branches(), 4), "Senayan");
        assert_eq!(name_in(&branches(), 9), "#9");
    }

    #[test]
    fn test_id_value_roundtrip() {
        assert_eq!(id_value(Some(12)), "12");
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(""), None);
        assert_eq!(id_value(None), "");
    }
}
