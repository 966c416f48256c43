//! Landing dashboard: record counts for every resource the role can open.
//!
//! Counts are fetched concurrently, one request per resource. Leaving the
//! page aborts whatever is still in flight.

use crate::dashboards::d400_overview::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::menu::{visible_groups, MenuItem};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::notifications::{use_notifications, NotificationService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_auth;
use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a003_sport::aggregate::Sport;
use contracts::domain::a004_class::aggregate::SportClass;
use contracts::domain::a005_coach::aggregate::Coach;
use contracts::domain::a006_play_kid::aggregate::PlayKid;
use contracts::domain::a007_product::aggregate::Product;
use contracts::domain::a008_venue::aggregate::Venue;
use contracts::domain::a009_schedule::aggregate::Schedule;
use contracts::domain::a010_roster::aggregate::Roster;
use contracts::domain::a011_attendance_report::aggregate::AttendanceReport;
use contracts::domain::common::Resource;
use contracts::system::auth::UserRole;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use web_sys::{AbortController, AbortSignal};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CountState {
    Loading,
    Loaded(usize),
    Failed,
}

impl CountState {
    pub fn value(&self) -> Option<usize> {
        match self {
            CountState::Loaded(n) => Some(*n),
            _ => None,
        }
    }
}

/// Menu entries backed by a resource list, i.e. everything but dashboards.
pub fn count_tiles(role: UserRole) -> Vec<MenuItem> {
    visible_groups(role)
        .into_iter()
        .flat_map(|g| g.items)
        .filter(|item| !item.key.starts_with('d'))
        .collect()
}

/// One batch of count requests sharing an abort signal.
struct CountBatch {
    counts: RwSignal<HashMap<&'static str, CountState>>,
    signal: AbortSignal,
    cancelled: Arc<AtomicBool>,
    notify: NotificationService,
}

impl CountBatch {
    fn start(&self, key: &'static str) {
        match key {
            "a001_branch" => self.spawn::<Branch>(key),
            "a002_category" => self.spawn::<Category>(key),
            "a003_sport" => self.spawn::<Sport>(key),
            "a004_class" => self.spawn::<SportClass>(key),
            "a005_coach" => self.spawn::<Coach>(key),
            "a006_play_kid" => self.spawn::<PlayKid>(key),
            "a007_product" => self.spawn::<Product>(key),
            "a008_venue" => self.spawn::<Venue>(key),
            "a009_schedule" => self.spawn::<Schedule>(key),
            "a010_roster" => self.spawn::<Roster>(key),
            "a011_attendance_report" => self.spawn::<AttendanceReport>(key),
            "sys_users" => self.spawn::<User>(key),
            other => log::warn!("No count source for '{}'", other),
        }
    }

    fn spawn<R: Resource>(&self, key: &'static str) {
        let counts = self.counts;
        let signal = self.signal.clone();
        let cancelled = self.cancelled.clone();
        let notify = self.notify;

        spawn_local(async move {
            let result = api::count::<R>(&signal).await;
            if cancelled.load(Ordering::Relaxed) {
                return;
            }
            let state = match result {
                Ok(n) => CountState::Loaded(n),
                Err(e) if e.is_unauthorized() => {
                    notify.api_error(&format!("Failed to count {}", R::LIST_NAME), &e);
                    CountState::Failed
                }
                Err(e) => {
                    log::warn!("Failed to count {}: {}", R::LIST_NAME, e);
                    CountState::Failed
                }
            };
            counts.try_update(|map| {
                map.insert(key, state);
            });
        });
    }
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notify = use_notifications();
    let state = use_auth().state();

    let role = state.with_untracked(|s| s.role());
    let greeting = state.with_untracked(|s| {
        s.session
            .as_ref()
            .map(|u| format!("Welcome back, {}", u.name))
            .unwrap_or_else(|| "Welcome".to_string())
    });
    let tiles = count_tiles(role);

    let counts = RwSignal::new(
        tiles
            .iter()
            .map(|t| (t.key, CountState::Loading))
            .collect::<HashMap<_, _>>(),
    );

    let cancelled = Arc::new(AtomicBool::new(false));
    match AbortController::new() {
        Ok(controller) => {
            let batch = CountBatch {
                counts,
                signal: controller.signal(),
                cancelled: cancelled.clone(),
                notify,
            };
            for tile in &tiles {
                batch.start(tile.key);
            }

            let controller = StoredValue::new_local(controller);
            on_cleanup(move || {
                cancelled.store(true, Ordering::Relaxed);
                controller.try_with_value(|c| c.abort());
                log::debug!("Overview counts aborted");
            });
        }
        Err(e) => {
            log::error!("AbortController unavailable: {:?}", e);
            counts.update(|map| map.values_mut().for_each(|s| *s = CountState::Failed));
        }
    }

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Overview" subtitle=greeting>
                {()}
            </PageHeader>
            <div class="page__content">
                <div class="stat-grid">
                    {tiles.into_iter().map(|tile| {
                        let key = tile.key;
                        let label = tile.label;
                        let value = Signal::derive(move || {
                            counts.with(|m| m.get(key).and_then(|s| s.value()))
                        });
                        let subtitle = Signal::derive(move || {
                            counts.with(|m| match m.get(key) {
                                Some(CountState::Loading) => Some("Loading...".to_string()),
                                Some(CountState::Failed) => Some("Unavailable".to_string()),
                                _ => None,
                            })
                        });
                        view! {
                            <StatCard
                                label=label
                                icon_name=tile.icon
                                value=value
                                subtitle=subtitle
                                on_click=Callback::new(move |_| ctx.open_tab(key, label))
                            />
                        }
                    }).collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_tiles_skip_dashboards() {
        let keys: Vec<_> = count_tiles(UserRole::Coach).into_iter().map(|t| t.key).collect();
        assert_eq!(keys, vec!["a009_schedule", "a010_roster", "a011_attendance_report"]);
        assert!(count_tiles(UserRole::Unknown).is_empty());
        assert!(count_tiles(UserRole::Admin).iter().any(|t| t.key == "sys_users"));
    }

    #[test]
    fn test_count_state_value() {
        assert_eq!(CountState::Loaded(4).value(), Some(4));
        assert_eq!(CountState::Loading.value(), None);
        assert_eq!(CountState::Failed.value(), None);
    }
}
