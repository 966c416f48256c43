//! Tab content registry: tab key to view.
//!
//! Keys the signed-in role may not open render an access notice instead of
//! the page, so a hand-edited `?active=` cannot bypass the menu.

use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::dashboards::d401_attendance_report::ui::AttendanceReportDashboard;
use crate::dashboards::d402_monthly_report::ui::MonthlyReportDashboard;
use crate::domain::a001_branch::ui::list::BranchList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_sport::ui::list::SportList;
use crate::domain::a004_class::ui::list::ClassList;
use crate::domain::a005_coach::ui::list::CoachList;
use crate::domain::a006_play_kid::ui::list::PlayKidList;
use crate::domain::a007_product::ui::list::ProductList;
use crate::domain::a008_venue::ui::list::VenueList;
use crate::domain::a009_schedule::ui::list::ScheduleList;
use crate::domain::a010_roster::ui::list::RosterList;
use crate::domain::a011_attendance_report::ui::list::AttendanceList;
use crate::layout::left::menu::can_open;
use crate::system::auth::context::use_auth;
use crate::system::users::ui::list::UserList;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    let role = use_auth().state().with_untracked(|s| s.role());
    if !can_open(key, role) {
        log::warn!("Tab '{}' is not available for role '{}'", key, role.as_str());
        return view! {
            <div class="placeholder">"You do not have access to this page"</div>
        }
        .into_any();
    }

    match key {
        // Dashboards
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),
        "d401_attendance_report" => view! { <AttendanceReportDashboard /> }.into_any(),
        "d402_monthly_report" => view! { <MonthlyReportDashboard /> }.into_any(),

        // Resources
        "a001_branch" => view! { <BranchList /> }.into_any(),
        "a002_category" => view! { <CategoryList /> }.into_any(),
        "a003_sport" => view! { <SportList /> }.into_any(),
        "a004_class" => view! { <ClassList /> }.into_any(),
        "a005_coach" => view! { <CoachList /> }.into_any(),
        "a006_play_kid" => view! { <PlayKidList /> }.into_any(),
        "a007_product" => view! { <ProductList /> }.into_any(),
        "a008_venue" => view! { <VenueList /> }.into_any(),
        "a009_schedule" => view! { <ScheduleList /> }.into_any(),
        "a010_roster" => view! { <RosterList /> }.into_any(),
        "a011_attendance_report" => view! { <AttendanceList /> }.into_any(),

        // System
        "sys_users" => view! { <UserList /> }.into_any(),

        _ => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}
