use super::details::ScheduleDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::crud::ResourceStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::icons::icon;
use crate::shared::lookups::Lookup;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_class::aggregate::SportClass;
use contracts::domain::a005_coach::aggregate::Coach;
use contracts::domain::a008_venue::aggregate::Venue;
use contracts::domain::a009_schedule::aggregate::{short_time, Schedule};
use contracts::domain::common::Resource;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ScheduleLookups {
    pub classes: Lookup<SportClass>,
    pub venues: Lookup<Venue>,
    pub coaches: Lookup<Coach>,
}

fn columns(lk: ScheduleLookups) -> Vec<Column<Schedule>> {
    vec![
        Column::new("class", "Class", move |s: &Schedule| lk.classes.name_of(s.class_id))
            .filterable(),
        Column::new("day", "Day", |s: &Schedule| {
            s.day_of_week.map(|d| d.display_name().to_string())
        })
        .filterable(),
        Column::new("start", "Start", |s: &Schedule| short_time(&s.start_time).to_string()),
        Column::new("end", "End", |s: &Schedule| short_time(&s.end_time).to_string()),
        Column::new("venue", "Venue", move |s: &Schedule| lk.venues.name_of(s.venue_id))
            .filterable(),
        Column::new("coach", "Coach", move |s: &Schedule| lk.coaches.name_of(s.coach_id))
            .filterable(),
    ]
}

#[component]
pub fn ScheduleList() -> impl IntoView {
    let store = ResourceStore::<Schedule>::new();
    let lookups = ScheduleLookups {
        classes: Lookup::load(),
        venues: Lookup::load(),
        coaches: Lookup::load(),
    };

    let open_editor = move |item: Schedule| {
        store.open_editor(item, move |item, on_saved, on_cancel| {
            view! {
                <ScheduleDetails item=item lookups=lookups on_saved=on_saved on_cancel=on_cancel />
            }
            .into_any()
        });
    };

    view! {
        <PageFrame page_id="a009_schedule--list" category=PAGE_CAT_LIST>
            <PageHeader title=Schedule::LIST_NAME>
                <Button on_click=Callback::new(move |_| open_editor(Schedule::default()))>
                    {icon("plus")}
                    " New Schedule"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| store.refetch())>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>
            <div class="page__content">
                <DataTable
                    rows=store.items
                    columns=columns(lookups)
                    loading=store.loading
                    on_edit=Callback::new(open_editor)
                    on_delete=Callback::new(move |s: Schedule| store.delete(s))
                    search_placeholder="Search schedules..."
                />
            </div>
        </PageFrame>
    }
}
