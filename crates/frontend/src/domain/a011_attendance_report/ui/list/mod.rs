use super::details::AttendanceDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::crud::ResourceStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::date_utils::date_input_value;
use crate::shared::icons::icon;
use crate::shared::lookups::Lookup;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_coach::aggregate::Coach;
use contracts::domain::a006_play_kid::aggregate::PlayKid;
use contracts::domain::a009_schedule::aggregate::Schedule;
use contracts::domain::a011_attendance_report::aggregate::AttendanceReport;
use contracts::domain::common::Resource;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AttendanceLookups {
    pub play_kids: Lookup<PlayKid>,
    pub schedules: Lookup<Schedule>,
    pub coaches: Lookup<Coach>,
}

fn columns(lk: AttendanceLookups) -> Vec<Column<AttendanceReport>> {
    vec![
        Column::new("date", "Date", |a: &AttendanceReport| date_input_value(a.date)),
        Column::new("play_kid", "Play kid", move |a: &AttendanceReport| {
            lk.play_kids.name_of(a.play_kid_id)
        }),
        Column::new("schedule", "Session", move |a: &AttendanceReport| {
            lk.schedules.name_of(a.schedule_id)
        })
        .filterable(),
        Column::new("coach", "Coach", move |a: &AttendanceReport| lk.coaches.name_of(a.coach_id))
            .filterable(),
        Column::new("status", "Status", |a: &AttendanceReport| a.status.display_name())
            .filterable(),
        Column::new("notes", "Notes", |a: &AttendanceReport| a.notes.clone()).unsortable(),
    ]
}

#[component]
pub fn AttendanceList() -> impl IntoView {
    let store = ResourceStore::<AttendanceReport>::new();
    let lookups = AttendanceLookups {
        play_kids: Lookup::load(),
        schedules: Lookup::load(),
        coaches: Lookup::load(),
    };

    let open_editor = move |item: AttendanceReport| {
        store.open_editor(item, move |item, on_saved, on_cancel| {
            view! {
                <AttendanceDetails item=item lookups=lookups on_saved=on_saved on_cancel=on_cancel />
            }
            .into_any()
        });
    };

    view! {
        <PageFrame page_id="a011_attendance_report--list" category=PAGE_CAT_LIST>
            <PageHeader title=AttendanceReport::LIST_NAME>
                <Button on_click=Callback::new(move |_| open_editor(AttendanceReport::default()))>
                    {icon("plus")}
                    " Record Attendance"
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
                    on_delete=Callback::new(move |a: AttendanceReport| store.delete(a))
                    search_placeholder="Search attendance..."
                />
            </div>
        </PageFrame>
    }
}
