use super::list::AttendanceLookups;
use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::ui::{to_optional, Input, Select, Textarea};
use crate::shared::crud::EditorState;
use crate::shared::date_utils::{date_input_value, parse_date_input};
use crate::shared::lookups::{id_value, parse_id};
use contracts::domain::a011_attendance_report::aggregate::{AttendanceReport, AttendanceStatus};
use leptos::prelude::*;

fn status_options() -> Vec<(String, String)> {
    AttendanceStatus::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.display_name().to_string()))
        .collect()
}

#[component]
pub fn AttendanceDetails(
    item: AttendanceReport,
    lookups: AttendanceLookups,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = EditorState::new(item);
    let form = vm.form;

    view! {
        <DetailsForm
            title=vm.title()
            saving=vm.saving
            on_save=Callback::new(move |_| vm.save_command(None, on_saved))
            on_cancel=on_cancel
        >
            <Select
                label="Play kid"
                required=true
                placeholder="Select play kid"
                options=lookups.play_kids.options()
                value=Signal::derive(move || form.with(|f| id_value(f.play_kid_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.play_kid_id = parse_id(&v)))
            />
            <Select
                label="Session"
                required=true
                placeholder="Select schedule"
                options=lookups.schedules.options()
                value=Signal::derive(move || form.with(|f| id_value(f.schedule_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.schedule_id = parse_id(&v)))
            />
            <Select
                label="Coach"
                placeholder="No coach"
                options=lookups.coaches.options()
                value=Signal::derive(move || form.with(|f| id_value(f.coach_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.coach_id = parse_id(&v)))
            />
            <Input
                label="Date"
                input_type="date"
                required=true
                value=Signal::derive(move || form.with(|f| date_input_value(f.date)))
                on_input=Callback::new(move |v: String| form.update(|f| f.date = parse_date_input(&v)))
            />
            <Select
                label="Status"
                required=true
                options=Signal::derive(status_options)
                value=Signal::derive(move || form.with(|f| f.status.as_str().to_string()))
                on_change=Callback::new(move |v: String| form.update(|f| f.status = AttendanceStatus::from_str(&v)))
            />
            <Textarea
                label="Notes"
                value=Signal::derive(move || form.with(|f| f.notes.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.notes = to_optional(v)))
            />
        </DetailsForm>
    }
}
