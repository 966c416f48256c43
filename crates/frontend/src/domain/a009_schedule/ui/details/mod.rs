use super::list::ScheduleLookups;
use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::ui::{Input, Select};
use crate::shared::crud::EditorState;
use crate::shared::lookups::{id_value, parse_id};
use contracts::domain::a009_schedule::aggregate::{short_time, Schedule, Weekday};
use leptos::prelude::*;

fn weekday_options() -> Vec<(String, String)> {
    Weekday::all()
        .iter()
        .map(|d| (d.as_str().to_string(), d.display_name().to_string()))
        .collect()
}

#[component]
pub fn ScheduleDetails(
    item: Schedule,
    lookups: ScheduleLookups,
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
                label="Class"
                required=true
                placeholder="Select class"
                options=lookups.classes.options()
                value=Signal::derive(move || form.with(|f| id_value(f.class_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.class_id = parse_id(&v)))
            />
            <Select
                label="Venue"
                required=true
                placeholder="Select venue"
                options=lookups.venues.options()
                value=Signal::derive(move || form.with(|f| id_value(f.venue_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.venue_id = parse_id(&v)))
            />
            <Select
                label="Coach"
                placeholder="No coach"
                options=lookups.coaches.options()
                value=Signal::derive(move || form.with(|f| id_value(f.coach_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.coach_id = parse_id(&v)))
            />
            <Select
                label="Day"
                required=true
                placeholder="Select day"
                options=Signal::derive(weekday_options)
                value=Signal::derive(move || {
                    form.with(|f| f.day_of_week.map(|d| d.as_str().to_string()).unwrap_or_default())
                })
                on_change=Callback::new(move |v: String| form.update(|f| f.day_of_week = Weekday::from_str(&v)))
            />
            <Input
                label="Start time"
                input_type="time"
                required=true
                value=Signal::derive(move || form.with(|f| short_time(&f.start_time).to_string()))
                on_input=Callback::new(move |v: String| form.update(|f| f.start_time = v))
            />
            <Input
                label="End time"
                input_type="time"
                required=true
                value=Signal::derive(move || form.with(|f| short_time(&f.end_time).to_string()))
                on_input=Callback::new(move |v: String| form.update(|f| f.end_time = v))
            />
        </DetailsForm>
    }
}
