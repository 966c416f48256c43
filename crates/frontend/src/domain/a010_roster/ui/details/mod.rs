use super::list::RosterLookups;
use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::ui::{Input, Select};
use crate::shared::crud::EditorState;
use crate::shared::date_utils::{date_input_value, parse_date_input};
use crate::shared::lookups::{id_value, parse_id};
use contracts::domain::a010_roster::aggregate::{Roster, RosterStatus};
use leptos::prelude::*;

fn status_options() -> Vec<(String, String)> {
    RosterStatus::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.display_name().to_string()))
        .collect()
}

#[component]
pub fn RosterDetails(
    item: Roster,
    lookups: RosterLookups,
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
                label="Class"
                required=true
                placeholder="Select class"
                options=lookups.classes.options()
                value=Signal::derive(move || form.with(|f| id_value(f.class_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.class_id = parse_id(&v)))
            />
            <Select
                label="Product"
                placeholder="No product"
                options=lookups.products.options()
                value=Signal::derive(move || form.with(|f| id_value(f.product_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.product_id = parse_id(&v)))
            />
            <Input
                label="Start date"
                input_type="date"
                required=true
                value=Signal::derive(move || form.with(|f| date_input_value(f.start_date)))
                on_input=Callback::new(move |v: String| form.update(|f| f.start_date = parse_date_input(&v)))
            />
            <Input
                label="End date"
                input_type="date"
                value=Signal::derive(move || form.with(|f| date_input_value(f.end_date)))
                on_input=Callback::new(move |v: String| form.update(|f| f.end_date = parse_date_input(&v)))
            />
            <Select
                label="Status"
                options=Signal::derive(status_options)
                value=Signal::derive(move || form.with(|f| f.status.as_str().to_string()))
                on_change=Callback::new(move |v: String| form.update(|f| f.status = RosterStatus::from_str(&v)))
            />
        </DetailsForm>
    }
}
