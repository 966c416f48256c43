use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::ui::{to_count, to_optional, Input, NumberInput, Select};
use crate::shared::crud::EditorState;
use crate::shared::lookups::{id_value, parse_id, Lookup};
use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::a008_venue::aggregate::Venue;
use leptos::prelude::*;

#[component]
pub fn VenueDetails(
    item: Venue,
    branches: Lookup<Branch>,
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
            <Input
                label="Name"
                required=true
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
            />
            <Select
                label="Branch"
                required=true
                placeholder="Select branch"
                options=branches.options()
                value=Signal::derive(move || form.with(|f| id_value(f.branch_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.branch_id = parse_id(&v)))
            />
            <Input
                label="Address"
                value=Signal::derive(move || form.with(|f| f.address.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.address = to_optional(v)))
            />
            <NumberInput
                label="Capacity"
                value=Signal::derive(move || form.with(|f| f.capacity.map(f64::from)))
                on_input=Callback::new(move |v: Option<f64>| form.update(|f| f.capacity = to_count(v)))
            />
        </DetailsForm>
    }
}
