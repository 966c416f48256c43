use super::list::ClassLookups;
use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::ui::{to_count, to_optional, Input, NumberInput, Select, Textarea};
use crate::shared::crud::EditorState;
use crate::shared::lookups::{id_value, parse_id};
use contracts::domain::a004_class::aggregate::SportClass;
use leptos::prelude::*;

#[component]
pub fn ClassDetails(
    item: SportClass,
    lookups: ClassLookups,
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
                label="Sport"
                required=true
                placeholder="Select sport"
                options=lookups.sports.options()
                value=Signal::derive(move || form.with(|f| id_value(f.sport_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.sport_id = parse_id(&v)))
            />
            <Select
                label="Category"
                required=true
                placeholder="Select category"
                options=lookups.categories.options()
                value=Signal::derive(move || form.with(|f| id_value(f.category_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.category_id = parse_id(&v)))
            />
            <Select
                label="Branch"
                required=true
                placeholder="Select branch"
                options=lookups.branches.options()
                value=Signal::derive(move || form.with(|f| id_value(f.branch_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.branch_id = parse_id(&v)))
            />
            <Select
                label="Coach"
                placeholder="No coach"
                options=lookups.coaches.options()
                value=Signal::derive(move || form.with(|f| id_value(f.coach_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.coach_id = parse_id(&v)))
            />
            <NumberInput
                label="Capacity"
                value=Signal::derive(move || form.with(|f| f.capacity.map(f64::from)))
                on_input=Callback::new(move |v: Option<f64>| form.update(|f| f.capacity = to_count(v)))
            />
            <NumberInput
                label="Price"
                step="any"
                value=Signal::derive(move || form.with(|f| f.price))
                on_input=Callback::new(move |v: Option<f64>| form.update(|f| f.price = v))
            />
            <Textarea
                label="Description"
                value=Signal::derive(move || form.with(|f| f.description.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.description = to_optional(v)))
            />
        </DetailsForm>
    }
}
