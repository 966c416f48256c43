use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::ui::{to_optional, Input, Select, Textarea};
use crate::shared::crud::EditorState;
use crate::shared::lookups::{id_value, parse_id, Lookup};
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a003_sport::aggregate::Sport;
use leptos::prelude::*;

#[component]
pub fn SportDetails(
    item: Sport,
    categories: Lookup<Category>,
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
                label="Category"
                required=true
                placeholder="Select category"
                options=categories.options()
                value=Signal::derive(move || form.with(|f| id_value(f.category_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.category_id = parse_id(&v)))
            />
            <Textarea
                label="Description"
                value=Signal::derive(move || form.with(|f| f.description.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.description = to_optional(v)))
            />
        </DetailsForm>
    }
}
