use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::ui::{to_optional, Input, Textarea};
use crate::shared::crud::EditorState;
use contracts::domain::a002_category::aggregate::Category;
use leptos::prelude::*;

#[component]
pub fn CategoryDetails(
    item: Category,
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
            <Textarea
                label="Description"
                value=Signal::derive(move || form.with(|f| f.description.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.description = to_optional(v)))
            />
        </DetailsForm>
    }
}
