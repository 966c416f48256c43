use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::ui::{to_optional, Input};
use crate::shared::crud::EditorState;
use contracts::domain::a001_branch::aggregate::Branch;
use leptos::prelude::*;

#[component]
pub fn BranchDetails(
    item: Branch,
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
            <Input
                label="City"
                value=Signal::derive(move || form.with(|f| f.city.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.city = to_optional(v)))
            />
            <Input
                label="Address"
                value=Signal::derive(move || form.with(|f| f.address.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.address = to_optional(v)))
            />
            <Input
                label="Phone"
                input_type="tel"
                value=Signal::derive(move || form.with(|f| f.phone.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.phone = to_optional(v)))
            />
        </DetailsForm>
    }
}
