use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::ui::{selected_file, to_optional, FileInput, Input, Select};
use crate::shared::crud::EditorState;
use crate::shared::date_utils::{date_input_value, parse_date_input};
use crate::shared::lookups::{id_value, parse_id, Lookup};
use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::a006_play_kid::aggregate::{Gender, PlayKid};
use leptos::html;
use leptos::prelude::*;

fn gender_options() -> Vec<(String, String)> {
    Gender::all()
        .iter()
        .map(|g| (g.as_str().to_string(), g.display_name().to_string()))
        .collect()
}

#[component]
pub fn PlayKidDetails(
    item: PlayKid,
    branches: Lookup<Branch>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let current_photo = item.photo_url.clone();
    let vm = EditorState::new(item);
    let form = vm.form;
    let photo_ref = NodeRef::<html::Input>::new();

    view! {
        <DetailsForm
            title=vm.title()
            saving=vm.saving
            on_save=Callback::new(move |_| vm.save_command(selected_file(photo_ref), on_saved))
            on_cancel=on_cancel
        >
            <Input
                label="Name"
                required=true
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
            />
            <Input
                label="Birth date"
                input_type="date"
                value=Signal::derive(move || form.with(|f| date_input_value(f.birth_date)))
                on_input=Callback::new(move |v: String| form.update(|f| f.birth_date = parse_date_input(&v)))
            />
            <Select
                label="Gender"
                placeholder="Not specified"
                options=Signal::derive(gender_options)
                value=Signal::derive(move || {
                    form.with(|f| f.gender.map(|g| g.as_str().to_string()).unwrap_or_default())
                })
                on_change=Callback::new(move |v: String| form.update(|f| f.gender = Gender::from_str(&v)))
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
                label="Parent name"
                value=Signal::derive(move || form.with(|f| f.parent_name.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.parent_name = to_optional(v)))
            />
            <Input
                label="Parent phone"
                input_type="tel"
                value=Signal::derive(move || form.with(|f| f.parent_phone.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.parent_phone = to_optional(v)))
            />
            {match current_photo {
                Some(url) => view! { <FileInput label="Photo" node_ref=photo_ref current_url=url /> }.into_any(),
                None => view! { <FileInput label="Photo" node_ref=photo_ref /> }.into_any(),
            }}
        </DetailsForm>
    }
}
