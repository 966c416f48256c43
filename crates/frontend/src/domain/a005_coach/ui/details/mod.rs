use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::ui::{
    selected_file, to_optional, FileInput, Input, Select, Textarea,
};
use crate::shared::crud::EditorState;
use crate::shared::lookups::{id_value, parse_id, Lookup};
use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::a003_sport::aggregate::Sport;
use contracts::domain::a005_coach::aggregate::Coach;
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn CoachDetails(
    item: Coach,
    sports: Lookup<Sport>,
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
                label="Email"
                input_type="email"
                required=true
                value=Signal::derive(move || form.with(|f| f.email.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
            />
            <Input
                label="Phone"
                input_type="tel"
                value=Signal::derive(move || form.with(|f| f.phone.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.phone = to_optional(v)))
            />
            <Select
                label="Sport"
                placeholder="No sport"
                options=sports.options()
                value=Signal::derive(move || form.with(|f| id_value(f.sport_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.sport_id = parse_id(&v)))
            />
            <Select
                label="Branch"
                placeholder="No branch"
                options=branches.options()
                value=Signal::derive(move || form.with(|f| id_value(f.branch_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.branch_id = parse_id(&v)))
            />
            <Textarea
                label="Bio"
                rows=4
                value=Signal::derive(move || form.with(|f| f.bio.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.bio = to_optional(v)))
            />
            {match current_photo {
                Some(url) => view! { <FileInput label="Photo" node_ref=photo_ref current_url=url /> }.into_any(),
                None => view! { <FileInput label="Photo" node_ref=photo_ref /> }.into_any(),
            }}
        </DetailsForm>
    }
}
