use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::ui::{to_optional, Input, Select};
use crate::shared::crud::EditorState;
use contracts::system::auth::UserRole;
use contracts::system::users::User;
use leptos::prelude::*;

fn role_options() -> Vec<(String, String)> {
    UserRole::assignable()
        .iter()
        .map(|r| (r.as_str().to_string(), r.display_name().to_string()))
        .collect()
}

#[component]
pub fn UserDetails(item: User, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = EditorState::new(item);
    let form = vm.form;
    let is_edit = vm.is_edit_mode();
    let password_label = if is_edit {
        "New password (leave blank to keep)"
    } else {
        "Password"
    };

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
                label="Email"
                input_type="email"
                required=true
                autocomplete="off"
                value=Signal::derive(move || form.with(|f| f.email.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
            />
            <Select
                label="Role"
                required=true
                placeholder="Select role"
                options=Signal::derive(role_options)
                value=Signal::derive(move || {
                    form.with(|f| match f.role {
                        UserRole::Unknown => String::new(),
                        role => role.as_str().to_string(),
                    })
                })
                on_change=Callback::new(move |v: String| form.update(|f| f.role = UserRole::from_str(&v)))
            />
            <Input
                label=password_label
                input_type="password"
                required=!is_edit
                autocomplete="new-password"
                value=Signal::derive(move || form.with(|f| f.password.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.password = to_optional(v)))
            />
        </DetailsForm>
    }
}
