use super::label::FieldLabel;
use leptos::html;
use leptos::prelude::*;
use web_sys::File;

/// Image picker. The chosen file is read from `node_ref` when the form is
/// saved; the current photo is previewed until then.
#[component]
pub fn FileInput(
    #[prop(into)]
    label: String,
    node_ref: NodeRef<html::Input>,
    #[prop(optional, into)]
    current_url: Option<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <FieldLabel text=label />
            {current_url.map(|url| view! {
                <img class="form__photo-preview" src=url alt="Current photo" />
            })}
            <input class="form__file" type="file" accept="image/*" node_ref=node_ref />
        </div>
    }
}

/// First file selected in a file input, if any.
pub fn selected_file(node_ref: NodeRef<html::Input>) -> Option<File> {
    node_ref
        .get_untracked()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}
