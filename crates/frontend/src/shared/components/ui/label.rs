use leptos::prelude::*;

/// Field caption; required fields get a trailing marker.
#[component]
pub fn FieldLabel(
    #[prop(into)]
    text: String,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <label class="form__label">
            {text}
            {required.then(|| view! { <span class="form__required">" *"</span> })}
        </label>
    }
}
