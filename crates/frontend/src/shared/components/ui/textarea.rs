use super::label::FieldLabel;
use leptos::prelude::*;

/// Multi-line text spanning the full form width.
#[component]
pub fn Textarea(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// Visible lines, 3 unless given
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    view! {
        <div class="form__group form__group--wide">
            <FieldLabel text=label />
            <textarea
                class="form__textarea"
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
