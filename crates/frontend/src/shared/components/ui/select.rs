use super::label::FieldLabel;
use leptos::prelude::*;

/// Native select over `(value, caption)` pairs.
///
/// With a `placeholder` an empty option is offered first and selected while
/// `value` is "".
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: Option<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    placeholder: Option<String>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let empty_option = placeholder.map(|caption| {
        view! { <option value="" selected=move || value.with(String::is_empty)>{caption}</option> }
    });

    let option_views = move || {
        options
            .get()
            .into_iter()
            .map(|(option_value, caption)| {
                let selected = {
                    let option_value = option_value.clone();
                    move || value.with(|v| *v == option_value)
                };
                view! { <option value=option_value selected=selected>{caption}</option> }
            })
            .collect_view()
    };

    view! {
        <div class="form__group">
            {label.map(|text| view! { <FieldLabel text=text required=required /> })}
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {empty_option}
                {option_views}
            </select>
        </div>
    }
}
