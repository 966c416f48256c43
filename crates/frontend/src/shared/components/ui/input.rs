use super::label::FieldLabel;
use leptos::prelude::*;

/// Text-like input with label: "text" (default), "email", "password", "tel",
/// "date", "time", "month".
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: Option<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {label.map(|text| view! { <FieldLabel text=text required=required /> })}
            <input
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                autocomplete=input_autocomplete
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}

/// Bind an optional text field: blank input stores `None`.
pub fn to_optional(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Parse a number input; blank or invalid text clears the value.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Whole non-negative count from a number input value.
pub fn to_count(value: Option<f64>) -> Option<u32> {
    value.map(|n| n.max(0.0).min(u32::MAX as f64).round() as u32)
}

/// Numeric input bound to an optional value.
#[component]
pub fn NumberInput(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<Option<f64>>,
    on_input: Callback<Option<f64>>,
    #[prop(optional)]
    required: bool,
    /// `step` attribute, "1" unless given
    #[prop(optional, into)]
    step: Option<String>,
) -> impl IntoView {
    let step = step.unwrap_or_else(|| "1".to_string());

    view! {
        <div class="form__group">
            <FieldLabel text=label required=required />
            <input
                class="form__input"
                type="number"
                min="0"
                step=step
                prop:value=move || value.get().map(|n| n.to_string()).unwrap_or_default()
                on:input=move |ev| on_input.run(parse_number(&event_target_value(&ev)))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_number, to_count, to_optional};

    #[test]
    fn test_blank_text_is_none() {
        assert_eq!(to_optional("  ".to_string()), None);
        assert_eq!(to_optional("Jakarta".to_string()), Some("Jakarta".to_string()));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 150000 "), Some(150000.0));
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_to_count() {
        assert_eq!(to_count(Some(12.4)), Some(12));
        assert_eq!(to_count(Some(-3.0)), Some(0));
        assert_eq!(to_count(None), None);
    }
}
