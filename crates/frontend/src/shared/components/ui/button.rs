use leptos::prelude::*;

/// CSS class list for a button variant plus any extra classes.
fn button_class(variant: Option<&str>, extra: Option<&str>) -> String {
    let variant = match variant {
        Some("secondary") => "button--secondary",
        Some("danger") => "button--danger",
        Some("ghost") => "button--ghost",
        _ => "button--primary",
    };
    match extra.filter(|c| !c.is_empty()) {
        Some(extra) => format!("button {variant} {extra}"),
        None => format!("button {variant}"),
    }
}

/// Variants: "primary" (default), "secondary", "danger", "ghost".
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: Option<String>,
    #[prop(optional, into)]
    class: Option<String>,
    /// "button" unless given; forms pass "submit"
    #[prop(optional, into)]
    button_type: Option<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant.as_deref(), class.as_deref());
    let button_type = button_type.unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=button_type
            class=class
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::button_class;

    #[test]
    fn test_button_class() {
        assert_eq!(button_class(None, None), "button button--primary");
        assert_eq!(button_class(Some("danger"), Some("")), "button button--danger");
        assert_eq!(
            button_class(Some("secondary"), Some("no-print")),
            "button button--secondary no-print"
        );
    }
}
