use leptos::prelude::*;

fn badge_class(variant: Option<&str>) -> &'static str {
    match variant {
        Some("primary") => "badge badge--primary",
        Some("success") => "badge badge--success",
        Some("warning") => "badge badge--warning",
        Some("error") => "badge badge--error",
        _ => "badge badge--neutral",
    }
}

/// Inline status pill; unknown variants render neutral.
#[component]
pub fn Badge(
    #[prop(optional, into)]
    variant: Option<String>,
    children: Children,
) -> impl IntoView {
    view! { <span class=badge_class(variant.as_deref())>{children()}</span> }
}

#[cfg(test)]
mod tests {
    use super::badge_class;

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class(Some("success")), "badge badge--success");
        assert_eq!(badge_class(Some("purple")), "badge badge--neutral");
        assert_eq!(badge_class(None), "badge badge--neutral");
    }
}
