use leptos::prelude::*;

/// Title row of a tab page; children render as the action buttons.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|text| view! { <p class="page-header__subtitle">{text}</p> })}
            </div>
            <div class="page-header__actions no-print">{children()}</div>
        </header>
    }
}
