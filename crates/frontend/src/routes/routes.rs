use super::guard::{decide, RouteDecision};
use crate::layout::center::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::modal_stack::ModalStackService;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use web_sys::window;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Rewrite the address bar without a reload; the view follows the session.
fn replace_path(path: &str) {
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            if let Err(e) =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
            {
                log::warn!("Failed to redirect to {}: {:?}", path, e);
            }
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let state = use_auth().state();
    let authenticated = Memo::new(move |_| state.with(|s| s.is_authenticated()));
    let modal = use_context::<ModalStackService>();

    Effect::new(move |_| {
        let signed_in = authenticated.get();
        if !signed_in {
            // Forms of the previous session must not outlive it
            if let Some(modal) = modal {
                modal.clear();
            }
        }
        let path = current_path();
        if let RouteDecision::Redirect(target) = decide(&path, signed_in) {
            log::debug!("Route guard: {} -> {}", path, target);
            replace_path(target);
        }
    });

    view! {
        <Show when=move || authenticated.get() fallback=|| view! { <LoginPage /> }>
            <MainLayout />
        </Show>
    }
}
