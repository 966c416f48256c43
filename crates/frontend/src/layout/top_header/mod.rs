//! Top navigation bar: sidebar toggle, brand, signed-in user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();
    let state = auth.state();

    let toggle_sidebar = move |_| ctx.toggle_left();

    let logout = move |_| {
        ctx.close_all();
        auth.sign_out();
    };

    let is_sidebar_visible = move || ctx.left_open.get();
    let user_name = move || {
        state.with(|s| {
            s.session
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_else(|| "Guest".to_string())
        })
    };
    let role_name = move || state.with(|s| s.role().display_name());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Playpro Academy"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_name}</span>
                    <span class="top-header__role">{role_name}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
