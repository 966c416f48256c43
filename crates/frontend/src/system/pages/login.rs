use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_client::ApiError;
use crate::shared::components::ui::{Button, Input};
use crate::shared::notifications::use_notifications;
use crate::system::auth::{api, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let notify = use_notifications();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if email_val.is_empty() || password_val.is_empty() {
            notify.error("Email and password are required");
            return;
        }

        is_loading.set(true);
        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    // Publishing the session swaps the login page for the shell
                    auth.sign_in(response.token, response.user);
                }
                Err(ApiError::Unauthorized) => {
                    notify.error("Invalid email or password");
                }
                Err(e) => notify.api_error("Login failed", &e),
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Playpro Academy"</h1>
                <h2>"Sign in to the admin dashboard"</h2>

                <form on:submit=on_submit>
                    <Input
                        label="Email"
                        input_type="email"
                        autocomplete="username"
                        placeholder="admin@playpro.id"
                        required=true
                        disabled=Signal::derive(move || is_loading.get())
                        value=email
                        on_input=Callback::new(move |v: String| email.set(v))
                    />
                    <Input
                        label="Password"
                        input_type="password"
                        autocomplete="current-password"
                        required=true
                        disabled=Signal::derive(move || is_loading.get())
                        value=password
                        on_input=Callback::new(move |v: String| password.set(v))
                    />
                    <Button
                        button_type="submit"
                        class="login-submit"
                        disabled=Signal::derive(move || is_loading.get())
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
