use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::notifications::{NotificationService, ToastHost};
use crate::system::auth::context::AuthContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);
    provide_context(NotificationService::new(auth));
    provide_context(ModalStackService::new());
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
        <ModalHost />
        <ToastHost />
    }
}
