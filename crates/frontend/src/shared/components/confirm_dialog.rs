use super::ui::Button;
use crate::shared::modal_stack::{ModalOptions, ModalStackService};
use leptos::prelude::*;

/// Body of a yes/no dialog rendered inside the modal stack.
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    #[prop(optional, into)]
    confirm_label: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_string());

    view! {
        <div class="confirm-dialog">
            <div class="modal-header">
                <h3 class="modal-title">{title}</h3>
            </div>
            <p class="confirm-dialog__message">{message}</p>
            <div class="modal-footer">
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button variant="danger" on_click=Callback::new(move |_| on_confirm.run(()))>
                    {confirm_label}
                </Button>
            </div>
        </div>
    }
}

/// Ask before a destructive action; `on_confirm` runs after the dialog closes.
pub fn confirm(
    modal: ModalStackService,
    title: impl Into<String>,
    message: impl Into<String>,
    on_confirm: Callback<()>,
) {
    let title = title.into();
    let message = message.into();
    let options = ModalOptions {
        style: Some("max-width: min(420px, 95vw);".to_string()),
        class: Some("confirm-modal".to_string()),
    };
    modal.push(options, move |handle| {
        let on_confirm = {
            let handle = handle.clone();
            Callback::new(move |_| {
                handle.close();
                on_confirm.run(());
            })
        };
        let on_cancel = Callback::new(move |_| handle.close());
        view! {
            <ConfirmDialog
                title=title.clone()
                message=message.clone()
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        }
        .into_any()
    });
}
