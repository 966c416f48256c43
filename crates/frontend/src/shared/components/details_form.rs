use super::ui::Button;
use leptos::prelude::*;

/// Frame of a create/edit form: compact header, field grid and save/cancel
/// footer. The same layout is used for every resource.
#[component]
pub fn DetailsForm(
    #[prop(into)]
    title: Signal<String>,
    /// Disables the submit button while a save is in flight
    #[prop(into)]
    saving: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <form
            class="details-form"
            on:submit=move |ev| {
                ev.prevent_default();
                if !saving.get_untracked() {
                    on_save.run(());
                }
            }
        >
            <div class="modal-header">
                <h3 class="modal-title">{move || title.get()}</h3>
            </div>
            <div class="details-form__body">{children()}</div>
            <div class="modal-footer">
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button button_type="submit" disabled=saving>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </form>
    }
}
