//! List and form state shared by every resource page.
//!
//! A page creates one [`ResourceStore`] for its list and one [`EditorState`]
//! per open form. Mutations go through the store's notification service so
//! that failures always surface as a toast and leave the list untouched.

use crate::shared::api_client::{self, ApiError};
use crate::shared::components::confirm_dialog::confirm;
use crate::shared::modal_stack::{ModalOptions, ModalStackService};
use crate::shared::notifications::{use_notifications, NotificationService};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

const FORM_MODAL_STYLE: &str = "max-width: min(760px, 95vw); width: min(760px, 95vw);";

/// Items of one resource plus the commands that mutate them.
pub struct ResourceStore<R: Resource> {
    pub items: RwSignal<Vec<R>>,
    pub loading: RwSignal<bool>,
    notify: NotificationService,
    modal: ModalStackService,
}

impl<R: Resource> Clone for ResourceStore<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ResourceStore<R> {}

impl<R: Resource> ResourceStore<R> {
    /// Create the store and fetch the list once.
    pub fn new() -> Self {
        let store = Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            notify: use_notifications(),
            modal: use_context::<ModalStackService>()
                .expect("ModalStackService not found in context"),
        };
        store.refetch();
        store
    }

    pub fn refetch(&self) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match api_client::fetch_all::<R>().await {
                Ok(items) => {
                    log::debug!("Loaded {} {}", items.len(), R::LIST_NAME);
                    this.items.set(items);
                }
                Err(e) => this
                    .notify
                    .api_error(&format!("Failed to load {}", R::LIST_NAME), &e),
            }
            this.loading.set(false);
        });
    }

    /// Open a create/edit form in the modal stack.
    ///
    /// `render` receives the item to edit plus `on_saved` (closes the form and
    /// refetches) and `on_cancel`.
    pub fn open_editor<F>(&self, item: R, render: F)
    where
        F: Fn(R, Callback<()>, Callback<()>) -> AnyView + Send + Sync + 'static,
    {
        let this = *self;
        let options = ModalOptions {
            style: Some(FORM_MODAL_STYLE.to_string()),
            class: Some("resource-form-modal".to_string()),
        };
        self.modal.push(options, move |handle| {
            let on_saved = {
                let handle = handle.clone();
                Callback::new(move |_| {
                    handle.close();
                    this.refetch();
                })
            };
            let on_cancel = Callback::new(move |_| handle.close());
            provide_context(this);
            render(item.clone(), on_saved, on_cancel)
        });
    }

    /// Ask for confirmation, then `DELETE` the item and refetch.
    pub fn delete(&self, item: R) {
        let Some(id) = item.id() else {
            return;
        };
        let this = *self;
        let message = format!(
            "Delete {} \"{}\"? This cannot be undone.",
            R::ELEMENT_NAME.to_lowercase(),
            item.label()
        );
        confirm(
            self.modal,
            format!("Delete {}", R::ELEMENT_NAME),
            message,
            Callback::new(move |_| {
                spawn_local(async move {
                    match api_client::remove::<R>(id).await {
                        Ok(()) => {
                            this.notify.success(format!("{} deleted", R::ELEMENT_NAME));
                            this.refetch();
                        }
                        Err(e) => this
                            .notify
                            .api_error(&format!("Failed to delete {}", R::ELEMENT_NAME), &e),
                    }
                });
            }),
        );
    }
}

/// Form state of one create/edit dialog.
pub struct EditorState<R: Resource> {
    pub form: RwSignal<R>,
    pub saving: RwSignal<bool>,
    notify: NotificationService,
    list: Option<ResourceStore<R>>,
}

impl<R: Resource> Clone for EditorState<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for EditorState<R> {}

impl<R: Resource> EditorState<R> {
    pub fn new(initial: R) -> Self {
        Self {
            form: RwSignal::new(initial),
            saving: RwSignal::new(false),
            notify: use_notifications(),
            list: use_context::<ResourceStore<R>>(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.id().is_some())
    }

    pub fn title(&self) -> String {
        if self.is_edit_mode() {
            format!("Edit {}", R::ELEMENT_NAME)
        } else {
            format!("New {}", R::ELEMENT_NAME)
        }
    }

    /// Validate, then POST/PUT (multipart when a photo is attached).
    pub fn save_command(&self, photo: Option<File>, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        if let Err(message) = current.validate() {
            self.notify.error(message);
            return;
        }

        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            let result: Result<(), ApiError> = api_client::save_with_photo(&current, photo).await;
            this.saving.try_set(false);
            match result {
                Ok(()) => {
                    this.notify.success(format!("{} saved", R::ELEMENT_NAME));
                    run_or_fallback(on_saved, || {
                        log::debug!("{} form closed before save finished", R::ELEMENT_NAME);
                        if let Some(list) = this.list {
                            list.refetch();
                        }
                    });
                }
                Err(e) => this
                    .notify
                    .api_error(&format!("Failed to save {}", R::ELEMENT_NAME), &e),
            }
        });
    }
}

/// Runs `on_saved`, or `fallback` when its owner (the form) is already gone.
fn run_or_fallback(on_saved: Callback<()>, fallback: impl FnOnce()) {
    if on_saved.try_run(()).is_none() {
        fallback();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn flag_callback(owner: &Owner, flag: &Arc<AtomicBool>) -> Callback<()> {
        let flag = Arc::clone(flag);
        owner.with(|| Callback::new(move |_| flag.store(true, Ordering::SeqCst)))
    }

    #[test]
    fn test_open_form_runs_on_saved() {
        let owner = Owner::new();
        let saved = Arc::new(AtomicBool::new(false));
        let on_saved = flag_callback(&owner, &saved);

        let mut fell_back = false;
        run_or_fallback(on_saved, || fell_back = true);

        assert!(saved.load(Ordering::SeqCst));
        assert!(!fell_back);
    }

    #[test]
    fn test_closed_form_falls_back_instead_of_panicking() {
        let owner = Owner::new();
        let saved = Arc::new(AtomicBool::new(false));
        let on_saved = flag_callback(&owner, &saved);
        owner.cleanup();

        let mut fell_back = false;
        run_or_fallback(on_saved, || fell_back = true);

        assert!(!saved.load(Ordering::SeqCst));
        assert!(fell_back);
    }
}
