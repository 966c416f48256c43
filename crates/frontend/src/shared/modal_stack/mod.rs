//! Stack of open dialogs (resource forms, confirmations).
//!
//! Escape and overlay clicks close only the topmost entry. Closing is
//! deferred one tick so a dialog can close itself from its own click handler.

use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

type Builder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

/// Surface overrides for one dialog
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalOptions {
    pub style: Option<String>,
    pub class: Option<String>,
}

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: Builder,
    options: ModalOptions,
}

/// Lets a dialog close itself.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    /// Open a dialog on top of the stack; `builder` gets its handle.
    pub fn push<F>(&self, options: ModalOptions, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let entry = ModalEntry {
            id,
            builder: Arc::new(builder),
            options,
        };
        self.stack.update(|s| s.push(entry));
        log::debug!("Modal {} opened ({} on stack)", id, self.stack.with_untracked(|s| s.len()));

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| {
            svc.stack.update(|s| {
                s.pop();
            })
        });
    }

    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the stack. Mounted once at the app root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .map(|k| k.key() == "Escape")
                .unwrap_or(false);
            if is_escape && svc.stack.with_untracked(|s| !s.is_empty()) {
                svc.pop_deferred();
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // Lives as long as the app
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()}
                key={|(_, entry): &(usize, ModalEntry)| entry.id}
                children={move |(idx, entry): (usize, ModalEntry)| {
                    let id = entry.id;
                    let on_close = Callback::new(move |_| svc.close_deferred(id));
                    let content = (entry.builder)(ModalHandle { id, svc });

                    view! {
                        <ModalFrame
                            z_index=1000 + idx as i32
                            on_close=on_close
                            modal_style=entry.options.style.unwrap_or_default()
                            modal_class=entry.options.class.unwrap_or_default()
                        >
                            {content}
                        </ModalFrame>
                    }
                }}
            />
        </Show>
    }
}
