use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn is_direct_target(ev: &ev::MouseEvent) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    }
}

/// Overlay plus positioned surface. Renders no header or buttons of its own;
/// forms bring their own.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    z_index: i32,
    #[prop(optional, into)]
    modal_class: String,
    #[prop(optional, into)]
    modal_style: String,
    children: Children,
) -> impl IntoView {
    // Close only when both press and release hit the overlay, so a text
    // selection dragged out of the dialog does not dismiss it.
    let pressed_on_overlay = RwSignal::new(false);

    let on_mouse_down = move |ev: ev::MouseEvent| pressed_on_overlay.set(is_direct_target(&ev));

    let on_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = pressed_on_overlay.get_untracked() && is_direct_target(&ev);
        pressed_on_overlay.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = if modal_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {}", modal_class)
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {};", z_index)
            on:mousedown=on_mouse_down
            on:click=on_overlay_click
        >
            <div
                class=surface_class
                style=format!("position: relative; {}", modal_style)
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
