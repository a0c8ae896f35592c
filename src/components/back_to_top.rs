use leptos::ev;
use leptos::*;

use crate::scroll;

/// Floating "back to top" control, shown once the page has scrolled past
/// the header threshold.
#[component]
pub fn BackToTop() -> impl IntoView {
    let (active, set_active) = create_signal(false);

    window_event_listener(ev::scroll, move |_| {
        set_active.set(scroll::scroll_y() > scroll::HEADER_SCROLLED_AT);
    });

    view! {
        <a
            href="#"
            class="back-to-top d-flex"
            class:active=active
            on:click=move |ev| {
                ev.prevent_default();
                scroll::scroll_to_top();
            }
        >
            <i class="bi bi-arrow-up-short"></i>
        </a>
    }
}
