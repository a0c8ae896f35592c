use leptos::ev;
use leptos::html::Header;
use leptos::logging::log;
use leptos::*;

use crate::scroll;

/// Section anchors driving both the nav links and the scroll-spy, in page
/// order.
const SECTIONS: [(&str, &str); 6] = [
    ("accueil", "Accueil"),
    ("apropos", "À propos"),
    ("services", "Services"),
    ("oeuvres", "Œuvres"),
    ("temoignages", "Témoignages"),
    ("contact", "Contact"),
];

fn section_ids() -> [&'static str; 6] {
    SECTIONS.map(|(id, _)| id)
}

/// Fixed header: scrolled state past the threshold, scroll-spy on the nav
/// links, mobile toggle, and smooth anchor navigation with header offset.
#[component]
pub fn NavBar() -> impl IntoView {
    let (scrolled, set_scrolled) = create_signal(false);
    let (mobile_open, set_mobile_open) = create_signal(false);
    let (active, set_active) = create_signal(None::<&'static str>);
    let header_ref = create_node_ref::<Header>();

    // Anchor targets sit below the fixed header; while the header is still
    // in its resting state it overlaps a little less.
    let header_offset = move || {
        let height = header_ref
            .get_untracked()
            .map(|header| header.offset_height() as f64)
            .unwrap_or(0.0);
        if scrolled.get_untracked() {
            height
        } else {
            height - scroll::HEADER_RESTING_TRIM
        }
    };

    let sync_with_scroll = move || {
        let position = scroll::scroll_y();
        set_scrolled.set(position > scroll::HEADER_SCROLLED_AT);
        set_active.set(scroll::section_in_view(&section_ids()));
    };

    window_event_listener(ev::scroll, move |_| sync_with_scroll());

    create_effect(move |_| {
        sync_with_scroll();
        // honor an anchor hash already present at page load
        if let Ok(hash) = window().location().hash() {
            if let Some(id) = hash.strip_prefix('#').filter(|id| !id.is_empty()) {
                if let Err(err) = scroll::scroll_to_anchor(id, header_offset()) {
                    log!("[NAV] ignoring initial hash: {err}");
                }
            }
        }
    });

    let go_to = move |id: &'static str| {
        if mobile_open.get_untracked() {
            set_mobile_open.set(false);
        }
        if let Err(err) = scroll::scroll_to_anchor(id, header_offset()) {
            log!("[NAV] {err}");
        }
    };

    view! {
        <header id="header" class="fixed-top" class:header-scrolled=scrolled node_ref=header_ref>
            <nav id="navbar" class="navbar" class:navbar-mobile=mobile_open>
                <ul>
                    {SECTIONS
                        .iter()
                        .map(|&(id, label)| {
                            view! {
                                <li>
                                    <a
                                        href=format!("#{id}")
                                        class="nav-link scrollto"
                                        class:active=move || active.get() == Some(id)
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            go_to(id);
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <i
                    class="mobile-nav-toggle bi"
                    class:bi-list=move || !mobile_open.get()
                    class:bi-x=mobile_open
                    on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                ></i>
            </nav>
        </header>
    }
}
