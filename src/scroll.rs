/// Window scrolling helpers shared by the navbar and the back-to-top control.
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// Past this many pixels the header switches to its scrolled state and the
/// back-to-top control becomes active.
pub const HEADER_SCROLLED_AT: f64 = 100.0;

/// The scroll-spy probe line sits this far below the top of the viewport.
pub const SCROLL_SPY_PROBE: f64 = 200.0;

/// While the header is still in its resting state it is rendered slightly
/// taller, so anchor targets need a little less offset.
pub const HEADER_RESTING_TRIM: f64 = 20.0;

#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("no element with id `{0}` to scroll to")]
    MissingTarget(String),
}

pub fn scroll_y() -> f64 {
    leptos::window().scroll_y().unwrap_or(0.0)
}

fn anchor_element(id: &str) -> Result<HtmlElement, ScrollError> {
    leptos::document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| ScrollError::MissingTarget(id.to_string()))
}

/// Smooth-scrolls so the element with `id` lands just below the fixed
/// header. A missing anchor is an error for this one action only; callers
/// log it and move on.
pub fn scroll_to_anchor(id: &str, header_offset: f64) -> Result<(), ScrollError> {
    let target = anchor_element(id)?;
    scroll_to(target.offset_top() as f64 - header_offset);
    Ok(())
}

pub fn scroll_to_top() {
    scroll_to(0.0);
}

fn scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    leptos::window().scroll_to_with_scroll_to_options(&options);
}

/// The section whose vertical extent contains the probe line right now.
/// Sections that are missing from the document are skipped silently.
pub fn section_in_view(ids: &[&'static str]) -> Option<&'static str> {
    let probe = scroll_y() + SCROLL_SPY_PROBE;
    ids.iter().copied().find(|id| {
        anchor_element(id)
            .map(|section| {
                let top = section.offset_top() as f64;
                let bottom = top + section.offset_height() as f64;
                probe >= top && probe <= bottom
            })
            .unwrap_or(false)
    })
}
