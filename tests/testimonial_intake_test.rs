#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::*;
use vitrine::app::TestimonialsSection;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mounts a fresh widget into its own container so tests don't see each
/// other's DOM.
fn mount_widget() -> HtmlElement {
    let container: HtmlElement = document()
        .create_element("div")
        .unwrap()
        .unchecked_into();
    document().body().unwrap().append_child(&container).unwrap();
    mount_to(container.clone(), TestimonialsSection);
    container
}

fn query(root: &HtmlElement, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matching `{selector}`"))
        .unchecked_into()
}

fn bubbling_event(kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    Event::new_with_event_init_dict(kind, &init).unwrap()
}

fn set_input(root: &HtmlElement, name: &str, value: &str) {
    let input: HtmlInputElement = query(root, &format!("input[name='{name}']")).unchecked_into();
    input.set_value(value);
    input.dispatch_event(&bubbling_event("input")).unwrap();
}

fn set_comment(root: &HtmlElement, value: &str) {
    let area: HtmlTextAreaElement = query(root, "textarea[name='comment']").unchecked_into();
    area.set_value(value);
    area.dispatch_event(&bubbling_event("input")).unwrap();
}

fn submit_form(root: &HtmlElement) {
    query(root, "form")
        .dispatch_event(&bubbling_event("submit"))
        .unwrap();
}

fn form_display(root: &HtmlElement) -> String {
    query(root, "#review-form-container")
        .style()
        .get_property_value("display")
        .unwrap()
}

fn rating_value(root: &HtmlElement) -> String {
    let field: HtmlInputElement = query(root, "input[name='rating']").unchecked_into();
    field.value()
}

fn star_label(root: &HtmlElement, index: u32) -> HtmlElement {
    root.query_selector_all(".stars label")
        .unwrap()
        .item(index)
        .unwrap()
        .unchecked_into()
}

fn count(root: &HtmlElement, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

async fn settle() {
    sleep(Duration::from_millis(25)).await;
}

#[wasm_bindgen_test]
async fn intake_flow_publishes_prepended_entries() {
    let root = mount_widget();
    settle().await;

    // Idle: the form starts hidden, the list empty
    assert_eq!(form_display(&root), "none");
    assert_eq!(count(&root, ".testimonial-wrap"), 0);

    // show-control opens the form
    query(&root, "#show-review-form").click();
    settle().await;
    assert_eq!(form_display(&root), "block");

    // clicking the fourth label selects rating 4 and fills four icons
    star_label(&root, 3).click();
    settle().await;
    assert_eq!(rating_value(&root), "4");
    assert_eq!(count(&root, ".stars label i.bi-star-fill"), 4);
    assert_eq!(count(&root, ".stars label i.bi-star"), 1);

    set_input(&root, "firstName", "Alice");
    set_input(&root, "lastName", "Martin");
    set_input(&root, "occupation", "Chef");
    set_comment(&root, "Great work");
    submit_form(&root);
    settle().await;

    // entry published with the literal values and the seq-1 portrait
    assert_eq!(count(&root, ".testimonial-wrap"), 1);
    let card = query(&root, ".testimonial-wrap");
    let text = card.text_content().unwrap();
    assert!(text.contains("Alice Martin"));
    assert!(text.contains("Chef"));
    assert!(text.contains("Great work"));
    assert!(query(&card, "img")
        .get_attribute("src")
        .unwrap()
        .ends_with("testimonials-1.jpg"));
    assert_eq!(count(&card, ".stars i.bi-star-fill"), 4);
    assert_eq!(count(&card, ".stars i.bi-star"), 1);

    // submit resets everything and hides the form
    assert_eq!(form_display(&root), "none");
    assert_eq!(rating_value(&root), "0");
    assert_eq!(count(&root, ".stars label i.bi-star-fill"), 0);
    let first_name: HtmlInputElement =
        query(&root, "input[name='firstName']").unchecked_into();
    assert_eq!(first_name.value(), "");

    // an empty second submission still gets the next sequence number and
    // lands in front of the previous entry
    query(&root, "#show-review-form").click();
    submit_form(&root);
    settle().await;

    assert_eq!(count(&root, ".testimonial-wrap"), 2);
    let cards = root.query_selector_all(".testimonial-wrap img").unwrap();
    let newest: HtmlElement = cards.item(0).unwrap().unchecked_into();
    let previous: HtmlElement = cards.item(1).unwrap().unchecked_into();
    assert!(newest
        .get_attribute("src")
        .unwrap()
        .ends_with("testimonials-2.jpg"));
    assert!(previous
        .get_attribute("src")
        .unwrap()
        .ends_with("testimonials-1.jpg"));
}

#[wasm_bindgen_test]
async fn closing_the_form_keeps_field_values() {
    let root = mount_widget();
    settle().await;

    query(&root, "#show-review-form").click();
    settle().await;
    set_input(&root, "firstName", "Zoé");
    star_label(&root, 4).click();
    settle().await;

    // close hides without resetting, unlike submit
    query(&root, "#close-review-form").click();
    settle().await;
    assert_eq!(form_display(&root), "none");
    assert_eq!(count(&root, ".testimonial-wrap"), 0);

    query(&root, "#show-review-form").click();
    settle().await;
    let first_name: HtmlInputElement =
        query(&root, "input[name='firstName']").unchecked_into();
    assert_eq!(first_name.value(), "Zoé");
    assert_eq!(rating_value(&root), "5");
    assert_eq!(count(&root, ".stars label i.bi-star-fill"), 5);
}
