/// Component to display the published testimonials, newest first.
use leptos::*;

use crate::board::TestimonialBoard;
use crate::models::testimonial::TestimonialEntry;
use crate::stars::star_classes;

#[component]
pub fn TestimonialsList(board: ReadSignal<TestimonialBoard>) -> impl IntoView {
    view! {
        <div id="testimonials-list" class="testimonials-list">
            {move || {
                board
                    .get()
                    .entries()
                    .iter()
                    .cloned()
                    .map(|entry| view! { <TestimonialCard entry=entry/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn TestimonialCard(entry: TestimonialEntry) -> impl IntoView {
    view! {
        <div class="testimonial-wrap">
            <div class="testimonial-item">
                <img
                    src=entry.portrait_path()
                    class="testimonial-img"
                    alt=format!("Témoignage {}", entry.seq)
                />
                <h3>{entry.full_name()}</h3>
                <h4>{entry.occupation.clone()}</h4>
                <div class="stars">
                    {star_classes(entry.rating)
                        .into_iter()
                        .map(|class| view! { <i class=class></i> })
                        .collect::<Vec<_>>()}
                </div>
                <p>
                    <i class="bi bi-quote quote-icon-left"></i>
                    {entry.comment.clone()}
                    <i class="bi bi-quote quote-icon-right"></i>
                </p>
                <h4 class="testimonial-date">{entry.date.clone()}</h4>
            </div>
        </div>
    }
}
