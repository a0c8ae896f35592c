use leptos::ev::SubmitEvent;
use leptos::*;

use crate::components::rating_input::RatingInput;
use crate::models::testimonial::TestimonialDraft;

/// The testimonial composition form. The section owns the `open` signal;
/// the form stays mounted while hidden so that closing it does NOT lose
/// what the visitor typed — only a submit resets the fields.
#[component]
pub fn TestimonialForm(
    open: ReadSignal<bool>,
    #[prop(into)] on_submit: Callback<TestimonialDraft>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (first_name, set_first_name) = create_signal(String::new());
    let (last_name, set_last_name) = create_signal(String::new());
    let (occupation, set_occupation) = create_signal(String::new());
    let (comment, set_comment) = create_signal(String::new());
    let rating = create_rw_signal(0u8);

    let handle_submit = move |ev: SubmitEvent| {
        // fully client-side, no navigation and no request
        ev.prevent_default();

        on_submit.call(TestimonialDraft {
            first_name: first_name.get(),
            last_name: last_name.get(),
            occupation: occupation.get(),
            rating: rating.get(),
            comment: comment.get(),
        });

        // Reset values
        set_first_name.set(String::new());
        set_last_name.set(String::new());
        set_occupation.set(String::new());
        set_comment.set(String::new());
        rating.set(0);
    };

    view! {
        <div
            id="review-form-container"
            class="review-form-container"
            style:display=move || if open.get() { "block" } else { "none" }
        >
            <form id="review-form" on:submit=handle_submit>
                <input
                    type="text"
                    name="firstName"
                    placeholder="Prénom"
                    prop:value=first_name
                    on:input=move |ev| set_first_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    name="lastName"
                    placeholder="Nom"
                    prop:value=last_name
                    on:input=move |ev| set_last_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    name="occupation"
                    placeholder="Profession"
                    prop:value=occupation
                    on:input=move |ev| set_occupation.set(event_target_value(&ev))
                />
                <RatingInput value=rating/>
                <textarea
                    name="comment"
                    placeholder="Votre commentaire"
                    prop:value=comment
                    on:input=move |ev| set_comment.set(event_target_value(&ev))
                ></textarea>
                <button type="submit">{ "Envoyer" }</button>
                <button type="button" id="close-review-form" on:click=move |_| on_close.call(())>
                    { "Fermer" }
                </button>
            </form>
        </div>
    }
}
