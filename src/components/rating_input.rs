use leptos::*;

/// Five-star rating selector. Each label is bound at mount time to its
/// 1-based position; clicking one is the only way the value changes. Icon
/// fill is derived from the signal, so a reset to 0 also empties the row.
#[component]
pub fn RatingInput(value: RwSignal<u8>) -> impl IntoView {
    view! {
        <div class="stars">
            {(1..=5u8)
                .map(|position| {
                    view! {
                        <label on:click=move |_| value.set(position)>
                            <i
                                class="bi"
                                class:bi-star-fill=move || position <= value.get()
                                class:bi-star=move || { position > value.get() }
                            ></i>
                        </label>
                    }
                })
                .collect::<Vec<_>>()}
            // hidden field mirroring the selection, as the form markup expects
            <input type="hidden" id="rating" name="rating" prop:value=move || value.get().to_string()/>
        </div>
    }
}
