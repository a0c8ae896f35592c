use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::*;

/// Taglines rotated in the hero section; exactly one is active at a time.
const CTA_PHRASES: [&str; 3] = [
    "Votre partenaire informatique au quotidien",
    "Dépannage, maintenance et création de sites web",
    "Des solutions sur mesure pour votre entreprise",
];

const INTRO_IMAGES: [&str; 4] = [
    "assets/img/intro-img1.jpg",
    "assets/img/intro-img2.jpg",
    "assets/img/intro-img3.jpg",
    "assets/img/intro-img4.jpg",
];

const CAROUSEL_PERIOD: Duration = Duration::from_secs(9);
const SLIDESHOW_PERIOD: Duration = Duration::from_secs(4);
const FADE_TICK: Duration = Duration::from_millis(50);
const FADE_STEP: f64 = 0.05;

/// Wrap-around step shared by the text carousel and the slideshow.
pub fn step_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="accueil" class="accueil d-flex">
            <Slideshow/>
            <div class="accueil-content">
                <h1>{ "Vitrine" }</h1>
                <TextCarousel/>
            </div>
        </section>
    }
}

#[component]
fn TextCarousel() -> impl IntoView {
    let (active, set_active) = create_signal(0usize);

    let step = move |forward: bool| {
        set_active.update(|index| *index = step_index(*index, CTA_PHRASES.len(), forward));
    };

    // timers only exist client-side
    create_effect(move |_| {
        if let Ok(handle) = set_interval_with_handle(move || step(true), CAROUSEL_PERIOD) {
            on_cleanup(move || handle.clear());
        }
    });

    view! {
        <div class="cta-text-carousel">
            {CTA_PHRASES
                .iter()
                .enumerate()
                .map(|(index, phrase)| {
                    view! {
                        <p class="cta-text" class:active=move || active.get() == index>
                            {*phrase}
                        </p>
                    }
                })
                .collect::<Vec<_>>()}
            <button type="button" class="carousel-control prev" on:click=move |_| step(false)>
                <i class="bi bi-chevron-left"></i>
            </button>
            <button type="button" class="carousel-control next" on:click=move |_| step(true)>
                <i class="bi bi-chevron-right"></i>
            </button>
        </div>
    }
}

/// Cycles through the intro images with an opacity crossfade: fade the
/// current image out, swap the source, fade the new one in.
#[component]
fn Slideshow() -> impl IntoView {
    let (current, set_current) = create_signal(0usize);
    let (opacity, set_opacity) = create_signal(1.0f64);

    let crossfade = move || {
        spawn_local(async move {
            let mut level = 1.0f64;
            while level > 0.0 {
                level -= FADE_STEP;
                set_opacity.set(level.max(0.0));
                sleep(FADE_TICK).await;
            }
            set_current.update(|index| *index = step_index(*index, INTRO_IMAGES.len(), true));
            while level < 1.0 {
                level += FADE_STEP;
                set_opacity.set(level.min(1.0));
                sleep(FADE_TICK).await;
            }
        });
    };

    create_effect(move |_| {
        if let Ok(handle) = set_interval_with_handle(crossfade, SLIDESHOW_PERIOD) {
            on_cleanup(move || handle.clear());
        }
    });

    view! {
        <img
            id="slideshow"
            class="intro-img"
            src=move || INTRO_IMAGES[current.get()]
            style:opacity=move || format!("{:.2}", opacity.get())
            alt="Image d'accueil"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::step_index;

    #[test]
    fn forward_steps_wrap_to_zero() {
        assert_eq!(step_index(0, 4, true), 1);
        assert_eq!(step_index(2, 4, true), 3);
        assert_eq!(step_index(3, 4, true), 0);
    }

    #[test]
    fn backward_steps_wrap_to_last() {
        assert_eq!(step_index(3, 4, false), 2);
        assert_eq!(step_index(0, 4, false), 3);
    }

    #[test]
    fn empty_list_stays_at_zero() {
        assert_eq!(step_index(0, 0, true), 0);
        assert_eq!(step_index(0, 0, false), 0);
    }
}
