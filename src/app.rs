/// Main application entry point for the Vitrine site.
/// Combines the fixed header, the hero, the content sections and the
/// testimonial intake widget into a single scrolling page.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::board::TestimonialBoard;
use crate::components::back_to_top::BackToTop;
use crate::components::hero::Hero;
use crate::components::nav::NavBar;
use crate::components::testimonial_form::TestimonialForm;
use crate::components::testimonials_list::TestimonialsList;
use crate::models::testimonial::{submission_date, TestimonialDraft};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/vitrine.css"/>
        <Title text="Vitrine — votre partenaire informatique"/>
        <Router>
            <Routes>
                <Route path="" view=HomePage/>
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <NavBar/>
        <Hero/>
        <main id="main">
            <AboutSection/>
            <ServicesSection/>
            <WorksSection/>
            <TestimonialsSection/>
            <ContactSection/>
        </main>
        <BackToTop/>
    }
}

/// The testimonial intake widget: the board and the form visibility are the
/// only pieces of state, owned here and handed down to the form and list.
#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let (board, set_board) = create_signal(TestimonialBoard::default());
    let (form_open, set_form_open) = create_signal(false);

    // Submitting publishes the draft and returns the form to its hidden
    // state; closing only hides it.
    let submit_testimonial = move |draft: TestimonialDraft| {
        set_board.update(|board| {
            board.submit(draft, submission_date());
        });
        set_form_open.set(false);
    };

    let close_form = move |_: ()| set_form_open.set(false);

    view! {
        <section id="temoignages" class="temoignages">
            <div class="section-title">
                <h2>{ "Témoignages" }</h2>
                <p>{ "Ce que nos clients disent de nous." }</p>
            </div>
            <button
                type="button"
                id="show-review-form"
                class="btn-avis"
                on:click=move |_| set_form_open.set(true)
            >
                { "Donner votre avis" }
            </button>
            <TestimonialForm open=form_open on_submit=submit_testimonial on_close=close_form/>
            <TestimonialsList board=board/>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="apropos" class="apropos">
            <div class="section-title">
                <h2>{ "À propos" }</h2>
            </div>
            <p>
                { "Dépannage, maintenance et développement web : une équipe de proximité \
                   au service des particuliers et des petites entreprises." }
            </p>
        </section>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    let services = [
        ("bi-tools", "Dépannage", "Diagnostic et réparation de vos équipements."),
        ("bi-hdd-network", "Maintenance", "Suivi régulier de vos postes et serveurs."),
        ("bi-globe", "Sites web", "Création de sites vitrines et boutiques en ligne."),
    ];

    view! {
        <section id="services" class="services">
            <div class="section-title">
                <h2>{ "Services" }</h2>
            </div>
            <div class="services-grid">
                {services
                    .iter()
                    .map(|&(icon, title, blurb)| {
                        view! {
                            <div class="service-item">
                                <i class=format!("bi {icon}")></i>
                                <h3>{title}</h3>
                                <p>{blurb}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn WorksSection() -> impl IntoView {
    view! {
        <section id="oeuvres" class="oeuvres">
            <div class="section-title">
                <h2>{ "Œuvres" }</h2>
                <p>{ "Quelques réalisations récentes." }</p>
            </div>
            <div class="oeuvres-grid">
                {(1..=6u32)
                    .map(|index| {
                        view! {
                            <div class="oeuvres-item">
                                <img
                                    src=format!("assets/img/oeuvres/oeuvre-{index}.jpg")
                                    alt=format!("Réalisation {index}")
                                />
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="section-title">
                <h2>{ "Contact" }</h2>
            </div>
            <ul class="contact-coords">
                <li>
                    <i class="bi bi-envelope"></i>
                    { " contact@vitrine.example" }
                </li>
                <li>
                    <i class="bi bi-telephone"></i>
                    { " +261 00 000 00" }
                </li>
            </ul>
        </section>
    }
}
