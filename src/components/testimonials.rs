use gloo_timers::callback::Interval;
use log::{debug, info};
use yew::prelude::*;

use crate::carousel::{Carousel, CarouselAction, ADVANCE_INTERVAL_MS};
use crate::components::icons::{Icon, IconView};
use crate::content::TESTIMONIALS;
use crate::section::Section;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_reducer_eq(|| Carousel::new(TESTIMONIALS.len()));

    // Auto-advance for as long as the section is mounted.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                info!("testimonial carousel started");
                let interval = Interval::new(ADVANCE_INTERVAL_MS, move || {
                    debug!("testimonial carousel tick");
                    dispatcher.dispatch(CarouselAction::Next);
                });
                move || {
                    drop(interval);
                    info!("testimonial carousel stopped");
                }
            },
            (),
        );
    }

    let dispatch = |action: CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(action))
    };
    let on_prev = dispatch(CarouselAction::Prev);
    let on_next = dispatch(CarouselAction::Next);

    let active = carousel.index();
    let testimonial = &TESTIMONIALS[active];

    html! {
        <section id={Section::Testimonials.id()} class="section">
            <div class="container">
                <div class="section-heading">
                    <div class="pill">{"Depoimentos"}</div>
                    <h2>{"O Que Nossos Clientes Dizem"}</h2>
                    <p class="muted">
                        {"Veja o que nossos clientes dizem sobre nossos serviços e como temos ajudado a resolver seus problemas jurídicos com eficiência e dedicação."}
                    </p>
                </div>

                <div class="carousel">
                    <div class="carousel-viewport">
                        <div class="card testimonial" key={active}>
                            <div class="stars">
                                { for (0..5).map(|_| html! { <IconView icon={Icon::Star} size={20} /> }) }
                            </div>
                            <blockquote class="testimonial-text">
                                { format!("\"{}\"", testimonial.text) }
                            </blockquote>
                            <div class="testimonial-author">
                                <img src={testimonial.image} alt={testimonial.name} width="56" height="56" />
                                <div>
                                    <h4>{testimonial.name}</h4>
                                    <p class="muted small">{testimonial.position}</p>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="carousel-dots">
                        { for (0..carousel.len()).map(|index| {
                            let onclick = dispatch(CarouselAction::Select(index));
                            html! {
                                <button
                                    class={classes!("carousel-dot", (index == active).then_some("active"))}
                                    aria-label={format!("Ver depoimento {}", index + 1)}
                                    {onclick}
                                />
                            }
                        }) }
                    </div>

                    <div class="carousel-controls">
                        <button class="icon-button carousel-arrow" onclick={on_prev} aria-label="Depoimento anterior">
                            <IconView icon={Icon::ChevronLeft} />
                        </button>
                        <button class="icon-button carousel-arrow" onclick={on_next} aria-label="Próximo depoimento">
                            <IconView icon={Icon::ChevronRight} />
                        </button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .carousel {
                        position: relative;
                        overflow: hidden;
                    }
                    .carousel-viewport {
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .testimonial {
                        padding: 2rem;
                        animation: slideFromRight 0.5s ease-out;
                    }
                    @keyframes slideFromRight {
                        from { opacity: 0; transform: translateX(20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    .stars {
                        display: flex;
                        color: #eab308;
                        margin-bottom: 1.5rem;
                    }
                    .testimonial-text {
                        font-size: 1.25rem;
                        font-style: italic;
                        color: var(--foreground-muted);
                        margin: 0 0 1.5rem;
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .testimonial-author img {
                        border-radius: 9999px;
                        object-fit: cover;
                    }
                    .testimonial-author h4 {
                        font-weight: 500;
                        font-size: 1.125rem;
                    }
                    .carousel-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 2rem;
                    }
                    .carousel-dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border: none;
                        border-radius: 9999px;
                        background: var(--primary-soft);
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }
                    .carousel-dot.active {
                        background: var(--primary);
                    }
                    .carousel-controls {
                        position: absolute;
                        top: 50%;
                        left: 0;
                        right: 0;
                        transform: translateY(-50%);
                        display: flex;
                        justify-content: space-between;
                        pointer-events: none;
                    }
                    .carousel-arrow {
                        pointer-events: auto;
                        background: var(--background-translucent);
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    }
                "#}
            </style>
        </section>
    }
}
