//! Image carousel inside a project card.
//!
//! Each instance owns its own `Carousel` state and auto-advance timer; nothing
//! is shared between cards. Every image stays in the DOM so the CSS fade can
//! run, but only the current one carries `is-active`.

use common::carousel::{Carousel, CarouselError, AUTO_ADVANCE_MS};
use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageCarouselProps {
    /// Must not be empty; cards pass `PortfolioProject::display_images()`.
    pub images: Vec<String>,
    pub alt: String,
}

pub enum Msg {
    Next,
    Prev,
    JumpTo(usize),
    AutoAdvance,
    Hover(bool),
}

pub struct ImageCarousel {
    carousel: Result<Carousel, CarouselError>,
    hovered: bool,
    /// Dropping the interval cancels it, which happens on unmount.
    _auto_advance: Option<Interval>,
}

impl ImageCarousel {
    fn build(ctx: &Context<Self>) -> Self {
        let carousel = Carousel::for_images(&ctx.props().images);
        if let Err(e) = &carousel {
            gloo_console::error!(format!("{} ({})", e, ctx.props().alt));
        }
        let auto_advance = match &carousel {
            Ok(c) if c.has_controls() => {
                let link = ctx.link().clone();
                Some(Interval::new(AUTO_ADVANCE_MS, move || link.send_message(Msg::AutoAdvance)))
            }
            _ => None,
        };
        Self {
            carousel,
            hovered: false,
            _auto_advance: auto_advance,
        }
    }
}

impl Component for ImageCarousel {
    type Message = Msg;
    type Properties = ImageCarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::build(ctx)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().images != old_props.images {
            *self = Self::build(ctx);
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Ok(carousel) = &mut self.carousel else {
            return false;
        };
        match msg {
            Msg::Next => {
                carousel.next();
                true
            }
            Msg::Prev => {
                carousel.prev();
                true
            }
            Msg::JumpTo(index) => match carousel.jump_to(index) {
                Ok(_) => true,
                Err(e) => {
                    gloo_console::warn!(e.to_string());
                    false
                }
            },
            Msg::AutoAdvance => {
                if self.hovered {
                    return false;
                }
                carousel.next();
                true
            }
            Msg::Hover(hovered) => {
                self.hovered = hovered;
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let carousel = match &self.carousel {
            Ok(carousel) => carousel,
            Err(e) => {
                return html! {
                    <div class="carousel carousel-missing" role="img" aria-label={props.alt.clone()}>
                        { e.to_string() }
                    </div>
                };
            }
        };
        let link = ctx.link();

        html! {
            <div
                class="carousel"
                onmouseenter={link.callback(|_| Msg::Hover(true))}
                onmouseleave={link.callback(|_| Msg::Hover(false))}
            >
                <div class="carousel-track">
                    { for props.images.iter().enumerate().map(|(i, src)| {
                        let active = carousel.is_active(i);
                        html! {
                            <img
                                class={classes!("carousel-image", active.then_some("is-active"))}
                                src={src.clone()}
                                alt={format!("{} - image {} of {}", props.alt, i + 1, carousel.len())}
                                aria-hidden={(!active).to_string()}
                                loading="lazy"
                            />
                        }
                    }) }
                </div>
                if carousel.has_controls() {
                    <>
                        <button class="carousel-nav prev" aria-label="Previous image" onclick={link.callback(|_| Msg::Prev)}>
                            { "‹" }
                        </button>
                        <button class="carousel-nav next" aria-label="Next image" onclick={link.callback(|_| Msg::Next)}>
                            { "›" }
                        </button>
                        <div class="carousel-indicators">
                            { for (0..carousel.len()).map(|i| html! {
                                <button
                                    class={classes!("carousel-dot", carousel.is_active(i).then_some("active"))}
                                    aria-label={format!("Show image {}", i + 1)}
                                    onclick={link.callback(move |_| Msg::JumpTo(i))}
                                />
                            }) }
                        </div>
                    </>
                }
            </div>
        }
    }
}
