use common::portfolio::{tag_class, PortfolioProject};
use web_sys::Element;
use yew::prelude::*;

use super::carousel::ImageCarousel;
use crate::observer::InViewObserver;

/// Share of the card that has to be on screen before it animates in.
const ENTRANCE_THRESHOLD: f64 = 0.15;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectCardProps {
    pub project: PortfolioProject,
}

pub enum Msg {
    InView(bool),
}

pub struct ProjectCard {
    node_ref: NodeRef,
    visible: bool,
    observer: Option<InViewObserver>,
}

impl Component for ProjectCard {
    type Message = Msg;
    type Properties = ProjectCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            node_ref: NodeRef::default(),
            visible: false,
            observer: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(element) = self.node_ref.cast::<Element>() {
            match InViewObserver::observe(&element, ENTRANCE_THRESHOLD, ctx.link().callback(Msg::InView)) {
                Ok(observer) => self.observer = Some(observer),
                Err(e) => {
                    gloo_console::warn!("IntersectionObserver unavailable", e);
                    ctx.link().send_message(Msg::InView(true));
                }
            }
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::InView(true) => {
                let changed = !self.visible;
                self.visible = true;
                // entrance plays once
                if let Some(observer) = self.observer.take() {
                    observer.release();
                }
                changed
            }
            Msg::InView(false) => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let project = &ctx.props().project;

        html! {
            <article
                ref={self.node_ref.clone()}
                class={classes!("project-card", self.visible.then_some("is-visible"))}
            >
                <ImageCarousel images={project.display_images()} alt={project.name.clone()} />
                <div class="project-card-body">
                    <span class="project-industry">{ project.industry.as_str() }</span>
                    <h3>{ project.name.as_str() }</h3>
                    <p>{ project.description.as_str() }</p>
                    <ul class="project-tags">
                        { for project.services.iter().map(|service| html! {
                            <li class={tag_class(service)}>{ service.as_str() }</li>
                        }) }
                    </ul>
                    if let Some(url) = &project.website_url {
                        <a class="project-link" href={url.clone()} target="_blank" rel="noopener noreferrer">
                            { "Visit website" }
                        </a>
                    }
                </div>
            </article>
        }
    }
}
