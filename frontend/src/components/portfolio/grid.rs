//! Top-level portfolio section.
//!
//! Holds the project list and the active category. The visible subset is
//! recomputed from those two on every render, so switching tabs never exposes
//! a half-updated grid.

use common::portfolio::{catalog, filter_projects, Category, PortfolioProject};
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::card::ProjectCard;
use super::stats::StatsStrip;

const PORTFOLIO_API: &str = "/api/portfolio";

pub enum Msg {
    SetCategory(Category),
    ProjectsLoaded(Vec<PortfolioProject>),
    LoadFailed(String),
}

pub struct PortfolioGrid {
    projects: Vec<PortfolioProject>,
    active: Category,
    loading: bool,
}

impl Component for PortfolioGrid {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            projects: Vec::new(),
            active: Category::default(),
            loading: true,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let link = ctx.link().clone();
        spawn_local(async move {
            let response = Request::get(PORTFOLIO_API).send().await;
            match response {
                Ok(resp) if resp.ok() => match resp.json::<Vec<PortfolioProject>>().await {
                    Ok(projects) => link.send_message(Msg::ProjectsLoaded(projects)),
                    Err(e) => link.send_message(Msg::LoadFailed(e.to_string())),
                },
                Ok(resp) => link.send_message(Msg::LoadFailed(format!("HTTP {}", resp.status()))),
                Err(e) => link.send_message(Msg::LoadFailed(e.to_string())),
            }
        });
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetCategory(category) => {
                if self.active == category {
                    return false;
                }
                self.active = category;
                true
            }
            Msg::ProjectsLoaded(projects) => {
                self.projects = projects;
                self.loading = false;
                true
            }
            Msg::LoadFailed(reason) => {
                gloo_console::warn!(format!(
                    "Portfolio request failed ({}), using built-in catalogue",
                    reason
                ));
                self.projects = catalog();
                self.loading = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let visible = filter_projects(&self.projects, self.active.token());

        html! {
            <section class="portfolio" id="portfolio">
                <header class="section-header">
                    <h2>{ "Our Work" }</h2>
                    <p>{ "Websites, brands and campaigns we've delivered for businesses across Sydney." }</p>
                </header>

                <div class="filter-tabs" role="tablist">
                    { for Category::ALL.into_iter().map(|category| {
                        let active = category == self.active;
                        html! {
                            <button
                                role="tab"
                                aria-selected={active.to_string()}
                                class={classes!("filter-tab", active.then_some("active"))}
                                onclick={link.callback(move |_| Msg::SetCategory(category))}
                            >
                                { category.label() }
                            </button>
                        }
                    }) }
                </div>

                {
                    if self.loading {
                        html! { <p class="portfolio-loading">{ "Loading projects..." }</p> }
                    } else if visible.is_empty() {
                        html! {
                            <p class="portfolio-empty">
                                { format!("No {} projects to show yet. Check back soon!", self.active.label()) }
                            </p>
                        }
                    } else {
                        html! {
                            <div class="portfolio-grid">
                                { for visible.into_iter().map(|project| html! {
                                    <ProjectCard key={project.id} project={project.clone()} />
                                }) }
                            </div>
                        }
                    }
                }

                <StatsStrip />
            </section>
        }
    }
}
