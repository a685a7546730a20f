//! Highlight figures under the portfolio grid, counted up the first time
//! they scroll into view.

use common::counter::CountUp;
use common::portfolio::{Stat, HIGHLIGHT_STATS};
use gloo_timers::callback::Interval;
use web_sys::Element;
use yew::prelude::*;

use crate::helpers::format_count;
use crate::observer::InViewObserver;

const VISIBLE_THRESHOLD: f64 = 0.5;

pub struct StatsStrip;

impl Component for StatsStrip {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        StatsStrip
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="stats-strip">
                { for HIGHLIGHT_STATS.iter().map(|stat| html! { <StatCounter stat={*stat} /> }) }
            </div>
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct StatCounterProps {
    pub stat: Stat,
}

pub enum Msg {
    InView(bool),
    Tick,
}

pub struct StatCounter {
    node_ref: NodeRef,
    counter: CountUp,
    observer: Option<InViewObserver>,
    /// The only writer of `counter` while a run is in progress.
    ticker: Option<Interval>,
}

impl Component for StatCounter {
    type Message = Msg;
    type Properties = StatCounterProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            node_ref: NodeRef::default(),
            counter: CountUp::new(ctx.props().stat.end),
            observer: None,
            ticker: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(element) = self.node_ref.cast::<Element>() {
            match InViewObserver::observe(&element, VISIBLE_THRESHOLD, ctx.link().callback(Msg::InView)) {
                Ok(observer) => self.observer = Some(observer),
                Err(e) => {
                    gloo_console::warn!("IntersectionObserver unavailable", e);
                    ctx.link().send_message(Msg::InView(true));
                }
            }
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::InView(true) => {
                if let Some(observer) = self.observer.take() {
                    observer.release();
                }
                if !self.counter.on_visible() {
                    return false;
                }
                let link = ctx.link().clone();
                self.ticker = Some(Interval::new(self.counter.tick_interval_ms(), move || {
                    link.send_message(Msg::Tick)
                }));
                true
            }
            Msg::InView(false) => false,
            Msg::Tick => {
                if !self.counter.tick() {
                    self.ticker = None;
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let stat = ctx.props().stat;
        html! {
            <div class="stat" ref={self.node_ref.clone()}>
                <span class="stat-value">
                    { format_count(self.counter.value()) }
                    <span class="stat-suffix">{ stat.suffix }</span>
                </span>
                <span class="stat-label">{ stat.label }</span>
            </div>
        }
    }
}
