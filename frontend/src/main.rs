use crate::app::App;

mod app;
mod components;
mod helpers;
mod observer;

fn main() {
    yew::Renderer::<App>::new().render();
}
