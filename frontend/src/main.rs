use crate::app::App;

mod api;
mod app;
mod components;
mod pages;

fn main() {
    yew::Renderer::<App>::new().render();
}
