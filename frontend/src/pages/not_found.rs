//! Generic 404 view for unmatched paths.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

pub struct NotFoundPage;

impl Component for NotFoundPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="not-found">
                <div class="container not-found-content">
                    <h1>{ "404" }</h1>
                    <h2>{ "Page Not Found" }</h2>
                    <p>{ "The page you're looking for doesn't exist." }</p>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">{ "Go Home" }</Link<Route>>
                </div>
            </div>
        }
    }
}
