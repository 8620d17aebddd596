use yew::{html, Component, Context, Html};
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::pages::contact::ContactPage;
use crate::pages::courses::CoursesPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::projects::ProjectsPage;
use crate::pages::videos::VideosPage;

/// Client-side route table. Unmatched paths land on the 404 view.
#[derive(Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/youtube")]
    Videos,
    #[at("/udemy")]
    Courses,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Videos => html! { <VideosPage /> },
        Route::Courses => html! { <CoursesPage /> },
        Route::Projects => html! { <ProjectsPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <Layout>
                    <Switch<Route> render={switch} />
                </Layout>
            </BrowserRouter>
        }
    }
}
