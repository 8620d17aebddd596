//! Site chrome: header navigation with active-link highlighting and a
//! mobile menu, the routed content area, and the footer.

use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::scope_ext::{LocationHandle, RouterScopeExt};

use crate::app::Route;

const NAV_ITEMS: [(Route, &str); 5] = [
    (Route::Home, "Home"),
    (Route::Videos, "YouTube"),
    (Route::Courses, "Udemy"),
    (Route::Projects, "Projects"),
    (Route::Contact, "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Html,
}

pub enum Msg {
    ToggleMenu,
    RouteChanged,
}

pub struct Layout {
    menu_open: bool,
    // Held so route changes keep re-rendering the active nav link.
    _location_handle: Option<LocationHandle>,
}

impl Component for Layout {
    type Message = Msg;
    type Properties = LayoutProps;

    fn create(ctx: &Context<Self>) -> Self {
        let handle = ctx
            .link()
            .add_location_listener(ctx.link().callback(|_| Msg::RouteChanged));
        Self {
            menu_open: false,
            _location_handle: handle,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            // Navigating closes the mobile menu and refreshes the highlight.
            Msg::RouteChanged => {
                self.menu_open = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let current = ctx.link().route::<Route>();

        html! {
            <div class="layout">
                <header class="header">
                    <nav class="container">
                        <div class="nav-wrapper">
                            <Link<Route> to={Route::Home} classes="logo">
                                <span class="logo-text">{ "DevOps" }</span>
                                <span class="logo-accent">{ "Academy" }</span>
                            </Link<Route>>

                            <ul class="nav-menu">
                                { for NAV_ITEMS.iter().map(|item| nav_link(item, current)) }
                            </ul>

                            <button
                                class="mobile-menu-btn"
                                onclick={ctx.link().callback(|_| Msg::ToggleMenu)}
                                aria-label="Toggle menu"
                            >
                                { if self.menu_open { "✕" } else { "☰" } }
                            </button>
                        </div>

                        {
                            if self.menu_open {
                                html! {
                                    <ul class="mobile-nav">
                                        { for NAV_ITEMS.iter().map(|item| nav_link(item, current)) }
                                    </ul>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </nav>
                </header>

                <main class="main-content">{ ctx.props().children.clone() }</main>

                <footer class="footer">
                    <div class="container footer-content">
                        <div class="footer-section">
                            <h3 class="footer-title">{ "DevOps Academy" }</h3>
                            <p class="footer-text">
                                { "Empowering developers with world-class DevOps and Cloud training." }
                            </p>
                        </div>

                        <div class="footer-section">
                            <h4 class="footer-subtitle">{ "Quick Links" }</h4>
                            <ul class="footer-links">
                                <li><Link<Route> to={Route::Videos}>{ "YouTube" }</Link<Route>></li>
                                <li><Link<Route> to={Route::Courses}>{ "Udemy Courses" }</Link<Route>></li>
                                <li><Link<Route> to={Route::Projects}>{ "Projects" }</Link<Route>></li>
                                <li><Link<Route> to={Route::Contact}>{ "Contact" }</Link<Route>></li>
                            </ul>
                        </div>

                        <div class="footer-section">
                            <h4 class="footer-subtitle">{ "Connect" }</h4>
                            <a
                                href="https://youtube.com/@devops-academy"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="social-link"
                            >
                                { "YouTube" }
                            </a>
                        </div>
                    </div>
                    <div class="container footer-bottom">
                        <p>{ "© 2025 DevOps Academy. All rights reserved." }</p>
                    </div>
                </footer>
            </div>
        }
    }
}

fn nav_link((route, label): &(Route, &'static str), current: Option<Route>) -> Html {
    let classes = if current == Some(*route) {
        classes!("nav-link", "active")
    } else {
        classes!("nav-link")
    };
    html! {
        <li>
            <Link<Route> to={*route} classes={classes}>{ *label }</Link<Route>>
        </li>
    }
}
