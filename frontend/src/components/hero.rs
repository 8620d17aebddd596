//! Hero banner for the home page: headline copy, call-to-action links and
//! an optional row of stat cards.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// A call-to-action button linking to another view.
#[derive(Debug, Clone, PartialEq)]
pub struct CallToAction {
    pub label: &'static str,
    pub route: Route,
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub primary_cta: Option<CallToAction>,
    #[prop_or_default]
    pub secondary_cta: Option<CallToAction>,
    #[prop_or(false)]
    pub show_stats: bool,
}

pub struct Hero;

impl Component for Hero {
    type Message = ();
    type Properties = HeroProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <section class="hero">
                <div class="container hero-content">
                    <div class="hero-text">
                        {
                            if let Some(subtitle) = &props.subtitle {
                                html! { <p class="hero-subtitle">{ subtitle }</p> }
                            } else {
                                html! {}
                            }
                        }
                        <h1 class="hero-title">{ &props.title }</h1>
                        <p class="hero-description">{ &props.description }</p>

                        <div class="hero-cta">
                            { cta(&props.primary_cta, "btn btn-primary") }
                            { cta(&props.secondary_cta, "btn btn-secondary") }
                        </div>
                    </div>

                    {
                        if props.show_stats {
                            html! {
                                <div class="hero-stats">
                                    { stat_card("100+", "YouTube Videos") }
                                    { stat_card("50K+", "Students Enrolled") }
                                    { stat_card("4.8★", "Average Rating") }
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </section>
        }
    }
}

fn cta(cta: &Option<CallToAction>, classes: &'static str) -> Html {
    match cta {
        Some(cta) => html! {
            <Link<Route> to={cta.route} classes={classes}>{ cta.label }</Link<Route>>
        },
        None => html! {},
    }
}

fn stat_card(number: &'static str, label: &'static str) -> Html {
    html! {
        <div class="stat-card">
            <h3 class="stat-number">{ number }</h3>
            <p class="stat-label">{ label }</p>
        </div>
    }
}
