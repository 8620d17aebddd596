//! Landing page: hero banner with stats, feature highlights, and the first
//! three records of each collection as "featured" sections. A collection
//! that fails to load just leaves its section empty; the dedicated pages
//! own the full error handling.

use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::{Course, Project, Video};

use crate::api;
use crate::app::Route;
use crate::components::card::{Card, CardContent};
use crate::components::hero::{CallToAction, Hero};

const FEATURED_COUNT: usize = 3;

pub enum Msg {
    VideosLoaded(Vec<Video>),
    CoursesLoaded(Vec<Course>),
    ProjectsLoaded(Vec<Project>),
}

pub struct HomePage {
    featured_videos: Vec<Video>,
    featured_courses: Vec<Course>,
    featured_projects: Vec<Project>,
    loaded: bool,
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            featured_videos: Vec::new(),
            featured_courses: Vec::new(),
            featured_projects: Vec::new(),
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::VideosLoaded(videos) => {
                self.featured_videos = videos;
                true
            }
            Msg::CoursesLoaded(courses) => {
                self.featured_courses = courses;
                true
            }
            Msg::ProjectsLoaded(projects) => {
                self.featured_projects = projects;
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            load_featured(ctx.link());
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="home-page">
                <Hero
                    subtitle="Learn DevOps"
                    title="Master Modern DevOps Engineering and Cloud"
                    description="Transform your career with comprehensive DevOps and Cloud training. \
                                 Learn from industry experts through hands-on tutorials, courses, and \
                                 real-world projects."
                    primary_cta={CallToAction { label: "Explore Courses", route: Route::Courses }}
                    secondary_cta={CallToAction { label: "Watch Tutorials", route: Route::Videos }}
                    show_stats={true}
                />

                <section class="section">
                    <div class="container features-grid">
                        { feature_card("Free YouTube Content", "Access 100+ free tutorials covering Docker, Kubernetes, CI/CD, and more") }
                        { feature_card("Premium Courses", "In-depth Udemy courses with hands-on projects and certifications") }
                        { feature_card("Real Projects", "Learn from production-grade freelance projects and case studies") }
                        { feature_card("Career Growth", "Build skills that top companies are actively seeking") }
                    </div>
                </section>

                { featured_section("Featured YouTube Tutorials", Route::Videos, &self.featured_videos) }
                { featured_section("Popular Udemy Courses", Route::Courses, &self.featured_courses) }
                { featured_section("Recent Projects", Route::Projects, &self.featured_projects) }
            </div>
        }
    }
}

fn load_featured(link: &Scope<HomePage>) {
    {
        let link = link.clone();
        spawn_local(async move {
            match api::fetch_videos().await {
                Ok(mut videos) => {
                    videos.truncate(FEATURED_COUNT);
                    link.send_message(Msg::VideosLoaded(videos));
                }
                Err(err) => gloo_console::error!(format!("featured videos: {}", err)),
            }
        });
    }
    {
        let link = link.clone();
        spawn_local(async move {
            match api::fetch_courses().await {
                Ok(mut courses) => {
                    courses.truncate(FEATURED_COUNT);
                    link.send_message(Msg::CoursesLoaded(courses));
                }
                Err(err) => gloo_console::error!(format!("featured courses: {}", err)),
            }
        });
    }
    {
        let link = link.clone();
        spawn_local(async move {
            match api::fetch_projects().await {
                Ok(mut projects) => {
                    projects.truncate(FEATURED_COUNT);
                    link.send_message(Msg::ProjectsLoaded(projects));
                }
                Err(err) => gloo_console::error!(format!("featured projects: {}", err)),
            }
        });
    }
}

fn feature_card(title: &'static str, text: &'static str) -> Html {
    html! {
        <div class="feature-card">
            <h3>{ title }</h3>
            <p>{ text }</p>
        </div>
    }
}

fn featured_section<T: CardContent>(title: &'static str, route: Route, items: &[T]) -> Html {
    html! {
        <section class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{ title }</h2>
                    <Link<Route> to={route} classes="view-all">{ "View All →" }</Link<Route>>
                </div>
                <div class="grid grid-cols-3">
                    {
                        for items.iter().map(|item| html! {
                            <Card<T> key={item.id()} item={item.clone()} />
                        })
                    }
                </div>
            </div>
        </section>
    }
}
