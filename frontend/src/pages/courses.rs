//! The Udemy courses page: the generic catalog browser instantiated for
//! `Course` records. Courses default to the rating sort.

use yew::{html, Html};

use common::catalog::SortKey;
use common::model::{ContentKind, Course};

use crate::api;
use crate::components::card::CardContent;
use crate::components::catalog::{CatalogPage, CatalogType};
use crate::components::filter_bar::SortOption;

pub type CoursesPage = CatalogPage<Course>;

impl CardContent for Course {
    const KIND: ContentKind = ContentKind::Course;

    fn id(&self) -> u32 {
        self.id
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    fn meta(&self) -> Html {
        html! {
            <div class="card-meta">
                { for self.rating.map(|rating| html! { <span class="rating">{ format!("⭐ {}", rating) }</span> }) }
                <span>{ "•" }</span>
                { for self.students.as_ref().map(|students| html! { <span>{ format!("{} students", students) }</span> }) }
                { for self.price.as_ref().map(|price| html! { <span class="price">{ price }</span> }) }
            </div>
        }
    }
}

impl CatalogType for Course {
    const TITLE: &'static str = "Udemy Courses";
    const BLURB: &'static str = "Premium, in-depth courses with hands-on projects and lifetime \
                                 access. Invest in your DevOps career with comprehensive training \
                                 programs.";
    const ENDPOINT: &'static str = api::COURSES_ENDPOINT;
    const DEFAULT_SORT: SortKey = SortKey::Rating;

    fn sort_options() -> Vec<SortOption> {
        vec![
            SortOption {
                value: "rating",
                label: "Highest Rated",
            },
            SortOption {
                value: "students",
                label: "Most Students",
            },
            SortOption {
                value: "recent",
                label: "Most Recent",
            },
        ]
    }
}
