//! The freelance projects page: the generic catalog browser instantiated
//! for `Project` records. Projects carry no numeric sort fields, so the
//! only offered ordering is "Most Recent".

use yew::{html, Html};

use common::catalog::SortKey;
use common::model::{ContentKind, Project};

use crate::api;
use crate::components::card::CardContent;
use crate::components::catalog::{CatalogPage, CatalogType};
use crate::components::filter_bar::SortOption;

pub type ProjectsPage = CatalogPage<Project>;

impl CardContent for Project {
    const KIND: ContentKind = ContentKind::Project;

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
                { for self.client.as_ref().map(|client| html! { <span>{ client }</span> }) }
                <span>{ "•" }</span>
                { for self.completion_date.as_ref().map(|date| html! { <span>{ date }</span> }) }
            </div>
        }
    }

    fn badges(&self) -> Html {
        if self.technologies.is_empty() {
            return html! {};
        }
        html! {
            <div class="technologies">
                {
                    for self.technologies.iter().map(|tech| html! {
                        <span class="tech-badge">{ tech }</span>
                    })
                }
            </div>
        }
    }
}

impl CatalogType for Project {
    const TITLE: &'static str = "Freelance Projects";
    const BLURB: &'static str = "Real-world DevOps projects and case studies. Learn from \
                                 production implementations and best practices used in enterprise \
                                 environments.";
    const ENDPOINT: &'static str = api::PROJECTS_ENDPOINT;
    const DEFAULT_SORT: SortKey = SortKey::Recent;

    fn sort_options() -> Vec<SortOption> {
        vec![SortOption {
            value: "recent",
            label: "Most Recent",
        }]
    }
}
