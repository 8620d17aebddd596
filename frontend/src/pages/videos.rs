//! The YouTube tutorials page: the generic catalog browser instantiated for
//! `Video` records, plus `Video`'s card rendering.

use yew::{html, Html};

use common::catalog::SortKey;
use common::model::{ContentKind, Video};

use crate::api;
use crate::components::card::CardContent;
use crate::components::catalog::{CatalogPage, CatalogType};
use crate::components::filter_bar::SortOption;

pub type VideosPage = CatalogPage<Video>;

impl CardContent for Video {
    const KIND: ContentKind = ContentKind::Video;

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
                { for self.duration.as_ref().map(|duration| html! { <span>{ duration }</span> }) }
                <span>{ "•" }</span>
                { for self.views.as_ref().map(|views| html! { <span>{ format!("{} views", views) }</span> }) }
            </div>
        }
    }
}

impl CatalogType for Video {
    const TITLE: &'static str = "YouTube Tutorials";
    const BLURB: &'static str = "Free, comprehensive DevOps and Cloud tutorials. Learn at your \
                                 own pace with hands-on examples and real-world scenarios.";
    const ENDPOINT: &'static str = api::VIDEOS_ENDPOINT;
    const DEFAULT_SORT: SortKey = SortKey::Recent;

    fn sort_options() -> Vec<SortOption> {
        vec![
            SortOption {
                value: "recent",
                label: "Most Recent",
            },
            SortOption {
                value: "views",
                label: "Most Viewed",
            },
        ]
    }
}
