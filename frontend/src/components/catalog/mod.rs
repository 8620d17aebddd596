//! Catalog browser: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic and view rendering.
//!
//! Responsibilities
//! - Define `CatalogType`, the per-collection configuration (page copy,
//!   endpoint, default sort, sort options) that turns the generic browser
//!   into the videos, courses or projects page.
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, start the collection load; the result (or the fetch
//!   error) is delivered back as a message.

use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CatalogPage;

use crate::api;
use crate::components::card::CardContent;
use crate::components::filter_bar::SortOption;
use common::catalog::SortKey;

/// Per-collection configuration of the catalog browser.
pub trait CatalogType: CardContent {
    /// Page heading.
    const TITLE: &'static str;

    /// Introductory copy under the heading.
    const BLURB: &'static str;

    /// JSON array resource this page loads.
    const ENDPOINT: &'static str;

    /// Sort applied on mount and after "Clear All Filters".
    const DEFAULT_SORT: SortKey;

    /// Entries of the sort select, first one matching `DEFAULT_SORT`.
    fn sort_options() -> Vec<SortOption>;
}

impl<T: CatalogType> Component for CatalogPage<T> {
    type Message = Msg<T>;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CatalogPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            start_load(ctx.link());
        }
    }
}

/// Kicks off one load of the collection; completion comes back as
/// `Msg::Loaded`. Also used by the retry action of the error panel.
fn start_load<T: CatalogType>(link: &Scope<CatalogPage<T>>) {
    let link = link.clone();
    spawn_local(async move {
        let result = api::fetch_collection::<T>(T::ENDPOINT).await;
        link.send_message(Msg::Loaded(result));
    });
}
