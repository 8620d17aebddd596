//! Update function for the catalog browser. Receives the current state and
//! a message, mutates the state, and returns whether to re-render. Every
//! criteria change leaves `records` untouched; the view recomputes the
//! displayed list from scratch on each render.

use yew::prelude::*;

use common::catalog::SortKey;

use super::messages::Msg;
use super::state::CatalogPage;
use super::{start_load, CatalogType};

pub fn update<T: CatalogType>(
    page: &mut CatalogPage<T>,
    ctx: &Context<CatalogPage<T>>,
    msg: Msg<T>,
) -> bool {
    match msg {
        Msg::Loaded(Ok(records)) => {
            page.records = records;
            page.loading = false;
            page.error = None;
            true
        }
        Msg::Loaded(Err(err)) => {
            gloo_console::error!(format!("loading {} failed: {}", T::ENDPOINT, err));
            page.loading = false;
            page.error = Some(err);
            true
        }
        Msg::SearchChanged(value) => {
            page.criteria.search = value;
            true
        }
        Msg::CategoryChanged(value) => {
            page.criteria.category = value;
            true
        }
        // Unknown select values become "no sort", never an error.
        Msg::SortChanged(value) => {
            page.criteria.sort = SortKey::parse(&value);
            true
        }
        Msg::ClearFilters => {
            page.reset_criteria();
            true
        }
        Msg::Retry => {
            page.loading = true;
            page.error = None;
            start_load(ctx.link());
            true
        }
    }
}
