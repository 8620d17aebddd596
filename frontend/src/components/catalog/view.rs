//! View rendering for the catalog browser: page header, filter bar, then
//! one of four bodies: loading spinner, load-error panel with retry,
//! "no results" panel with a one-click reset, or the card grid.

use yew::html::Scope;
use yew::prelude::*;

use common::catalog::SortKey;

use super::messages::Msg;
use super::state::CatalogPage;
use super::CatalogType;
use crate::components::card::{Card, CardContent};
use crate::components::filter_bar::FilterBar;

pub fn view<T: CatalogType>(page: &CatalogPage<T>, ctx: &Context<CatalogPage<T>>) -> Html {
    let link = ctx.link();
    let selected_sort = page.criteria.sort.map(SortKey::as_str).unwrap_or("");

    html! {
        <div class="page">
            <div class="container">
                <div class="page-header">
                    <h1>{ T::TITLE }</h1>
                    <p class="page-description">{ T::BLURB }</p>
                </div>

                <FilterBar
                    search={page.criteria.search.clone()}
                    categories={page.categories()}
                    selected_category={page.criteria.category.clone()}
                    sort_options={T::sort_options()}
                    selected_sort={selected_sort}
                    on_search_change={link.callback(Msg::SearchChanged)}
                    on_category_change={link.callback(Msg::CategoryChanged)}
                    on_sort_change={link.callback(Msg::SortChanged)}
                    on_clear={link.callback(|_| Msg::ClearFilters)}
                />

                { body(page, link) }
            </div>
        </div>
    }
}

fn body<T: CatalogType>(page: &CatalogPage<T>, link: &Scope<CatalogPage<T>>) -> Html {
    if page.loading {
        return html! {
            <div class="loading">
                <div class="spinner"></div>
            </div>
        };
    }

    if let Some(error) = &page.error {
        return html! {
            <div class="load-error">
                <p>{ format!("Could not load this page: {}.", error) }</p>
                <button onclick={link.callback(|_| Msg::Retry)} class="btn btn-primary">
                    { "Try Again" }
                </button>
            </div>
        };
    }

    let displayed = page.displayed();
    if displayed.is_empty() {
        let noun = T::KIND.noun();
        return html! {
            <div class="no-results">
                <p>{ format!("No {}s found matching your criteria.", noun) }</p>
                <button onclick={link.callback(|_| Msg::ClearFilters)} class="btn btn-primary">
                    { "Clear Filters" }
                </button>
            </div>
        };
    }

    html! {
        <>
            <div class="results-count">{ results_count(displayed.len(), T::KIND.noun()) }</div>
            <div class="grid grid-cols-3">
                {
                    for displayed.iter().map(|item| html! {
                        <Card<T> key={item.id()} item={item.clone()} />
                    })
                }
            </div>
        </>
    }
}

fn results_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("Showing 1 {}", noun)
    } else {
        format!("Showing {} {}s", count, noun)
    }
}
