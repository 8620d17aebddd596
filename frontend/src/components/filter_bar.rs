//! The filter bar is a pure input surface: it renders the search box, the
//! category and sort selects and the reset button, and forwards every change
//! to the owning page through callbacks. It holds no filtering logic; its
//! only local state is whether the collapsible filter panel is open.

use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::events::{Event, InputEvent, MouseEvent};
use yew::prelude::*;

/// One entry of the sort select, e.g. `("views", "Most Viewed")`.
#[derive(Debug, Clone, PartialEq)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub search: AttrValue,
    pub categories: Vec<String>,
    pub selected_category: AttrValue,
    pub sort_options: Vec<SortOption>,
    pub selected_sort: AttrValue,
    pub on_search_change: Callback<String>,
    pub on_category_change: Callback<String>,
    pub on_sort_change: Callback<String>,
    pub on_clear: Callback<()>,
}

pub enum Msg {
    ToggleFilters,
}

pub struct FilterBar {
    show_filters: bool,
}

impl Component for FilterBar {
    type Message = Msg;
    type Properties = FilterBarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            show_filters: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleFilters => {
                self.show_filters = !self.show_filters;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let on_search = {
            let on_search_change = props.on_search_change.clone();
            Callback::from(move |e: InputEvent| {
                let value = e.target_unchecked_into::<HtmlInputElement>().value();
                on_search_change.emit(value);
            })
        };
        let clear_search = {
            let on_search_change = props.on_search_change.clone();
            Callback::from(move |_: MouseEvent| on_search_change.emit(String::new()))
        };

        html! {
            <div class="filter-bar">
                <div class="search-wrapper">
                    <input
                        type="text"
                        placeholder="Search..."
                        value={props.search.clone()}
                        oninput={on_search}
                        class="input search-input"
                    />
                    {
                        if !props.search.is_empty() {
                            html! {
                                <button onclick={clear_search} class="clear-search" aria-label="Clear search">
                                    { "✕" }
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <button
                    class="filter-toggle btn-secondary"
                    onclick={ctx.link().callback(|_| Msg::ToggleFilters)}
                >
                    { "Filters" }
                </button>

                {
                    if self.show_filters {
                        self.filters_panel(ctx)
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}

impl FilterBar {
    fn filters_panel(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let on_category = {
            let on_category_change = props.on_category_change.clone();
            Callback::from(move |e: Event| {
                if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
                {
                    on_category_change.emit(select.value());
                }
            })
        };
        let on_sort = {
            let on_sort_change = props.on_sort_change.clone();
            Callback::from(move |e: Event| {
                if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
                {
                    on_sort_change.emit(select.value());
                }
            })
        };
        let on_clear = {
            let on_clear = props.on_clear.clone();
            Callback::from(move |_: MouseEvent| on_clear.emit(()))
        };

        html! {
            <div class="filters-panel">
                {
                    if !props.categories.is_empty() {
                        html! {
                            <div class="filter-group">
                                <label class="filter-label">{ "Category" }</label>
                                <select value={props.selected_category.clone()} onchange={on_category} class="input filter-select">
                                    <option value="" selected={props.selected_category.is_empty()}>{ "All Categories" }</option>
                                    {
                                        for props.categories.iter().map(|category| html! {
                                            <option
                                                value={category.clone()}
                                                selected={props.selected_category.as_str() == category.as_str()}
                                            >
                                                { category }
                                            </option>
                                        })
                                    }
                                </select>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if !props.sort_options.is_empty() {
                        html! {
                            <div class="filter-group">
                                <label class="filter-label">{ "Sort By" }</label>
                                <select value={props.selected_sort.clone()} onchange={on_sort} class="input filter-select">
                                    {
                                        for props.sort_options.iter().map(|option| html! {
                                            <option
                                                value={option.value}
                                                selected={props.selected_sort.as_str() == option.value}
                                            >
                                                { option.label }
                                            </option>
                                        })
                                    }
                                </select>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <button onclick={on_clear} class="btn-secondary clear-filters">
                    { "Clear All Filters" }
                </button>
            </div>
        }
    }
}
