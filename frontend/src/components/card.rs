//! The shared card renderer. All three catalog variants render through the
//! same `Card<T>` component; the variant contributes its metadata row (and,
//! for projects, the technology badges) through the `CardContent` trait.

use std::marker::PhantomData;
use yew::events::MouseEvent;
use yew::{html, Callback, Component, Context, Html, Properties};

use common::catalog::CatalogRecord;
use common::model::ContentKind;

/// What a record must provide beyond the filterable fields to be shown as a
/// card. Implemented per variant in the page modules.
pub trait CardContent:
    CatalogRecord + Clone + PartialEq + serde::de::DeserializeOwned + 'static
{
    const KIND: ContentKind;

    fn id(&self) -> u32;
    fn url(&self) -> Option<&str>;
    fn thumbnail(&self) -> Option<&str>;

    /// The variant-specific metadata row under the title.
    fn meta(&self) -> Html;

    /// Extra badge row between description and tags. Projects use this for
    /// their technology list.
    fn badges(&self) -> Html {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps<T: CardContent> {
    pub item: T,
}

pub struct Card<T: CardContent> {
    _marker: PhantomData<T>,
}

impl<T: CardContent> Component for Card<T> {
    type Message = ();
    type Properties = CardProps<T>;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let item = &ctx.props().item;
        let cursor = if item.url().is_some() {
            "cursor: pointer;"
        } else {
            "cursor: default;"
        };

        html! {
            <div class="card" onclick={activate(item.url())} style={cursor}>
                {
                    if let Some(thumbnail) = item.thumbnail() {
                        html! { <img src={thumbnail.to_string()} alt={item.title().to_string()} class="card-image" /> }
                    } else {
                        html! {}
                    }
                }

                <div class="card-content">
                    <h3 class="card-title">{ item.title() }</h3>
                    { item.meta() }
                    <p class="card-description">{ item.description() }</p>
                    { item.badges() }
                    { tag_row(item.tags()) }
                    {
                        if item.url().is_some() {
                            html! {
                                <div class="card-link">
                                    <span>{ T::KIND.link_label() }</span>
                                    <span class="card-link-arrow">{ "↗" }</span>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        }
    }
}

/// Opens the record's URL in a new browsing context. Records without a URL
/// get a no-op callback.
fn activate(url: Option<&str>) -> Callback<MouseEvent> {
    let url = url.map(str::to_string);
    Callback::from(move |_| {
        if let Some(url) = &url {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.open_with_url_and_target(url, "_blank") {
                    gloo_console::error!("failed to open card url", err);
                }
            }
        }
    })
}

/// At most the first three tags; the rest stay off the card.
fn tag_row(tags: &[String]) -> Html {
    html! {
        <div class="tags">
            {
                for tags.iter().take(3).map(|tag| html! {
                    <span class="tag">{ tag }</span>
                })
            }
        </div>
    }
}
