//! Search input with the suggestion panel.

use std::rc::Rc;

use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use leptos_use::on_click_outside;
use verdant_client::search::{
    CatalogSource, PanelContent, PanelControl, RemoteSuggestions, SearchPipeline, SearchSession,
    SuggestionProvider, SuggestionSource,
};
use verdant_client::StorefrontConfig;
use verdant_commerce::catalog::ProductSuggestion;

use crate::runtime::LeptosRuntime;
use crate::state::open_cache;

fn suggestion_source(config: &StorefrontConfig, products: Vec<ProductSuggestion>) -> Rc<dyn SuggestionSource> {
    let origin = window().location().origin().unwrap_or_default();
    match RemoteSuggestions::new(&origin, &config.search) {
        Ok(remote) => Rc::new(SuggestionProvider::choose(products, remote)),
        Err(e) => {
            tracing::warn!(error = %e, "remote suggestions unavailable");
            Rc::new(CatalogSource::new(products))
        }
    }
}

/// Debounced product search.
///
/// Searches `products` when given, the remote suggestion endpoint otherwise.
/// Pass `open` to control the panel from the parent.
#[component]
pub fn SearchBar(
    #[prop(optional)] products: Option<Vec<ProductSuggestion>>,
    #[prop(optional)] open: Option<RwSignal<bool>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] autofocus: bool,
) -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let navigate = use_navigate();
    let initial_query = use_query_map()
        .get_untracked()
        .get("search")
        .unwrap_or_default();

    let panel = match open {
        Some(open) => PanelControl::external(move || open.get_untracked(), move |v| open.set(v)),
        None => PanelControl::internal(),
    };
    let session = SearchSession::new(&config.search, open_cache(), panel).with_initial_query(initial_query);
    let snapshot = RwSignal::new(session.snapshot());

    let pipeline = SearchPipeline::builder(
        session,
        suggestion_source(&config, products.unwrap_or_default()),
        LeptosRuntime,
    )
    .debounce(config.search.debounce())
    .on_change(move |s| snapshot.set(s.clone()))
    .on_navigate(move |url| navigate(url, NavigateOptions::default()))
    .build();
    let pipeline = StoredValue::new_local(pipeline);

    // The parent may open or close the panel on its own.
    if let Some(open) = open {
        Effect::new(move |_| {
            open.track();
            snapshot.set(pipeline.get_value().snapshot());
        });
    }

    let container_ref = NodeRef::<html::Div>::new();
    let input_ref = NodeRef::<html::Input>::new();
    let _ = on_click_outside(container_ref, move |_| pipeline.get_value().dismiss());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let query = snapshot.with_untracked(|s| s.raw_query.clone());
        pipeline.get_value().submit(&query);
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            pipeline.get_value().dismiss();
        }
    };

    let on_clear = move |_| {
        pipeline.get_value().clear();
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    let placeholder = placeholder.unwrap_or_else(|| "Search for oils, honey, teas...".to_string());

    view! {
        <div class="search" node_ref=container_ref>
            <form class="search__form" role="search" on:submit=on_submit>
                <input
                    node_ref=input_ref
                    type="search"
                    aria-label="Search products"
                    placeholder=placeholder
                    autofocus=autofocus
                    prop:value=move || snapshot.with(|s| s.raw_query.clone())
                    on:input=move |ev| pipeline.get_value().input(&event_target_value(&ev))
                    on:focus=move |_| pipeline.get_value().focus()
                    on:keydown=on_keydown
                />
                <Show when=move || snapshot.with(|s| !s.raw_query.is_empty())>
                    <button type="button" class="search__clear" aria-label="Clear search" on:click=on_clear>
                        "\u{00d7}"
                    </button>
                </Show>
            </form>
            {move || {
                let s = snapshot.get();
                match s.panel {
                    PanelContent::Closed | PanelContent::Nothing => ().into_any(),
                    PanelContent::Loading => view! {
                        <div class="search__panel">
                            <p class="search__status">"Searching..."</p>
                        </div>
                    }.into_any(),
                    PanelContent::Empty => view! {
                        <div class="search__panel">
                            <p class="search__status">"No products found for \"" {s.debounced_query.trim().to_string()} "\""</p>
                        </div>
                    }.into_any(),
                    PanelContent::Recent => view! {
                        <RecentPanel
                            entries=s.recent
                            on_select=Callback::new(move |q: String| { pipeline.get_value().select_recent(&q); })
                            on_clear=Callback::new(move |_: ()| pipeline.get_value().clear_recent())
                        />
                    }.into_any(),
                    PanelContent::Suggestions => view! {
                        <SuggestionPanel
                            suggestions=s.suggestions
                            on_select=Callback::new(move |p: ProductSuggestion| { pipeline.get_value().select_suggestion(&p); })
                            on_view_all=Callback::new(move |_: ()| { pipeline.get_value().view_all(); })
                        />
                    }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn RecentPanel(
    entries: Vec<String>,
    on_select: Callback<String>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="search__panel">
            <div class="search__panel-head">
                <span>"Recent searches"</span>
                <button type="button" class="search__clear" on:click=move |_| on_clear.run(())>
                    "Clear"
                </button>
            </div>
            <ul>
                {entries
                    .into_iter()
                    .map(|entry| {
                        let label = entry.clone();
                        view! {
                            <li>
                                <button type="button" class="search__item" on:click=move |_| on_select.run(entry.clone())>
                                    {label}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn SuggestionPanel(
    suggestions: Vec<ProductSuggestion>,
    on_select: Callback<ProductSuggestion>,
    on_view_all: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="search__panel">
            <div class="search__panel-head">
                <span>"Products"</span>
            </div>
            {suggestions
                .into_iter()
                .map(|suggestion| {
                    let price = suggestion.price_label();
                    let sale_price = suggestion.sale_price_label();
                    let name = suggestion.name.clone();
                    let category = suggestion.category.clone().unwrap_or_default();
                    let image = suggestion.image.clone().unwrap_or_default();
                    view! {
                        <button type="button" class="search__item" on:click=move |_| on_select.run(suggestion.clone())>
                            <img src=image alt=name.clone()/>
                            <span>
                                <strong>{name}</strong>
                                <br/>
                                <small>{category}</small>
                            </span>
                            <span>
                                {price}
                                {sale_price.map(|p| view! { <span class="price--old">{p}</span> })}
                            </span>
                        </button>
                    }
                })
                .collect_view()}
            <button type="button" class="search__item" on:click=move |_| on_view_all.run(())>
                "View all results"
            </button>
        </div>
    }
}
