//! Search Page Component
//!
//! Sidebar with the search form and favorites, results on the right.

use leptos::prelude::*;

use crate::components::{AddFavoriteZone, FavoritesList, SearchForm, SearchResults};
use crate::context::AppContext;
use crate::filter::Criteria;
use crate::store::{store_apply_search, store_clear_search, store_visible, use_app_store, AppStateStoreFields};

#[component]
pub fn SearchPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let on_search = Callback::new(move |criteria: Criteria| {
        log::debug!("[SEARCH] Criteria: {:?}", criteria);
        store_apply_search(&store, &criteria);
    });

    let clear_search = move |_: web_sys::MouseEvent| store_clear_search(&store);

    let is_searching = move || store.is_searching().get();
    let visible = Signal::derive(move || store_visible(&store));
    let favorite_count = move || ctx.favorites.with(|favs| favs.len());

    let results_summary = move || {
        if is_searching() {
            let found = store.results().with(|r| r.len());
            format!(
                "Found {} propert{} matching your criteria",
                found,
                if found == 1 { "y" } else { "ies" }
            )
        } else {
            let total = store.catalog().with(|c| c.len());
            format!("Browse our collection of {} properties", total)
        }
    };

    view! {
        <div class="search-page">
            <div class="search-layout">
                <aside class="sidebar">
                    <section class="search-box">
                        <div class="search-box-header">
                            <h3>"🔍 Search Properties"</h3>
                            <Show when=is_searching>
                                <button class="clear-search-btn" on:click=clear_search>
                                    "↺ Clear Search"
                                </button>
                            </Show>
                        </div>
                        <SearchForm on_search=on_search />
                    </section>

                    <section class="favorites-box">
                        <h3>{move || format!("⭐ My Favorites ({})", favorite_count())}</h3>
                        <AddFavoriteZone />
                        <FavoritesList />
                    </section>
                </aside>

                <main class="results-area">
                    <div class="results-header">
                        <h2>"🏠 Available Properties"</h2>
                        <p class="results-count">{results_summary}</p>
                        <Show when=move || { is_searching() && !visible.with(|v| v.is_empty()) }>
                            <button class="show-all-btn" on:click=clear_search>
                                "Show All Properties"
                            </button>
                        </Show>
                    </div>

                    <SearchResults properties=visible />

                    <Show when=move || { is_searching() && visible.with(|v| v.is_empty()) }>
                        <div class="no-results-message">
                            <h3>"🚫 No properties found"</h3>
                            <p>
                                "Try adjusting your search criteria or "
                                <button class="text-link" on:click=clear_search>
                                    "show all properties"
                                </button>
                            </p>
                        </div>
                    </Show>
                </main>
            </div>
        </div>
    }
}
