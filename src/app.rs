//! Property Search App
//!
//! Root component: header, loading state, page switch and footer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::catalog::load_catalog;
use crate::components::{PropertyPage, SearchPage};
use crate::config::AppConfig;
use crate::context::{AppContext, Page};
use crate::store::{store_set_catalog, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    let delay_ms = config.catalog_delay_ms;

    // Provide context to all children
    let store = Store::new(AppState::new());
    provide_context(store);
    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Show the catalog after the loading delay
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        match load_catalog() {
            Ok(catalog) => store_set_catalog(&store, catalog),
            Err(e) => {
                log::error!("[APP] Failed to load catalog: {}", e);
                store_set_catalog(&store, Vec::new());
            }
        }
    });

    view! {
        <div class="app">
            <header class="app-header">
                <div class="container">
                    <h1>"Property Search"</h1>
                    <p class="subtitle">"Find your dream home"</p>
                </div>
            </header>

            <main class="main-content">
                {move || {
                    if store.loading().get() {
                        return view! {
                            <div class="loading-state">
                                <h2>"Loading properties..."</h2>
                                <div class="loading-spinner"></div>
                            </div>
                        }.into_any();
                    }
                    match ctx.page.get() {
                        Page::Search => view! { <SearchPage /> }.into_any(),
                        Page::Property(id) => view! { <PropertyPage property_id=id /> }.into_any(),
                    }
                }}
            </main>

            <footer class="app-footer">
                <div class="container">
                    <p>"© 2024 Property Search"</p>
                </div>
            </footer>
        </div>
    }
}
