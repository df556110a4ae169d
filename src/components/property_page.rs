//! Property Page Component
//!
//! Detail view for one listing: gallery, key facts, favorite toggle, tabs.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart};

use crate::components::{AddFavoriteZone, FavoritesList, ImageGallery, PropertyTabs};
use crate::context::AppContext;
use crate::format::{format_date, format_price};
use crate::models::Property;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PropertyPage(property_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let property = store
        .catalog()
        .get_untracked()
        .into_iter()
        .find(|p| p.id == property_id);

    match property {
        Some(property) => view! { <PropertyDetail property=property /> }.into_any(),
        None => {
            log::warn!("[APP] Unknown property id {}", property_id);
            view! {
                <div class="property-not-found">
                    <h2>"Property not found"</h2>
                    <button class="btn-back" on:click=move |_| ctx.back_to_search()>
                        "← Back to search"
                    </button>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn PropertyDetail(property: Property) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let is_favorite = {
        let id = property.id.clone();
        Memo::new(move |_| ctx.is_favorite(&id))
    };

    let on_dragstart = make_on_dragstart(ctx.dnd, property.clone());
    let on_dragend = make_on_dragend(ctx.dnd);

    let toggle_target = property.clone();
    let alt = format!("{} in {}", property.headline(), property.location);

    view! {
        <div class="property-page">
            <div class="property-layout">
                <div class="property-main">
                    <button class="btn-back" on:click=move |_| ctx.back_to_search()>
                        "← Back to search"
                    </button>

                    <div
                        class="property-title"
                        draggable="true"
                        on:dragstart=on_dragstart
                        on:dragend=on_dragend
                    >
                        <span class="property-badge">{property.property_type.as_str()}</span>
                        <h1>{property.headline()}</h1>
                        <p class="property-location">"📍 " {property.location.clone()}</p>
                    </div>

                    <div class="property-summary">
                        <span class="property-price">{format_price(property.price)}</span>
                        <span class="property-tenure">{property.tenure.clone()}</span>
                        <span class="property-added">"Added " {format_date(&property.added)}</span>
                        <button
                            class=move || if is_favorite.get() { "btn-favorite active" } else { "btn-favorite" }
                            on:click=move |_| ctx.toggle_favorite(&toggle_target)
                        >
                            {move || if is_favorite.get() { "★ Remove from favorites" } else { "☆ Add to favorites" }}
                        </button>
                    </div>

                    <ImageGallery images=property.images.clone() alt=alt />
                    <PropertyTabs property=property.clone() />
                </div>

                <aside class="sidebar">
                    <section class="favorites-box">
                        <h3>"⭐ My Favorites"</h3>
                        <AddFavoriteZone />
                        <FavoritesList />
                    </section>
                </aside>
            </div>
        </div>
    }
}
