//! Favorites List Component
//!
//! Saved properties in the sidebar. Dropping a dragged property on the
//! list removes it from favorites.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::AppContext;
use crate::format::{format_price, truncate_text};
use crate::models::Property;

#[component]
pub fn FavoritesList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (is_over, set_is_over) = signal(false);

    let on_dragover = make_on_dragover(set_is_over, "move");
    let on_dragleave = make_on_dragleave(set_is_over);
    let on_drop = make_on_drop(ctx.dnd, set_is_over, move |transfer| ctx.drop_to_remove(transfer));

    let entries = move || ctx.favorites.with(|favs| favs.entries().to_vec());
    let count = move || ctx.favorites.with(|favs| favs.len());

    let container_class = move || {
        let mut c = String::from("favorites-container");
        if count() == 0 { c.push_str(" empty"); }
        if is_over.get() { c.push_str(" drag-over"); }
        c
    };

    view! {
        <div
            class=container_class
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <Show
                when=move || { count() > 0 }
                fallback=|| view! {
                    <div class="empty-state">
                        <div class="empty-icon">"☆"</div>
                        <p>"No favorites yet"</p>
                        <p class="drag-hint">"↕️ Drag properties here to remove from favorites"</p>
                        <p class="instruction">"Click the star button ☆ on any property to add it here"</p>
                    </div>
                }
            >
                <div class="favorites-header">
                    <h4>{move || format!("Favorites ({})", count())}</h4>
                    <button
                        class="btn-clear-favorites"
                        aria-label="Clear all favorites"
                        on:click=move |_| ctx.clear_favorites()
                    >
                        "Clear All"
                    </button>
                </div>

                <div class="favorites-list favorites-dropzone">
                    <For
                        each=entries
                        key=|property| property.id.clone()
                        children=move |property| view! { <FavoriteItem property=property /> }
                    />
                </div>
            </Show>
        </div>
    }
}

/// One saved property
#[component]
fn FavoriteItem(property: Property) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let location_chars = ctx.config.with_value(|c| c.favorite_location_chars);

    let on_dragstart = make_on_dragstart(ctx.dnd, property.clone());
    let on_dragend = make_on_dragend(ctx.dnd);

    let open_id = property.id.clone();
    let remove_id = property.id.clone();
    let cover = property.cover_image().unwrap_or_default().to_string();

    view! {
        <div
            class="favorite-item"
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
        >
            <div class="favorite-content" on:click=move |_| ctx.open_property(open_id.clone())>
                <div class="favorite-image">
                    <img src=cover alt=property.property_type.as_str() />
                </div>
                <div class="favorite-details">
                    <h5>{format!("{} Bed {}", property.bedrooms, property.property_type)}</h5>
                    <p class="favorite-price">{format_price(property.price)}</p>
                    <p class="favorite-location">{truncate_text(&property.location, location_chars)}</p>
                </div>
            </div>
            <button
                class="btn-remove-favorite"
                aria-label=format!("Remove {} from favorites", property.property_type)
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    ctx.remove_favorite(&remove_id);
                }
            >
                "×"
            </button>
        </div>
    }
}
