//! Search Results Component
//!
//! Grid of draggable property cards with a favorite toggle.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart};

use crate::context::AppContext;
use crate::format::{format_price, truncate_text};
use crate::models::Property;

#[component]
pub fn SearchResults(#[prop(into)] properties: Signal<Vec<Property>>) -> impl IntoView {
    view! {
        <div class="search-results">
            <For
                each=move || properties.get()
                key=|property| property.id.clone()
                children=move |property| view! { <PropertyCard property=property /> }
            />
        </div>
    }
}

/// A single result card
#[component]
fn PropertyCard(property: Property) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let preview_chars = ctx.config.with_value(|c| c.description_preview_chars);

    let is_favorite = {
        let id = property.id.clone();
        Memo::new(move |_| ctx.is_favorite(&id))
    };
    let is_dragging = {
        let id = property.id.clone();
        Memo::new(move |_| ctx.dnd.dragging_id_read.get().as_deref() == Some(id.as_str()))
    };

    let on_dragstart = make_on_dragstart(ctx.dnd, property.clone());
    let on_dragend = make_on_dragend(ctx.dnd);

    let open_id = property.id.clone();
    let toggle_target = property.clone();
    let on_toggle = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.toggle_favorite(&toggle_target);
    };

    let type_label = property.property_type.as_str();
    let cover = property.cover_image().unwrap_or_default().to_string();
    let alt = format!("{} in {}", property.headline(), property.location);
    let preview = truncate_text(&property.description, preview_chars);

    view! {
        <div
            class=move || if is_dragging.get() { "property-card dragging" } else { "property-card" }
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:click=move |_| ctx.open_property(open_id.clone())
        >
            <div class="property-image">
                <img src=cover alt=alt loading="lazy" />
                <button
                    class=move || if is_favorite.get() { "favorite-btn active" } else { "favorite-btn" }
                    aria-label=move || {
                        if is_favorite.get() {
                            format!("Remove {} from favorites", type_label)
                        } else {
                            format!("Add {} to favorites", type_label)
                        }
                    }
                    on:click=on_toggle
                >
                    {move || if is_favorite.get() { "★" } else { "☆" }}
                </button>
                <span class="property-badge">{type_label}</span>
            </div>

            <div class="property-details">
                <div class="property-header">
                    <h3>{property.headline()}</h3>
                    <span class="property-price">{format_price(property.price)}</span>
                </div>
                <div class="property-meta">
                    <span class="property-location">"📍 " {property.location.clone()}</span>
                    <span class="property-tenure">{property.tenure.clone()}</span>
                </div>
                <p class="property-description">{preview}</p>
            </div>
        </div>
    }
}
