//! Property Tabs Component
//!
//! Description, floor plan and location tabs on the detail page.

use leptos::prelude::*;

use crate::components::FloorPlanPanel;
use crate::format::{bedroom_text, format_date, format_price, maps_search_url};
use crate::models::Property;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Description,
    FloorPlan,
    Location,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Description, Tab::FloorPlan, Tab::Location];

    fn label(&self) -> &'static str {
        match self {
            Tab::Description => "📝 Description",
            Tab::FloorPlan => "📐 Floor Plan",
            Tab::Location => "📍 Location",
        }
    }
}

#[component]
pub fn PropertyTabs(property: Property) -> impl IntoView {
    let (active, set_active) = signal(Tab::Description);
    let property = StoredValue::new(property);

    view! {
        <div class="property-tabs">
            <div class="tab-list" role="tablist">
                {Tab::ALL.iter().map(|&tab| view! {
                    <button
                        role="tab"
                        class=move || if active.get() == tab { "tab active" } else { "tab" }
                        on:click=move |_| set_active.set(tab)
                    >
                        {tab.label()}
                    </button>
                }).collect_view()}
            </div>
            <div class="tab-panel" role="tabpanel">
                {move || {
                    let property = property.get_value();
                    match active.get() {
                        Tab::Description => view! { <DescriptionPanel property=property /> }.into_any(),
                        Tab::FloorPlan => view! { <FloorPlanPanel property=property /> }.into_any(),
                        Tab::Location => view! { <LocationPanel property=property /> }.into_any(),
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn DescriptionPanel(property: Property) -> impl IntoView {
    view! {
        <div class="description-panel">
            <p class="property-description">{property.description.clone()}</p>
            <dl class="property-facts">
                <dt>"Type"</dt>
                <dd>{property.property_type.as_str()}</dd>
                <dt>"Bedrooms"</dt>
                <dd>{bedroom_text(property.bedrooms)}</dd>
                <dt>"Price"</dt>
                <dd>{format_price(property.price)}</dd>
                <dt>"Tenure"</dt>
                <dd>{property.tenure.clone()}</dd>
                <dt>"Postcode"</dt>
                <dd>{property.postcode.clone()}</dd>
                <dt>"Added"</dt>
                <dd>{format_date(&property.added)}</dd>
            </dl>
        </div>
    }
}

#[component]
fn LocationPanel(property: Property) -> impl IntoView {
    let coords = format!("{:.4}, {:.4}", property.coordinates.lat, property.coordinates.lng);
    let map_url = maps_search_url(&property.location, &property.postcode);

    view! {
        <div class="location-panel">
            <p class="location-address">{property.location.clone()}</p>
            <p class="location-postcode">{property.postcode.clone()}</p>
            <p class="location-coordinates">{coords}</p>
            <a href=map_url target="_blank" rel="noopener noreferrer">"View on map"</a>
        </div>
    }
}
