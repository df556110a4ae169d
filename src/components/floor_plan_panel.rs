//! Floor Plan Panel Component

use leptos::prelude::*;

use crate::floor_plan::FloorPlanSummary;
use crate::models::Property;

/// Room sizes, total area and levels for a listing
#[component]
pub fn FloorPlanPanel(property: Property) -> impl IntoView {
    let plan = FloorPlanSummary::for_property(&property);

    let rooms = [
        ("Living Room", plan.living_room),
        ("Kitchen", plan.kitchen),
        ("Bathroom", plan.bathroom),
    ]
    .into_iter()
    .map(|(name, size)| (name.to_string(), size))
    .chain(plan.bedrooms.iter().enumerate().map(|(i, size)| {
        let name = if i == 0 { "Master Bedroom".to_string() } else { format!("Bedroom {}", i + 1) };
        (name, *size)
    }))
    .map(|(name, size)| view! {
        <li class="room">
            <span class="room-name">{name}</span>
            <span class="room-size">{size}</span>
        </li>
    })
    .collect_view();

    view! {
        <div class="floor-plan-container">
            <div class="floor-plan-header">
                <h4>{format!("📐 Floor Plan - {}", property.headline())}</h4>
                <p class="floor-plan-description">{property.floor_plan.clone()}</p>
            </div>
            <ul class="floor-plan-rooms">{rooms}</ul>
            <dl class="floor-plan-stats">
                <dt>"Total Area"</dt>
                <dd>{plan.total_area()}</dd>
                <dt>"Floors"</dt>
                <dd>{plan.levels}</dd>
            </dl>
        </div>
    }
}
