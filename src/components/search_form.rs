//! Search Form Component
//!
//! Select boxes and a location field; submits typed criteria.

use leptos::prelude::*;

use crate::config::{BEDROOM_OPTIONS, PRICE_OPTIONS};
use crate::filter::{month_names, Criteria, SearchForm as FormValues, ANY};
use crate::models::PropertyType;

/// Render `(value, label)` pairs as `<option>`s
fn options(pairs: Vec<(String, String)>) -> impl IntoView {
    pairs
        .into_iter()
        .map(|(value, label)| view! { <option value=value>{label}</option> })
        .collect_view()
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(v, l)| (v.to_string(), l.to_string())).collect()
}

#[component]
pub fn SearchForm(#[prop(into)] on_search: Callback<Criteria>) -> impl IntoView {
    let form = RwSignal::new(FormValues::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let criteria = form.with_untracked(FormValues::criteria);
        on_search.run(criteria);
    };

    let type_options = std::iter::once((ANY.to_string(), "Any Type".to_string()))
        .chain(PropertyType::ALL.iter().map(|t| (t.as_str().to_string(), t.as_str().to_string())))
        .collect::<Vec<_>>();
    let month_options = std::iter::once((ANY.to_string(), "Any month".to_string()))
        .chain(month_names().into_iter().map(|m| (m.to_string(), m.to_string())))
        .collect::<Vec<_>>();

    view! {
        <form class="search-form" on:submit=submit>
            <div class="form-group">
                <label for="type" class="form-label">"🏠 Property Type"</label>
                <select
                    id="type"
                    class="form-select"
                    prop:value=move || form.with(|f| f.property_type.clone())
                    on:change=move |ev| form.update(|f| f.property_type = event_target_value(&ev))
                >
                    {options(type_options)}
                </select>
            </div>

            <div class="form-group">
                <label for="bedrooms" class="form-label">"🛏️ Bedrooms"</label>
                <select
                    id="bedrooms"
                    class="form-select"
                    prop:value=move || form.with(|f| f.bedrooms.clone())
                    on:change=move |ev| form.update(|f| f.bedrooms = event_target_value(&ev))
                >
                    {options(owned(BEDROOM_OPTIONS))}
                </select>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="minPrice" class="form-label">"💰 Min Price"</label>
                    <select
                        id="minPrice"
                        class="form-select"
                        prop:value=move || form.with(|f| f.min_price.clone())
                        on:change=move |ev| form.update(|f| f.min_price = event_target_value(&ev))
                    >
                        {options(owned(PRICE_OPTIONS))}
                    </select>
                </div>

                <div class="form-group">
                    <label for="maxPrice" class="form-label">"💰 Max Price"</label>
                    <select
                        id="maxPrice"
                        class="form-select"
                        prop:value=move || form.with(|f| f.max_price.clone())
                        on:change=move |ev| form.update(|f| f.max_price = event_target_value(&ev))
                    >
                        {options(owned(PRICE_OPTIONS))}
                    </select>
                </div>
            </div>

            <div class="form-group">
                <label for="location" class="form-label">"📍 Location/Postcode"</label>
                <input
                    type="text"
                    id="location"
                    class="form-input"
                    placeholder="e.g., London or E14"
                    maxlength="100"
                    prop:value=move || form.with(|f| f.location.clone())
                    on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="addedMonth" class="form-label">"📅 Added in Month"</label>
                <select
                    id="addedMonth"
                    class="form-select"
                    prop:value=move || form.with(|f| f.added_month.clone())
                    on:change=move |ev| form.update(|f| f.added_month = event_target_value(&ev))
                >
                    {options(month_options)}
                </select>
            </div>

            <div class="form-actions">
                <button type="submit" class="search-btn">"🔍 Search Properties"</button>
                <button type="button" class="reset-btn" on:click=move |_| form.update(FormValues::reset)>
                    "↺ Reset Form"
                </button>
            </div>
        </form>
    }
}
