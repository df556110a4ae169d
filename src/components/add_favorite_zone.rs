//! Add Favorite Drop Zone Component
//!
//! Drop target that saves the dragged property. Only shown while dragging.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::AppContext;

#[component]
pub fn AddFavoriteZone() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (is_over, set_is_over) = signal(false);

    let on_dragover = make_on_dragover(set_is_over, "copy");
    let on_dragleave = make_on_dragleave(set_is_over);
    let on_drop = make_on_drop(ctx.dnd, set_is_over, move |transfer| ctx.drop_to_add(transfer));

    // Only show when dragging
    let is_visible = move || ctx.dnd.dragging_id_read.get().is_some();

    view! {
        <div
            class=move || {
                let mut c = String::from("add-favorite-zone");
                if is_over.get() { c.push_str(" drag-over"); }
                if !is_visible() { c.push_str(" hidden"); }
                c
            }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            "☆ Drop here to add to favorites"
        </div>
    }
}
