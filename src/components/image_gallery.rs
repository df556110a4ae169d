//! Image Gallery Component
//!
//! Main image with previous/next controls and a thumbnail strip.

use leptos::prelude::*;

/// Move `current` one step through `len` images, wrapping at both ends
pub fn step_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[component]
pub fn ImageGallery(images: Vec<String>, #[prop(into)] alt: String) -> impl IntoView {
    let count = images.len();
    if count == 0 {
        return view! { <div class="image-gallery empty">"No images available"</div> }.into_any();
    }

    let images = StoredValue::new(images);
    let (current, set_current) = signal(0usize);
    let main_src = move || images.with_value(|imgs| imgs.get(current.get()).cloned().unwrap_or_default());

    let thumbnails = images.with_value(|imgs| {
        imgs.iter()
            .enumerate()
            .map(|(i, src)| {
                view! {
                    <img
                        class=move || if current.get() == i { "thumbnail active" } else { "thumbnail" }
                        src=src.clone()
                        alt=format!("Thumbnail {}", i + 1)
                        on:click=move |_| set_current.set(i)
                    />
                }
            })
            .collect_view()
    });

    view! {
        <div class="image-gallery">
            <div class="gallery-main">
                <img src=main_src alt=alt />
                {(count > 1).then(|| view! {
                    <button
                        class="gallery-nav prev"
                        aria-label="Previous image"
                        on:click=move |_| set_current.update(|i| *i = step_index(*i, count, false))
                    >
                        "‹"
                    </button>
                    <button
                        class="gallery-nav next"
                        aria-label="Next image"
                        on:click=move |_| set_current.update(|i| *i = step_index(*i, count, true))
                    >
                        "›"
                    </button>
                })}
                <span class="gallery-counter">{move || format!("{} / {}", current.get() + 1, count)}</span>
            </div>
            <div class="gallery-thumbnails">{thumbnails}</div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_wraps() {
        assert_eq!(step_index(0, 3, true), 1);
        assert_eq!(step_index(2, 3, true), 0);
        assert_eq!(step_index(0, 3, false), 2);
        assert_eq!(step_index(1, 3, false), 0);
    }

    #[test]
    fn test_step_single_and_empty() {
        assert_eq!(step_index(0, 1, true), 0);
        assert_eq!(step_index(0, 1, false), 0);
        assert_eq!(step_index(0, 0, true), 0);
    }
}
