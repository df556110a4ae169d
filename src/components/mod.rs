//! UI Components
//!
//! Reusable Leptos components.

mod search_page;
mod search_form;
mod search_results;
mod favorites_list;
mod add_favorite_zone;
mod property_page;
mod image_gallery;
mod property_tabs;
mod floor_plan_panel;

pub use search_page::SearchPage;
pub use search_form::SearchForm;
pub use search_results::SearchResults;
pub use favorites_list::FavoritesList;
pub use add_favorite_zone::AddFavoriteZone;
pub use property_page::PropertyPage;
pub use image_gallery::ImageGallery;
pub use property_tabs::PropertyTabs;
pub use floor_plan_panel::FloorPlanPanel;
