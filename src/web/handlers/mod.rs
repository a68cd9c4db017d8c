//! HTML page handlers plus the JSON health check.

mod about;
mod add_star;
mod catalog;
mod health;
mod index;
mod sitemap;
mod star_detail;

pub use about::about_handler;
pub use add_star::{add_star_form_handler, add_star_handler};
pub use catalog::{country_handler, industry_handler};
pub use health::health_handler;
pub use index::index_handler;
pub use sitemap::{sitemap_handler, sitemap_letter_handler};
pub use star_detail::star_detail_handler;
