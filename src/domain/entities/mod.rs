//! Core domain entities.
//!
//! - [`Star`] - A celebrity with a birth date, country and categories
//! - [`Country`] - Menu facet: where a star comes from
//! - [`Category`] - Menu facet: which industry a star works in
//!
//! Creation goes through the `New*` structs.

pub mod category;
pub mod country;
pub mod star;

pub use category::{Category, NewCategory};
pub use country::{Country, NewCountry};
pub use star::{NewStar, Star};
