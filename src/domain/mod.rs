//! Domain layer: entities, repository contracts and the pure birthday and
//! sitemap logic.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`birthday`] - Today / tomorrow / day-after-tomorrow classification
//! - [`alphabet`] - Sitemap letters and letter filtering
//! - [`clock`] - Injectable source of the current date
//!
//! Nothing in here depends on the web or infrastructure layers.

pub mod alphabet;
pub mod birthday;
pub mod clock;
pub mod entities;
pub mod repositories;
