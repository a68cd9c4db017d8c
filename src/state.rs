//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CatalogService, StarService};
use crate::domain::alphabet::Alphabet;
use crate::domain::clock::Clock;

#[derive(Clone)]
pub struct AppState {
    pub star_service: Arc<StarService>,
    pub catalog_service: Arc<CatalogService>,
    /// Letters the sitemap iterates over.
    pub alphabet: Arc<Alphabet>,
    /// Source of "today" for the birthday highlights.
    pub clock: Arc<dyn Clock>,
}
