//! Web layer: server-rendered pages.
//!
//! Uses Askama templates from `templates/` for rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers
//! - [`forms`] - Parsing and validation of the add-a-star form
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
