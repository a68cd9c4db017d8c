//! Helpers shared by the services, the web forms and the admin CLI.
//!
//! - [`slug`] - URL slug validation

pub mod slug;
