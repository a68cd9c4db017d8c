//! Country a star comes from.

/// A country shown in the site menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// Input data for creating a new country.
#[derive(Debug, Clone)]
pub struct NewCountry {
    pub name: String,
    pub slug: String,
}
