//! Category (industry) a star works in.

/// A category shown in the site menu, e.g. "Кино" or "Музыка".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

/// Input data for creating a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub title: String,
    pub slug: String,
}
