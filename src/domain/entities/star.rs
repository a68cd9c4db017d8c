//! Domain entity representing a celebrity ("star").

use chrono::NaiveDate;

/// A celebrity record as stored in the catalog.
///
/// The birthday classifier and the sitemap index only ever read these;
/// creation goes through [`NewStar`] and the star repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Star {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub birth_date: NaiveDate,
    pub bio: Option<String>,
    pub country_id: Option<i64>,
    pub category_ids: Vec<i64>,
    pub is_published: bool,
}

impl Star {
    /// Whether the star belongs to the given category.
    pub fn in_category(&self, category_id: i64) -> bool {
        self.category_ids.contains(&category_id)
    }
}

/// Input data for creating a new star.
///
/// Stars submitted through the public form are always published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStar {
    pub name: String,
    pub slug: String,
    pub birth_date: NaiveDate,
    pub bio: Option<String>,
    pub country_id: Option<i64>,
    pub category_ids: Vec<i64>,
    pub is_published: bool,
}
