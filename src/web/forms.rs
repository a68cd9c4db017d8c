//! The "add a star" form.
//!
//! The form is posted as `application/x-www-form-urlencoded`. Category
//! checkboxes repeat the `categories` key, which is why the body is parsed
//! pair by pair with `url::form_urlencoded` instead of a flat struct.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use validator::Validate;

use crate::domain::entities::NewStar;
use crate::utils::slug::SLUG_REGEX;

/// Field name → message. Rendered next to the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    /// Key for errors not tied to a single field.
    pub const FORM: &'static str = "form";

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn message(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Raw form input, kept as typed by the user so it can be re-rendered.
#[derive(Debug, Clone, Default, Validate)]
pub struct StarForm {
    #[validate(length(min = 1, max = 255, message = "Укажите имя (до 255 символов)"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Укажите адрес (до 100 символов)"))]
    #[validate(regex(
        path = "*SLUG_REGEX",
        message = "Только латинские строчные буквы, цифры и дефисы"
    ))]
    pub slug: String,

    pub birth_date: String,

    pub country: String,

    pub categories: Vec<String>,

    #[validate(length(max = 5000, message = "Не более 5000 символов"))]
    pub bio: String,
}

impl StarForm {
    /// Parses a urlencoded request body. Unknown keys are ignored.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut form = Self::default();

        for (key, value) in url::form_urlencoded::parse(body) {
            match key.as_ref() {
                "name" => form.name = value.trim().to_string(),
                "slug" => form.slug = value.trim().to_lowercase(),
                "birth_date" => form.birth_date = value.trim().to_string(),
                "country" => form.country = value.trim().to_string(),
                "categories" => form.categories.push(value.trim().to_string()),
                "bio" => form.bio = value.trim().to_string(),
                _ => {}
            }
        }

        form
    }

    /// Whether `id` is the selected country. Used by the template.
    pub fn has_country(&self, id: i64) -> bool {
        self.country.parse::<i64>().ok() == Some(id)
    }

    /// Whether category `id` is ticked. Used by the template.
    pub fn has_category(&self, id: i64) -> bool {
        self.categories
            .iter()
            .any(|c| c.parse::<i64>().ok() == Some(id))
    }

    /// Validates the input and turns it into a [`NewStar`].
    ///
    /// `today` bounds the birth date: nobody is born in the future.
    ///
    /// # Errors
    ///
    /// Returns every field error found, not just the first.
    pub fn into_new_star(&self, today: NaiveDate) -> Result<NewStar, FormErrors> {
        let mut errors = FormErrors::default();

        if let Err(validation) = self.validate() {
            for (field, field_errors) in validation.field_errors() {
                if let Some(first) = field_errors.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| first.code.to_string());
                    errors.insert(field.to_string(), message);
                }
            }
        }

        let birth_date = match NaiveDate::parse_from_str(&self.birth_date, "%Y-%m-%d") {
            Ok(date) if date > today => {
                errors.insert("birth_date", "Дата рождения не может быть в будущем");
                None
            }
            Ok(date) => Some(date),
            Err(_) => {
                errors.insert("birth_date", "Укажите дату в формате ГГГГ-ММ-ДД");
                None
            }
        };

        let country_id = if self.country.is_empty() {
            None
        } else {
            match self.country.parse::<i64>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.insert("country", "Выберите страну из списка");
                    None
                }
            }
        };

        let mut category_ids = Vec::with_capacity(self.categories.len());
        for raw in &self.categories {
            match raw.parse::<i64>() {
                Ok(id) => category_ids.push(id),
                Err(_) => errors.insert("categories", "Выберите отрасли из списка"),
            }
        }

        match birth_date {
            Some(birth_date) if errors.is_empty() => Ok(NewStar {
                name: self.name.clone(),
                slug: self.slug.clone(),
                birth_date,
                bio: (!self.bio.is_empty()).then(|| self.bio.clone()),
                country_id,
                category_ids,
                is_published: true,
            }),
            _ => Err(errors),
        }
    }
}
