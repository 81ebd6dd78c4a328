//! Attribute filters applied before the geometric search.

use serde::Deserialize;

use crate::domain::{Institution, InstitutionType};

/// Attribute predicates for narrowing the candidate set.
///
/// Every field is optional; unset fields match everything. Boolean flags
/// only filter when set to `true`, so `Some(false)` means "don't care"
/// rather than "must not be".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AttributeFilters {
    /// Exact institution type
    pub institution_type: Option<InstitutionType>,

    /// Case-insensitive substring of the city
    pub city: Option<String>,

    /// Case-insensitive substring of the name
    pub name: Option<String>,

    /// Minimum rating (institutions without a rating never match)
    pub min_rating: Option<f64>,

    pub bilingual: Option<bool>,
    pub international: Option<bool>,
    pub offers_english: Option<bool>,
}

impl AttributeFilters {
    /// Returns true if no filter is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check whether an institution passes every filter.
    pub fn matches(&self, institution: &Institution) -> bool {
        if let Some(t) = self.institution_type
            && institution.institution_type != t
        {
            return false;
        }

        if let Some(city) = &self.city
            && !contains_ignore_case(&institution.city, city)
        {
            return false;
        }

        if let Some(name) = &self.name
            && !contains_ignore_case(&institution.name, name)
        {
            return false;
        }

        if let Some(min) = self.min_rating
            && !institution.rating.is_some_and(|r| r >= min)
        {
            return false;
        }

        let flags = [
            (self.bilingual, institution.is_bilingual),
            (self.international, institution.is_international),
            (self.offers_english, institution.offers_english),
        ];
        flags
            .into_iter()
            .all(|(wanted, actual)| wanted != Some(true) || actual)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
