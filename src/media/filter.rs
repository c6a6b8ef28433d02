//! Composite filter over media items.
//!
//! Six independently optional predicates, combined with AND. An absent
//! predicate places no constraint on its field. Text predicates that are
//! empty or whitespace-only count as absent: callers pass `""` to mean
//! "unset".

use serde::{Deserialize, Deserializer};

use super::{ExperienceStatus, MediaItem, MediaType, ParseEnumError};

/// Typed filter criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaFilter {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    pub media_type: Option<MediaType>,
    /// Case-insensitive substring of the genre.
    pub genre: Option<String>,
    /// Case-insensitive substring of the creator.
    pub creator: Option<String>,
    pub rating: Option<i32>,
    pub status: Option<ExperienceStatus>,
}

impl MediaFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn status(mut self, status: ExperienceStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// True when no predicate constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        needle(&self.title).is_none()
            && self.media_type.is_none()
            && needle(&self.genre).is_none()
            && needle(&self.creator).is_none()
            && self.rating.is_none()
            && self.status.is_none()
    }

    /// Evaluate every present predicate against the item.
    pub fn matches(&self, item: &MediaItem) -> bool {
        contains_ignore_case(Some(item.title.as_str()), &self.title)
            && self.media_type.map_or(true, |t| item.media_type == t)
            && contains_ignore_case(Some(item.genre.as_str()), &self.genre)
            && contains_ignore_case(item.creator.as_deref(), &self.creator)
            && self.rating.map_or(true, |r| i32::from(item.rating) == r)
            && self.status.map_or(true, |s| item.status == Some(s))
    }
}

/// The effective text predicate: `None` for absent, empty or blank input.
fn needle(predicate: &Option<String>) -> Option<&str> {
    predicate.as_deref().filter(|s| !s.trim().is_empty())
}

/// A missing haystack only matches when the predicate is absent.
fn contains_ignore_case(haystack: Option<&str>, predicate: &Option<String>) -> bool {
    match needle(predicate) {
        None => true,
        Some(needle) => haystack.map_or(false, |h| {
            h.to_lowercase().contains(&needle.to_lowercase())
        }),
    }
}

/// Raw filter parameters as they arrive from a query string, with the
/// enumerated fields still free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub media_type: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub rating: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TryFrom<&FilterParams> for MediaFilter {
    type Error = ParseEnumError;

    /// Coerce free-text enum values, failing closed on unknown text.
    /// Blank enum text is treated as absent.
    fn try_from(params: &FilterParams) -> Result<Self, Self::Error> {
        Ok(MediaFilter {
            title: params.title.clone(),
            media_type: parse_optional(&params.media_type)?,
            genre: params.genre.clone(),
            creator: params.creator.clone(),
            rating: params.rating,
            status: parse_optional(&params.status)?,
        })
    }
}

fn parse_optional<T>(text: &Option<String>) -> Result<Option<T>, ParseEnumError>
where
    T: std::str::FromStr<Err = ParseEnumError>,
{
    needle(text).map(|s| s.parse::<T>()).transpose()
}

/// `?rating=` with no value means "no constraint", like omitting it.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
