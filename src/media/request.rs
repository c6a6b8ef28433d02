//! Inbound create/update payload and its boundary validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ExperienceStatus, MediaItem, MediaType};

pub const RELEASE_YEAR_MIN: i32 = 1800;
pub const RELEASE_YEAR_MAX: i32 = 2100;
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 10;
pub const CREATOR_MAX_CHARS: usize = 100;
pub const REVIEW_MAX_CHARS: usize = 2000;

/// A field constraint violated by a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Body of a create or update call.
///
/// Required fields are still `Option` here so a missing field surfaces as a
/// [`ValidationError`] alongside every other violation instead of aborting
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub media_type: Option<MediaType>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub status: Option<ExperienceStatus>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub review: Option<String>,
}

impl From<MediaItem> for MediaItemRequest {
    fn from(item: MediaItem) -> Self {
        Self {
            title: Some(item.title),
            media_type: Some(item.media_type),
            genre: Some(item.genre),
            release_year: Some(item.release_year),
            creator: item.creator,
            status: item.status,
            rating: (item.rating != 0).then_some(i32::from(item.rating)),
            review: item.review,
        }
    }
}

impl MediaItemRequest {
    /// Check every field constraint, collecting all violations.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if is_blank(self.title.as_deref()) {
            errors.push(ValidationError::new("title", "title must not be blank"));
        }
        if self.media_type.is_none() {
            errors.push(ValidationError::new("type", "type is required"));
        }
        if is_blank(self.genre.as_deref()) {
            errors.push(ValidationError::new("genre", "genre must not be blank"));
        }
        match self.release_year {
            None => errors.push(ValidationError::new("releaseYear", "release year is required")),
            Some(year) if !(RELEASE_YEAR_MIN..=RELEASE_YEAR_MAX).contains(&year) => {
                errors.push(ValidationError::new(
                    "releaseYear",
                    format!(
                        "release year must be between {} and {}",
                        RELEASE_YEAR_MIN, RELEASE_YEAR_MAX
                    ),
                ))
            }
            Some(_) => {}
        }
        if char_len(self.creator.as_deref()) > CREATOR_MAX_CHARS {
            errors.push(ValidationError::new(
                "creator",
                format!("creator must be at most {} characters", CREATOR_MAX_CHARS),
            ));
        }
        if let Some(rating) = self.rating {
            if !(RATING_MIN..=RATING_MAX).contains(&rating) {
                errors.push(ValidationError::new(
                    "rating",
                    format!("rating must be between {} and {}", RATING_MIN, RATING_MAX),
                ));
            }
        }
        if char_len(self.review.as_deref()) > REVIEW_MAX_CHARS {
            errors.push(ValidationError::new(
                "review",
                format!("review must be at most {} characters", REVIEW_MAX_CHARS),
            ));
        }

        errors
    }

    /// Validate and convert into a storable record.
    pub fn into_item(self) -> Result<MediaItem, Vec<ValidationError>> {
        let errors = self.validate();
        let (Some(title), Some(media_type), Some(genre), Some(release_year), true) = (
            self.title,
            self.media_type,
            self.genre,
            self.release_year,
            errors.is_empty(),
        ) else {
            return Err(errors);
        };

        Ok(MediaItem {
            title,
            media_type,
            genre,
            release_year,
            creator: self.creator,
            status: self.status,
            // validated to 1..=10 above
            rating: self.rating.map_or(0, |r| r as u8),
            review: self.review,
        })
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn char_len(value: Option<&str>) -> usize {
    value.map_or(0, |v| v.chars().count())
}
