//! Media items - the catalogue's single entity and its closed enumerations.

mod filter;
mod request;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Model;

pub use filter::{FilterParams, MediaFilter};
pub use request::{MediaItemRequest, ValidationError};

/// Kind of media being catalogued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Movie,
    Show,
    Book,
    Game,
}

impl MediaType {
    pub const ALL: [MediaType; 4] = [
        MediaType::Movie,
        MediaType::Show,
        MediaType::Book,
        MediaType::Game,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "MOVIE",
            MediaType::Show => "SHOW",
            MediaType::Book => "BOOK",
            MediaType::Game => "GAME",
        }
    }
}

/// Where the user is with a piece of media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceStatus {
    ToExperience,
    InProgress,
    Completed,
}

impl ExperienceStatus {
    pub const ALL: [ExperienceStatus; 3] = [
        ExperienceStatus::ToExperience,
        ExperienceStatus::InProgress,
        ExperienceStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceStatus::ToExperience => "TO_EXPERIENCE",
            ExperienceStatus::InProgress => "IN_PROGRESS",
            ExperienceStatus::Completed => "COMPLETED",
        }
    }
}

/// Free text that names no member of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} value: {:?}", self.kind, self.value)
    }
}

impl std::error::Error for ParseEnumError {}

// Both enums parse case-insensitively, ignoring surrounding whitespace.
macro_rules! closed_enum_text {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

closed_enum_text!(MediaType, "type");
closed_enum_text!(ExperienceStatus, "status");

/// A single catalogued piece of media.
///
/// The id lives outside the record (see [`crate::Stored`]); the store
/// assigns it on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Model)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub genre: String,
    pub release_year: i32,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub status: Option<ExperienceStatus>,
    /// 1 to 10, or 0 when unrated.
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub review: Option<String>,
}

impl MediaItem {
    pub fn new(
        title: impl Into<String>,
        media_type: MediaType,
        genre: impl Into<String>,
        release_year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            media_type,
            genre: genre.into(),
            release_year,
            creator: None,
            status: None,
            rating: 0,
            review: None,
        }
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    pub fn with_status(mut self, status: ExperienceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_review(mut self, review: impl Into<String>) -> Self {
        self.review = Some(review.into());
        self
    }
}
