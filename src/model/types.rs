use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Slug identifier for players, courses, and tournaments, e.g. `player-1`
/// or `pebble-beach`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SlugId(String);

impl TryFrom<&str> for SlugId {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        SlugId::new(value)
            .ok_or("Invalid identifier: must be lowercase alphanumerics and hyphens")
    }
}

impl std::fmt::Display for SlugId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl SlugId {
    /// # Panics
    ///
    /// Will panic if the regex is invalid
    #[must_use]
    pub fn new(input: &str) -> Option<Self> {
        use std::sync::OnceLock;
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$")
                .expect("Invalid regex pattern - this is a programming error")
        });

        if re.is_match(input) {
            Some(SlugId(input.to_string()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// # Errors
    ///
    /// Will return `Err` if the input is not a valid slug
    pub fn parse(input: &str) -> Result<Self, EngineError> {
        Self::try_from(input).map_err(|_| EngineError::BadIdent(input.to_string()))
    }
}
