//! Course entity - The closed set of categories a dish can belong to.
//!
//! Free text only becomes a [`Course`] through [`FromStr`], which is the single
//! place course names are accepted from outside the core.

use crate::errors::Error;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Where a dish sits in a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Course {
    /// Served first
    Starter,
    /// The main plate; default for a new draft
    #[default]
    Main,
    /// Served last
    Dessert,
    /// Accompaniment to another dish
    Side,
    /// Beverages
    Drink,
}

impl Course {
    /// Every course in picker order.
    pub const ALL: [Self; 5] = [
        Self::Starter,
        Self::Main,
        Self::Dessert,
        Self::Side,
        Self::Drink,
    ];

    /// Display name of the course.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Main => "Main",
            Self::Dessert => "Dessert",
            Self::Side => "Side",
            Self::Drink => "Drink",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = Error;

    /// Parses a course name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|course| course.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCourse {
                name: wanted.to_string(),
            })
    }
}
