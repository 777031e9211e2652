//! Profile search filter
//!
//! A user matches when all three predicates hold: age within the inclusive
//! range, gender equal to the chosen one (or any), and the interests text
//! containing the query case-insensitively (or the query is empty). Output
//! keeps input order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BureauError;
use crate::model::{Gender, User};

/// Lower bound offered by the search form
pub const DEFAULT_MIN_AGE: i64 = 18;
/// Upper bound offered by the search form
pub const DEFAULT_MAX_AGE: i64 = 100;

/// Gender selector: a specific gender or no restriction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderChoice {
    #[default]
    Any,
    Only(Gender),
}

impl GenderChoice {
    pub fn admits(&self, gender: Gender) -> bool {
        match self {
            GenderChoice::Any => true,
            GenderChoice::Only(wanted) => *wanted == gender,
        }
    }
}

impl FromStr for GenderChoice {
    type Err = BureauError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" | "любой" => Ok(GenderChoice::Any),
            _ => s.parse().map(GenderChoice::Only),
        }
    }
}

impl fmt::Display for GenderChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenderChoice::Any => f.write_str("Любой"),
            GenderChoice::Only(gender) => gender.fmt(f),
        }
    }
}

/// Conjunctive search criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub min_age: i64,
    pub max_age: i64,
    pub gender: GenderChoice,
    /// Substring to look for in interests; empty matches everyone
    pub interests: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
            gender: GenderChoice::Any,
            interests: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Whether a single user satisfies every criterion
    pub fn matches(&self, user: &User) -> bool {
        Matcher::new(self).matches(user)
    }
}

/// Criteria with the interests query folded once up front
struct Matcher<'a> {
    criteria: &'a FilterCriteria,
    needle: String,
}

impl<'a> Matcher<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            criteria,
            needle: criteria.interests.to_lowercase(),
        }
    }

    fn matches(&self, user: &User) -> bool {
        let c = self.criteria;
        (c.min_age..=c.max_age).contains(&user.age)
            && c.gender.admits(user.gender)
            && (self.needle.is_empty() || user.interests.to_lowercase().contains(&self.needle))
    }
}

/// Keep the users that satisfy `criteria`, in input order
///
/// A range with `min_age > max_age` is empty and matches nobody.
pub fn filter_users<I>(users: I, criteria: &FilterCriteria) -> Vec<User>
where
    I: IntoIterator<Item = User>,
{
    let matcher = Matcher::new(criteria);
    users.into_iter().filter(|u| matcher.matches(u)).collect()
}
